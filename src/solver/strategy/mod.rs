//! This module is about the propagation strategies used to narrow a puzzle
//! down before and during the backtracking search.
//!
//! It contains the definition of the [Strategy] trait, which all strategies
//! must implement, as well as the [CandidateGrid] struct, the mutable state
//! every strategy reads and writes. This is analogous to the pencil markings
//! a human player would make.
//!
//! The pre-defined strategies live in the [impls] submodule and are
//! re-exported here.
//!
//! # Implementing a custom strategy
//!
//! A strategy receives a mutable [CandidateGrid] and makes whatever
//! deductions it can, removing candidates with [CandidateGrid::eliminate] or
//! entering digits with [CandidateGrid::set_digit]. It must return `true` if
//! and only if it changed something, which tells the reduction loop whether
//! applying strategies again may find more.
//!
//! As an example, the following strategy performs a small subset of the work
//! of the [EliminationStrategy]: for every solved cell, it removes that
//! cell's digit from the rest of its row only.
//!
//! ```
//! use sudoku_propagate::solver::strategy::{CandidateGrid, Strategy};
//!
//! struct RowEliminationStrategy;
//!
//! impl Strategy for RowEliminationStrategy {
//!     fn apply(&self, grid: &mut CandidateGrid) -> bool {
//!         let mut changed = false;
//!
//!         for row in 0..9 {
//!             for column in 0..9 {
//!                 if let Some(digit) = grid.solved_digit(column, row) {
//!                     for other_column in 0..9 {
//!                         if other_column != column {
//!                             changed |= grid
//!                                 .eliminate(other_column, row, digit)
//!                                 .unwrap();
//!                         }
//!                     }
//!                 }
//!             }
//!         }
//!
//!         changed
//!     }
//! }
//! ```

use crate::{SIZE, Sudoku, SudokuGrid, index};
use crate::error::{SudokuError, SudokuResult};
use crate::topology::Topology;
use crate::trace::AssignmentLog;
use crate::util::DigitSet;

use std::fmt::{self, Display, Formatter};

pub mod impls;

pub use impls::*;

/// Tracks, for every cell of a puzzle, which digits can still go into it. A
/// cell with exactly one candidate is solved; a cell with an empty candidate
/// set marks a contradiction.
///
/// The grid shares the immutable [Topology] of its ruleset and carries an
/// [AssignmentLog] handle. Cloning a `CandidateGrid` yields an independently
/// mutable copy of the candidate sets, which the backtracking search relies
/// on to keep sibling branches from interfering, while topology and log
/// remain shared.
#[derive(Clone)]
pub struct CandidateGrid {
    topology: &'static Topology,
    cells: Vec<DigitSet>,
    log: AssignmentLog
}

impl CandidateGrid {

    /// Creates a new candidate grid for a [Sudoku]. Cells that are filled in
    /// the provided puzzle get a singleton candidate set, empty cells get the
    /// full set of all nine digits. Propagation, not construction, is
    /// responsible for pruning.
    ///
    /// The given [AssignmentLog] receives a snapshot for every later
    /// assignment; pass [AssignmentLog::disabled] if the trace is not needed.
    pub fn from_sudoku(sudoku: &Sudoku, log: AssignmentLog) -> CandidateGrid {
        let mut cells = Vec::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let cell = sudoku.grid().get_cell(column, row).unwrap();
                let candidates = match cell {
                    Some(digit) => DigitSet::singleton(digit).unwrap(),
                    None => DigitSet::full()
                };

                cells.push(candidates);
            }
        }

        CandidateGrid {
            topology: Topology::shared(sudoku.ruleset()),
            cells,
            log
        }
    }

    fn verified_index(&self, column: usize, row: usize) -> SudokuResult<usize> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(index(column, row))
        }
    }

    /// Gets the topology this grid is solved against. The returned reference
    /// is `'static` since topologies are shared for the process lifetime.
    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    /// Gets the candidate set of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn candidates(&self, column: usize, row: usize)
            -> SudokuResult<DigitSet> {
        let index = self.verified_index(column, row)?;
        Ok(self.cells[index])
    }

    /// Gets a mutable reference to the candidate set of the cell at the
    /// specified position. Changes made through this reference bypass the
    /// assignment log; it is intended for constructing test scenarios and
    /// custom deductions that log on their own terms.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn candidates_mut(&mut self, column: usize, row: usize)
            -> SudokuResult<&mut DigitSet> {
        let index = self.verified_index(column, row)?;
        Ok(&mut self.cells[index])
    }

    /// If the cell at the specified position is solved, that is, has exactly
    /// one candidate left, returns that digit, and `None` otherwise.
    /// Out-of-bounds coordinates also yield `None`.
    pub fn solved_digit(&self, column: usize, row: usize) -> Option<usize> {
        self.candidates(column, row).ok()?.as_singleton()
    }

    /// Collapses the candidate set of the cell at the specified position to
    /// the single given digit. If the cell was not already solved, a snapshot
    /// is recorded in the assignment log.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_digit(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        let singleton = DigitSet::singleton(digit)?;
        let index = self.verified_index(column, row)?;
        let before = self.cells[index];
        self.cells[index] = singleton;

        if before.len() != 1 {
            self.log.record(&self.cells);
        }

        Ok(())
    }

    /// Removes the given digit from the candidate set of the cell at the
    /// specified position. If this leaves the cell with exactly one
    /// candidate, a snapshot is recorded in the assignment log. Removing the
    /// last candidate is permitted and leaves the grid in a contradictory
    /// state, which [CandidateGrid::has_contradiction] reports.
    ///
    /// This method returns `true` if the digit was actually removed and
    /// `false` if it was not a candidate to begin with.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the affected cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the affected cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to remove. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn eliminate(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<bool> {
        let index = self.verified_index(column, row)?;
        let removed = self.cells[index].remove(digit)?;

        if removed && self.cells[index].len() == 1 {
            self.log.record(&self.cells);
        }

        Ok(removed)
    }

    /// Counts the cells whose candidate set has been narrowed to a single
    /// digit. The reduction loop uses this count to detect stalls.
    pub fn solved_count(&self) -> usize {
        self.cells.iter().filter(|c| c.len() == 1).count()
    }

    /// Indicates whether every cell has exactly one candidate left, i.e. the
    /// puzzle is completely solved (assuming no contradiction).
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.len() == 1)
    }

    /// Indicates whether any cell has run out of candidates, which means the
    /// grid, and with it the current search branch, admits no solution.
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Converts this candidate grid into a [SudokuGrid] with every solved
    /// cell filled in. Returns `None` if any cell still has more than one
    /// candidate or none at all.
    pub fn to_grid(&self) -> Option<SudokuGrid> {
        let mut grid = SudokuGrid::empty();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let digit = self.solved_digit(column, row)?;
                grid.set_cell(column, row, digit).unwrap();
            }
        }

        Some(grid)
    }

    /// Gets a read-only view of the candidate sets of all cells, in
    /// row-major order.
    pub fn cells(&self) -> &[DigitSet] {
        &self.cells
    }

    /// Gets the [AssignmentLog] handle this grid records to.
    pub fn log(&self) -> &AssignmentLog {
        &self.log
    }
}

impl Display for CandidateGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.cells.iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(1) + 1;
        let segment = "-".repeat(width * 3);
        let separator = format!("{0}+{0}+{0}", segment);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let candidates =
                    self.candidates(column, row).unwrap().to_string();
                let padding = width - candidates.len();
                let left = padding / 2;
                write!(f, "{0}{1}{2}",
                    " ".repeat(left),
                    candidates,
                    " ".repeat(padding - left))?;

                if column == 2 || column == 5 {
                    f.write_str("|")?;
                }
            }

            writeln!(f)?;

            if row == 2 || row == 5 {
                writeln!(f, "{}", separator)?;
            }
        }

        Ok(())
    }
}

/// A trait for strategies, which use logical reasoning to restrict the
/// candidates of a puzzle.
pub trait Strategy {

    /// Applies this strategy to the given candidate grid. The strategy may
    /// rely on and modify the candidates in `grid`. The result is seen by
    /// other strategies that participate in the solution and by future
    /// applications of the same strategy.
    ///
    /// This method shall return `true` if and only if something has changed,
    /// that is, a digit has been entered or a candidate has been removed.
    fn apply(&self, grid: &mut CandidateGrid) -> bool;
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::digits;
    use crate::topology::Ruleset;

    fn example_grid() -> CandidateGrid {
        let code = "\
            2........\
            .........\
            .........\
            .........\
            ....5....\
            .........\
            .........\
            .........\
            ........3";
        let sudoku = Sudoku::parse(code, Ruleset::Diagonal).unwrap();
        CandidateGrid::from_sudoku(&sudoku, AssignmentLog::disabled())
    }

    #[test]
    fn construction_expands_empty_cells() {
        let grid = example_grid();

        assert_eq!(digits!(2), grid.candidates(0, 0).unwrap());
        assert_eq!(digits!(5), grid.candidates(4, 4).unwrap());
        assert_eq!(DigitSet::full(), grid.candidates(3, 0).unwrap());
        assert_eq!(3, grid.solved_count());
        assert!(!grid.is_complete());
        assert!(!grid.has_contradiction());
    }

    #[test]
    fn out_of_bounds_candidates() {
        let grid = example_grid();
        assert_eq!(Err(SudokuError::OutOfBounds), grid.candidates(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.candidates(0, 9));
    }

    #[test]
    fn set_digit_records_snapshot() {
        let sudoku = Sudoku::parse(
            &".".repeat(81), Ruleset::Classic).unwrap();
        let log = AssignmentLog::recording();
        let mut grid = CandidateGrid::from_sudoku(&sudoku, log.clone());

        grid.set_digit(3, 4, 7).unwrap();

        assert_eq!(Some(7), grid.solved_digit(3, 4));
        assert_eq!(1, log.len());
        assert_eq!(digits!(7), log.snapshots()[0].candidates(3, 4));

        // Re-assigning a solved cell does not log again.
        grid.set_digit(3, 4, 7).unwrap();
        assert_eq!(1, log.len());
    }

    #[test]
    fn eliminate_records_snapshot_on_final_reduction() {
        let sudoku = Sudoku::parse(
            &".".repeat(81), Ruleset::Classic).unwrap();
        let log = AssignmentLog::recording();
        let mut grid = CandidateGrid::from_sudoku(&sudoku, log.clone());

        for digit in 1..=7 {
            assert!(grid.eliminate(0, 0, digit).unwrap());
        }

        assert!(log.is_empty());
        assert!(grid.eliminate(0, 0, 8).unwrap());
        assert_eq!(1, log.len());
        assert_eq!(Some(9), grid.solved_digit(0, 0));

        // Removing a digit that is no candidate changes nothing.
        assert!(!grid.eliminate(0, 0, 8).unwrap());
        assert_eq!(1, log.len());
    }

    #[test]
    fn emptied_cell_is_a_contradiction() {
        let mut grid = example_grid();
        grid.candidates_mut(0, 0).unwrap().clear();

        assert!(grid.has_contradiction());
        assert_eq!(None, grid.to_grid());
    }

    #[test]
    fn clones_are_independent() {
        let mut original = example_grid();
        let mut branch = original.clone();

        branch.set_digit(8, 0, 4).unwrap();

        assert_eq!(Some(4), branch.solved_digit(8, 0));
        assert_eq!(None, original.solved_digit(8, 0));

        original.eliminate(7, 7, 3).unwrap();
        assert!(branch.candidates(7, 7).unwrap().contains(3));
    }

    #[test]
    fn display_shows_candidates_with_separators() {
        let sudoku = Sudoku::parse(
            &"1".repeat(81), Ruleset::Classic).unwrap();
        let grid = CandidateGrid::from_sudoku(&sudoku, AssignmentLog::disabled());
        let rendered = grid.to_string();

        assert_eq!(11, rendered.lines().count());
        assert!(rendered.contains('|'));
        assert!(rendered.contains('+'));
    }
}
