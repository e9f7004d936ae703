//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [PropagatingSolver] as a generally usable implementation.
//! The propagating solver interleaves two mechanisms:
//!
//! * A *reduction loop* that applies the propagation strategies from the
//! [strategy] module round after round until they stop solving new cells or
//! a cell runs out of candidates (see [PropagatingSolver::reduce]).
//! * A depth-first *backtracking search* that, whenever reduction stalls,
//! picks the unsolved cell with the fewest remaining candidates and branches
//! over them on independent copies of the grid.
//!
//! Every branch strictly reduces the number of unsolved cells or dies in a
//! contradiction, so the search always terminates.

use crate::Sudoku;
use crate::SudokuGrid;
use crate::solver::strategy::{
    CandidateGrid,
    CompositeStrategy,
    EliminationStrategy,
    NakedTwinsStrategy,
    OnlyChoiceStrategy,
    Strategy
};
use crate::trace::AssignmentLog;

use log::{debug, trace};

pub mod strategy;

/// An enumeration of the ways a solve attempt can end. There is no partial
/// success: a puzzle is either solved completely or not at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is not solveable at all under its ruleset.
    Impossible,

    /// Indicates that a complete solution was found, which is wrapped in this
    /// instance. If the puzzle admits more than one solution, this is the
    /// first one found by the deterministic search order.
    Solved(SudokuGrid)
}

/// A trait for structs which have the ability to solve Sudoku.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku. Implementations
    /// shall return [Solution::Impossible] rather than panic if the puzzle
    /// has no solution, including the case that the given clues are already
    /// contradictory.
    fn solve(&self, sudoku: &Sudoku) -> Solution;
}

/// The terminal outcomes of the reduction loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Reduction {

    /// Propagation stopped making progress. The grid may be completely
    /// solved or merely stalled; the caller decides whether to branch.
    Done,

    /// Some cell ran out of candidates, so the grid admits no solution.
    Contradiction
}

/// A [Solver] which combines the propagation strategies with a depth-first
/// backtracking search.
///
/// The solver is generic over the [Strategy] that is applied in each round of
/// the reduction loop; [PropagatingSolver::new_default] wires up elimination,
/// only-choice, and naked twins in that order, which is sufficient for any
/// solveable puzzle (the search picks up whatever propagation cannot
/// finish).
///
/// A solver can optionally be given an [AssignmentLog] which then receives a
/// snapshot for every cell resolution across the whole search, for example:
///
/// ```
/// use sudoku_propagate::Sudoku;
/// use sudoku_propagate::solver::{PropagatingSolver, Solution, Solver};
/// use sudoku_propagate::topology::Ruleset;
/// use sudoku_propagate::trace::AssignmentLog;
///
/// let code = "\
///     53..7....\
///     6..195...\
///     .98....6.\
///     8...6...3\
///     4..8.3..1\
///     7...2...6\
///     .6....28.\
///     ...419..5\
///     ....8..79";
/// let sudoku = Sudoku::parse(code, Ruleset::Classic).unwrap();
/// let log = AssignmentLog::recording();
/// let solver = PropagatingSolver::new_default().with_log(log.clone());
///
/// if let Solution::Solved(grid) = solver.solve(&sudoku) {
///     assert!(sudoku.is_valid_solution(&grid));
///     assert!(!log.is_empty());
/// }
/// else {
///     panic!("solveable Sudoku marked as impossible");
/// }
/// ```
pub struct PropagatingSolver<S: Strategy> {
    strategy: S,
    log: AssignmentLog
}

/// The strategy stack used by [PropagatingSolver::new_default]: elimination,
/// then only-choice, then naked twins, each seeing the output of the
/// previous one.
pub type DefaultStrategy = CompositeStrategy<EliminationStrategy,
    CompositeStrategy<OnlyChoiceStrategy, NakedTwinsStrategy>>;

/// Finds the unsolved cell for which there are the fewest candidates and
/// returns its coordinates in the form `(column, row)`. Ties are broken in
/// row-major order. Must only be called on grids that have at least one
/// unsolved cell and no contradiction.
fn find_min_candidates(grid: &CandidateGrid) -> (usize, usize) {
    let mut min_column = 0usize;
    let mut min_row = 0usize;
    let mut min_len = usize::MAX;

    for row in 0..crate::SIZE {
        for column in 0..crate::SIZE {
            let len = grid.candidates(column, row).unwrap().len();

            if len > 1 && len < min_len {
                min_column = column;
                min_row = row;
                min_len = len;
            }
        }
    }

    (min_column, min_row)
}

impl PropagatingSolver<DefaultStrategy> {

    /// Creates a new propagating solver with the default strategy stack and
    /// no assignment log.
    pub fn new_default() -> PropagatingSolver<DefaultStrategy> {
        PropagatingSolver::new(
            CompositeStrategy::new(
                EliminationStrategy,
                CompositeStrategy::new(OnlyChoiceStrategy, NakedTwinsStrategy)))
    }
}

impl<S: Strategy> PropagatingSolver<S> {

    /// Creates a new propagating solver that runs the given `strategy` in
    /// every round of its reduction loop. No assignment log is recorded; use
    /// [PropagatingSolver::with_log] for that.
    pub fn new(strategy: S) -> PropagatingSolver<S> {
        PropagatingSolver {
            strategy,
            log: AssignmentLog::disabled()
        }
    }

    /// Replaces the assignment log of this solver. All solve calls from here
    /// on record their assignments into `log`.
    pub fn with_log(self, log: AssignmentLog) -> PropagatingSolver<S> {
        PropagatingSolver {
            strategy: self.strategy,
            log
        }
    }

    /// Runs the reduction loop on the given grid until it terminates.
    ///
    /// Each round applies the solver's strategy once and then inspects the
    /// grid: if any cell has run out of candidates, the loop ends with
    /// [Reduction::Contradiction]; if the round solved no additional cell,
    /// further rounds cannot make progress either and the loop ends with
    /// [Reduction::Done], leaving the grid at its current reduction.
    /// Otherwise the next round starts.
    pub fn reduce(&self, grid: &mut CandidateGrid) -> Reduction {
        loop {
            let solved_before = grid.solved_count();
            self.strategy.apply(grid);
            let solved_after = grid.solved_count();

            if grid.has_contradiction() {
                trace!("reduction ran into a contradiction");
                return Reduction::Contradiction;
            }

            if solved_after == solved_before {
                trace!("reduction stalled at {} solved cells", solved_after);
                return Reduction::Done;
            }
        }
    }

    fn search(&self, grid: &mut CandidateGrid, depth: usize)
            -> Option<SudokuGrid> {
        if let Reduction::Contradiction = self.reduce(grid) {
            return None;
        }

        if grid.is_complete() {
            debug!("solved at search depth {}", depth);
            return grid.to_grid();
        }

        let (column, row) = find_min_candidates(grid);
        let candidates = grid.candidates(column, row).unwrap();
        trace!("depth {}: branching on ({}, {}) over {{{}}}",
            depth, column, row, candidates);

        for digit in candidates.iter() {
            let mut branch = grid.clone();
            branch.set_digit(column, row, digit).unwrap();

            if let Some(solution) = self.search(&mut branch, depth + 1) {
                return Some(solution);
            }
        }

        None
    }
}

impl<S: Strategy> Solver for PropagatingSolver<S> {
    fn solve(&self, sudoku: &Sudoku) -> Solution {
        let mut grid = CandidateGrid::from_sudoku(sudoku, self.log.clone());

        match self.search(&mut grid, 0) {
            Some(grid) => Solution::Solved(grid),
            None => Solution::Impossible
        }
    }
}
