// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand Sudoku solving engine built
//! around constraint propagation and backtracking search. It supports the
//! following key features:
//!
//! * Parsing and printing 9x9 Sudoku
//! * Checking validity of grids and solutions under classic rules as well as
//! the diagonal variant, where the two main diagonals must also contain
//! every digit exactly once
//! * Solving Sudoku by reducing candidate sets with propagation strategies
//! (elimination, only-choice, and naked twins) and branching with a
//! minimum-remaining-values depth-first search where propagation stalls
//! * Recording an assignment trace that visualization frontends can replay
//!
//! # Parsing and printing Sudoku
//!
//! A puzzle is written as a code of exactly 81 characters, one cell per
//! character in left-to-right, top-to-bottom order, where each digit stands
//! for a filled cell and `'.'` for an empty one. See [SudokuGrid::parse] for
//! details.
//!
//! ```
//! use sudoku_propagate::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     2........\
//!     .....62..\
//!     ..1....7.\
//!     ..6..8...\
//!     3...9...7\
//!     ...6..4..\
//!     .4....8..\
//!     ..52.....\
//!     ........3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! To check validity, an instance of [Sudoku] couples the numbers (stored in
//! a [SudokuGrid]) with a [Ruleset](topology::Ruleset) which specifies the
//! units in which digits must not repeat.
//!
//! ```
//! use sudoku_propagate::Sudoku;
//! use sudoku_propagate::topology::Ruleset;
//!
//! // Two 4s in the first column.
//! let mut code = String::from("4........");
//! code.push_str("4........");
//! code.push_str(&".".repeat(63));
//!
//! let sudoku = Sudoku::parse(&code, Ruleset::Classic).unwrap();
//! assert!(!sudoku.is_valid());
//! ```
//!
//! # Solving Sudoku
//!
//! The [solve] entry point parses a code and runs the default
//! [PropagatingSolver](solver::PropagatingSolver) on it. It either returns a
//! completely solved grid or an explicit error; there are no partial
//! results. More control, such as a custom strategy stack or an assignment
//! trace, is available through the [solver] module.
//!
//! ```
//! use sudoku_propagate::{Sudoku, solve};
//! use sudoku_propagate::topology::Ruleset;
//!
//! let code = "\
//!     2........\
//!     .....62..\
//!     ..1....7.\
//!     ..6..8...\
//!     3...9...7\
//!     ...6..4..\
//!     .4....8..\
//!     ..52.....\
//!     ........3";
//! let solution = solve(code, Ruleset::Diagonal).unwrap();
//!
//! assert!(solution.is_full());
//! let sudoku = Sudoku::parse(code, Ruleset::Diagonal).unwrap();
//! assert!(sudoku.is_valid_solution(&solution));
//! ```

pub mod error;
pub mod solver;
pub mod topology;
pub mod trace;
pub mod util;



use crate::error::{
    SolveError,
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::solver::{PropagatingSolver, Solution, Solver};
use crate::topology::{Ruleset, Topology};
use crate::util::contains_duplicate;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of columns and rows of a Sudoku grid.
pub const SIZE: usize = 9;

pub(crate) const BLOCK_SIZE: usize = 3;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid, composed of 81 cells that are organized into 9 3x3
/// blocks. Each cell may or may not be occupied by a digit from 1 to 9.
///
/// A grid carries no rules; it is just the numbers. Rules enter the picture
/// when a grid is wrapped into a [Sudoku] together with a
/// [Ruleset](topology::Ruleset).
///
/// `SudokuGrid` implements `Display`, rendering the grid with box separators:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 2 │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │ 6 ║ 2 │   │   ║
/// ...
/// ```
///
/// Grids serialize as their 81-character [code](SudokuGrid::to_code).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which no cell is filled.
    pub fn empty() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; SIZE * SIZE]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code must consist of
    /// exactly 81 characters, each of which is either a digit from 1 to 9
    /// for a filled cell or `'.'` for an empty one. The characters are
    /// assigned left-to-right, top-to-bottom, where each row is completed
    /// before the next one is started.
    ///
    /// As an example, the code
    /// `53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79`
    /// encodes a well-known easy puzzle.
    ///
    /// Note that no rules are checked here; codes whose digits clash are
    /// parsed without complaint. Use [Sudoku::is_valid] to check the result
    /// against a ruleset.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongLength` if the code does not have exactly
    /// 81 characters.
    /// * `SudokuParseError::InvalidCharacter` if any character is neither a
    /// digit from 1 to 9 nor `'.'`.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let len = code.chars().count();

        if len != SIZE * SIZE {
            return Err(SudokuParseError::WrongLength(len));
        }

        let mut grid = SudokuGrid::empty();

        for (i, c) in code.chars().enumerate() {
            match c {
                '.' => { },
                '1'..='9' => {
                    grid.cells[i] = Some(c as usize - '0' as usize);
                },
                _ => return Err(SudokuParseError::InvalidCharacter(c))
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a code and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_propagate::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::empty();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let code = grid.to_code();
    /// let grid_parsed = SudokuGrid::parse(code.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_code(&self) -> String {
        self.cells.iter()
            .map(|cell| match cell {
                Some(digit) => (b'0' + *digit as u8) as char,
                None => '.'
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position.
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
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
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
    pub fn set_cell(&mut self, column: usize, row: usize, digit: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if digit < 1 || digit > SIZE {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[index(column, row)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| match self_cell {
                Some(_) => self_cell == other_cell,
                None => true
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_code()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> Result<SudokuGrid, SudokuParseError> {
        SudokuGrid::parse(&code)
    }
}

/// A Sudoku represents a grid of digits with an associated
/// [Ruleset](topology::Ruleset). The digits may or may not fulfill the rules,
/// but there is a method to check it.
///
/// There is no guarantee that a Sudoku is solveable at all, however the
/// [solver](crate::solver) module offers ways to find out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sudoku {
    grid: SudokuGrid,
    ruleset: Ruleset
}

impl Sudoku {

    /// Creates a new Sudoku with the provided ruleset and an empty grid.
    pub fn new_empty(ruleset: Ruleset) -> Sudoku {
        Sudoku {
            grid: SudokuGrid::empty(),
            ruleset
        }
    }

    /// Creates a new Sudoku with the provided ruleset and a given grid,
    /// which may already contain some digits. Note that it is *not* checked
    /// whether the given grid fulfills the rules - it is perfectly legal to
    /// create an invalid Sudoku here.
    pub fn new_with_grid(grid: SudokuGrid, ruleset: Ruleset) -> Sudoku {
        Sudoku {
            grid,
            ruleset
        }
    }

    /// Parses the code into a [SudokuGrid] using [SudokuGrid::parse] and
    /// wraps the result in a Sudoku with the given ruleset. Note that it is
    /// not required that the code matches the rules. It is perfectly legal
    /// to parse an invalid Sudoku.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [SudokuGrid::parse] for further
    /// information.
    pub fn parse(code: &str, ruleset: Ruleset) -> SudokuParseResult<Sudoku> {
        Ok(Sudoku::new_with_grid(SudokuGrid::parse(code)?, ruleset))
    }

    /// Gets a reference to the [SudokuGrid] of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [SudokuGrid] of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets the [Ruleset](topology::Ruleset) under which this Sudoku is
    /// played.
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Gets the shared [Topology] that belongs to this Sudoku's ruleset.
    pub fn topology(&self) -> &'static Topology {
        Topology::shared(self.ruleset)
    }

    /// Indicates whether the grid matches the rules, that is, no unit of the
    /// topology contains any digit more than once. Empty cells are ignored,
    /// so partial grids can be valid.
    pub fn is_valid(&self) -> bool {
        for unit in self.topology().units() {
            let filled = unit.iter()
                .filter_map(|&(column, row)|
                    self.grid.get_cell(column, row).unwrap());

            if contains_duplicate(filled) {
                return false;
            }
        }

        true
    }

    /// Indicates whether the given [SudokuGrid] is a valid solution to this
    /// puzzle. That is the case if all digits from this Sudoku can be found
    /// in the `solution`, it matches the rules of this Sudoku, and it is
    /// full.
    pub fn is_valid_solution(&self, solution: &SudokuGrid) -> bool {
        self.grid.is_subset(solution) &&
            Sudoku::new_with_grid(solution.clone(), self.ruleset).is_valid() &&
            solution.is_full()
    }
}

/// Solves the puzzle encoded by the given 81-character code under the given
/// ruleset, using the default [PropagatingSolver](solver::PropagatingSolver).
///
/// # Errors
///
/// * `SolveError::Parse` if the code is malformed. The code is rejected
/// before any solving begins.
/// * `SolveError::Unsolvable` if the search exhausts all branches without
/// finding a solution, which includes the case of contradictory clues.
pub fn solve(code: &str, ruleset: Ruleset)
        -> Result<SudokuGrid, SolveError> {
    let sudoku = Sudoku::parse(code, ruleset)?;

    match PropagatingSolver::new_default().solve(&sudoku) {
        Solution::Solved(grid) => Ok(grid),
        Solution::Impossible => Err(SolveError::Unsolvable)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut code = String::from("1..2.3..4");
        code.push_str(&".".repeat(72));
        let grid = SudokuGrid::parse(&code).unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(5, 0).unwrap());
        assert_eq!(Some(4), grid.get_cell(8, 0).unwrap());
        assert_eq!(None, grid.get_cell(0, 1).unwrap());
        assert_eq!(4, grid.count_clues());
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Err(SudokuParseError::WrongLength(5)),
            SudokuGrid::parse("12345"));
        assert_eq!(Err(SudokuParseError::WrongLength(82)),
            SudokuGrid::parse(&".".repeat(82)));
        assert_eq!(Err(SudokuParseError::WrongLength(0)),
            SudokuGrid::parse(""));
    }

    #[test]
    fn parse_invalid_character() {
        let mut code = String::from("12x");
        code.push_str(&".".repeat(78));
        assert_eq!(Err(SudokuParseError::InvalidCharacter('x')),
            SudokuGrid::parse(&code));

        let mut code = String::from("0");
        code.push_str(&".".repeat(80));
        assert_eq!(Err(SudokuParseError::InvalidCharacter('0')),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn code_round_trip() {
        let mut code = String::from("1..2.3..4");
        code.push_str(&".".repeat(71));
        code.push('5');
        let grid = SudokuGrid::parse(&code).unwrap();

        assert_eq!(code, grid.to_code());
        assert_eq!(grid, SudokuGrid::parse(&grid.to_code()).unwrap());
    }

    #[test]
    fn cell_manipulation() {
        let mut grid = SudokuGrid::empty();
        assert!(grid.is_empty());

        grid.set_cell(3, 4, 7).unwrap();
        assert_eq!(Some(7), grid.get_cell(3, 4).unwrap());
        assert_eq!(1, grid.count_clues());
        assert!(!grid.is_empty());
        assert!(!grid.is_full());

        grid.clear_cell(3, 4).unwrap();
        assert_eq!(None, grid.get_cell(3, 4).unwrap());
        assert!(grid.is_empty());
    }

    #[test]
    fn cell_manipulation_errors() {
        let mut grid = SudokuGrid::empty();
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 10));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(9, 9));
    }

    const SOLVED_CLASSIC: &str = "\
        746281359\
        912537846\
        853496172\
        374125698\
        628749513\
        591368724\
        169874235\
        285913467\
        437652981";

    const CLASSIC_PUZZLE: &str = "\
        ....81...\
        ..2..78..\
        .53...17.\
        37.......\
        6.......3\
        .......24\
        .69...23.\
        ..59..4..\
        ...65....";

    #[test]
    fn subset_relations() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let solved = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();
        let empty = SudokuGrid::empty();

        assert!(empty.is_subset(&puzzle));
        assert!(puzzle.is_subset(&solved));
        assert!(solved.is_superset(&puzzle));
        assert!(!solved.is_subset(&puzzle));
        assert!(puzzle.is_subset(&puzzle));
    }

    #[test]
    fn changed_cell_breaks_subset() {
        let solved = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();
        let mut changed = solved.clone();
        let swapped = match changed.get_cell(0, 0).unwrap().unwrap() {
            7 => 6,
            _ => 7
        };
        changed.set_cell(0, 0, swapped).unwrap();

        assert!(!changed.is_subset(&solved));
        assert!(!changed.is_superset(&solved));
    }

    #[test]
    fn row_duplicate_is_invalid() {
        let mut code = String::from("22");
        code.push_str(&".".repeat(79));
        let sudoku = Sudoku::parse(&code, Ruleset::Classic).unwrap();
        assert!(!sudoku.is_valid());
    }

    #[test]
    fn column_duplicate_is_invalid() {
        let mut code = String::from("5........");
        code.push_str("5........");
        code.push_str(&".".repeat(63));
        let sudoku = Sudoku::parse(&code, Ruleset::Classic).unwrap();
        assert!(!sudoku.is_valid());
    }

    #[test]
    fn block_duplicate_is_invalid() {
        let mut code = String::from("5........");
        code.push_str(".5.......");
        code.push_str(&".".repeat(63));
        let sudoku = Sudoku::parse(&code, Ruleset::Classic).unwrap();
        assert!(!sudoku.is_valid());
    }

    #[test]
    fn diagonal_duplicate_is_only_invalid_with_diagonals() {
        // The solved classic grid repeats digits on the main diagonal.
        let classic =
            Sudoku::parse(SOLVED_CLASSIC, Ruleset::Classic).unwrap();
        let diagonal =
            Sudoku::parse(SOLVED_CLASSIC, Ruleset::Diagonal).unwrap();

        assert!(classic.is_valid());
        assert!(!diagonal.is_valid());
    }

    #[test]
    fn partial_grid_can_be_valid() {
        let sudoku =
            Sudoku::parse(CLASSIC_PUZZLE, Ruleset::Classic).unwrap();
        assert!(sudoku.is_valid());
        assert!(Sudoku::new_empty(Ruleset::Diagonal).is_valid());
    }

    #[test]
    fn solution_not_full() {
        let sudoku =
            Sudoku::parse(CLASSIC_PUZZLE, Ruleset::Classic).unwrap();
        let mut solution = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();
        solution.clear_cell(4, 4).unwrap();

        assert!(!sudoku.is_valid_solution(&solution));
    }

    #[test]
    fn solution_not_superset() {
        let sudoku =
            Sudoku::parse(CLASSIC_PUZZLE, Ruleset::Classic).unwrap();
        let mut solution = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();

        // (4, 0) is a clue (8); replacing it orphans the clue.
        solution.set_cell(4, 0, 9).unwrap();
        solution.set_cell(5, 0, 8).unwrap();

        assert!(!sudoku.is_valid_solution(&solution));
    }

    #[test]
    fn solution_violates_rules() {
        let sudoku =
            Sudoku::parse(CLASSIC_PUZZLE, Ruleset::Diagonal).unwrap();
        let solution = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();

        // Valid classic solution, but it repeats digits on the diagonals.
        assert!(!sudoku.is_valid_solution(&solution));
    }

    #[test]
    fn solution_correct() {
        let sudoku =
            Sudoku::parse(CLASSIC_PUZZLE, Ruleset::Classic).unwrap();
        let solution = SudokuGrid::parse(SOLVED_CLASSIC).unwrap();

        assert!(sudoku.is_valid_solution(&solution));
    }

    #[test]
    fn display_renders_box_structure() {
        let grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(13, lines.len());
        assert!(lines[0].starts_with('╔'));
        assert!(lines[12].ends_with('╝'));
        assert!(lines[1].contains('8'));
    }

    #[test]
    fn grid_serializes_as_code() {
        let grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!(format!("\"{}\"", CLASSIC_PUZZLE), json);

        let parsed: SudokuGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, parsed);
    }

    #[test]
    fn malformed_code_fails_deserialization() {
        let result: Result<SudokuGrid, _> =
            serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }
}
