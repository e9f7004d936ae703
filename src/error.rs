//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing Sudoku, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if either is greater than or equal
    /// to 9.
    OutOfBounds,

    /// Indicates that some digit is invalid, that is, less than 1 or greater
    /// than 9.
    InvalidDigit
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                f.write_str("cell coordinates out of bounds"),
            SudokuError::InvalidDigit =>
                f.write_str("digit outside the range [1, 9]")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `Sudoku` or
/// `SudokuGrid` from its 81-character code.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code does not consist of exactly 81 characters, one
    /// per cell. The wrapped number is the length that was actually provided.
    WrongLength(usize),

    /// Indicates that the code contains a character which is neither a digit
    /// from 1 to 9 nor the placeholder `'.'` for an empty cell.
    InvalidCharacter(char)
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongLength(len) =>
                write!(f, "expected a code of 81 characters, got {}", len),
            SudokuParseError::InvalidCharacter(c) =>
                write!(f, "invalid character {:?} in code", c)
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

/// An enumeration of the ways the top-level [solve](crate::solve) entry point
/// can fail. A malformed input code is rejected before any solving begins and
/// is distinguished from a well-formed puzzle that has no solution.
#[derive(Debug, Eq, PartialEq)]
pub enum SolveError {

    /// Indicates that the input code was malformed. The wrapped
    /// [SudokuParseError] specifies the defect.
    Parse(SudokuParseError),

    /// Indicates that the search exhausted all branches without finding a
    /// solution, i.e. the puzzle is unsolvable under its ruleset.
    Unsolvable
}

impl Display for SolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Parse(e) => write!(f, "malformed puzzle code: {}", e),
            SolveError::Unsolvable => f.write_str("puzzle has no solution")
        }
    }
}

impl From<SudokuParseError> for SolveError {
    fn from(e: SudokuParseError) -> Self {
        SolveError::Parse(e)
    }
}
