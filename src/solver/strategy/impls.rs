//! This module contains all pre-defined strategies provided by this crate.
//! All of them are re-exported in [crate::solver::strategy], so you should
//! not have to `use` anything from this module directly.

use crate::SIZE;
use crate::solver::strategy::{CandidateGrid, Strategy};
use crate::util::DigitSet;

use std::collections::BTreeMap;

/// A [Strategy] which removes the digit of every solved cell from the
/// candidate sets of all of that cell's peers.
///
/// As a small example, take a look at the following row:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 4 │   │   ║   │   │   ║   │   │ 7 ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Neither 4 nor 7 can go into any of the empty cells, so this strategy
/// removes both digits from their candidate sets.
///
/// Solved cells are collected up front and their digits then applied one
/// after another, so every removal sees the effect of the previous ones.
/// Removing the last candidate of a peer is deliberately not an error here;
/// the reduction loop is responsible for detecting the contradiction.
#[derive(Clone)]
pub struct EliminationStrategy;

impl Strategy for EliminationStrategy {

    fn apply(&self, grid: &mut CandidateGrid) -> bool {
        let mut changed = false;
        let mut solved = Vec::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(digit) = grid.solved_digit(column, row) {
                    solved.push((column, row, digit));
                }
            }
        }

        for (column, row, digit) in solved {
            for &(peer_column, peer_row) in
                    grid.topology().peers(column, row) {
                changed |=
                    grid.eliminate(peer_column, peer_row, digit).unwrap();
            }
        }

        changed
    }
}

#[derive(Clone)]
enum Placement {
    Nowhere,
    One(usize, usize),
    Many
}

impl Placement {
    fn union(&self, column: usize, row: usize) -> Placement {
        match self {
            Placement::Nowhere => Placement::One(column, row),
            Placement::One(_, _) => Placement::Many,
            Placement::Many => Placement::Many
        }
    }
}

/// A [Strategy] which detects situations in which a digit can only go in one
/// cell of a unit and enters it there.
///
/// As a visualization, the cell marked with X in the following example is the
/// only one in its block that can be a 2.
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │ 2 │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║ X │ 1 │ 3 ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Every unit and every digit is scanned on each application, since several
/// cells in several units can become determined in a single pass.
#[derive(Clone)]
pub struct OnlyChoiceStrategy;

impl Strategy for OnlyChoiceStrategy {

    fn apply(&self, grid: &mut CandidateGrid) -> bool {
        let topology = grid.topology();
        let mut changed = false;

        for unit in topology.units() {
            let mut placements = vec![Placement::Nowhere; SIZE + 1];

            for &(column, row) in unit {
                let candidates = grid.candidates(column, row).unwrap();

                for digit in candidates.iter() {
                    let placement = &placements[digit];
                    placements[digit] = placement.union(column, row);
                }
            }

            for (digit, placement) in placements.into_iter().enumerate() {
                if let Placement::One(column, row) = placement {
                    if grid.solved_digit(column, row) != Some(digit) {
                        grid.set_digit(column, row, digit).unwrap();
                        changed = true;
                    }
                }
            }
        }

        changed
    }
}

/// A [Strategy] which searches every unit for naked twins: two cells sharing
/// an identical candidate set of exactly two digits. Those two digits must
/// occupy exactly those two cells, so they are removed from the candidate
/// sets of every other cell of the unit.
///
/// As an example, consider the following row, where the cells marked with A
/// both have the candidates {2, 3}:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ A │ A │ X ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// One of the A-cells is a 2 and the other a 3, in some order. The cell
/// marked with X can therefore be neither, which in this case fixes it to 1.
///
/// Units are processed in the fixed topology order, and within a unit all
/// twin pairs are applied before moving on. The cells of a unit are grouped
/// by candidate set in an ordered map, so applications are deterministic.
#[derive(Clone)]
pub struct NakedTwinsStrategy;

impl Strategy for NakedTwinsStrategy {

    fn apply(&self, grid: &mut CandidateGrid) -> bool {
        let topology = grid.topology();
        let mut changed = false;

        for unit in topology.units() {
            let mut cells_by_candidates: BTreeMap<DigitSet, Vec<(usize, usize)>> =
                BTreeMap::new();

            for &(column, row) in unit {
                let candidates = grid.candidates(column, row).unwrap();
                cells_by_candidates.entry(candidates)
                    .or_insert_with(Vec::new)
                    .push((column, row));
            }

            for (candidates, cells) in cells_by_candidates {
                if candidates.len() != 2 || cells.len() != 2 {
                    continue;
                }

                for &(column, row) in unit {
                    if cells.contains(&(column, row)) {
                        continue;
                    }

                    for digit in candidates.iter() {
                        changed |= grid.eliminate(column, row, digit).unwrap();
                    }
                }
            }
        }

        changed
    }
}

/// A [Strategy] which uses two strategies by first applying one and then the
/// other on the output of the first one. If any child changed the state, this
/// strategy is defined to have changed the state as well.
pub struct CompositeStrategy<S1: Strategy, S2: Strategy> {
    s1: S1,
    s2: S2
}

impl<S1: Strategy, S2: Strategy> CompositeStrategy<S1, S2> {

    /// Creates a new composite strategy from the two children strategies.
    ///
    /// # Arguments
    ///
    /// * `s1`: The strategy which is applied first.
    /// * `s2`: The strategy which is applied second.
    pub fn new(s1: S1, s2: S2) -> CompositeStrategy<S1, S2> {
        CompositeStrategy {
            s1,
            s2
        }
    }
}

impl<S1: Strategy, S2: Strategy> Strategy for CompositeStrategy<S1, S2> {
    fn apply(&self, grid: &mut CandidateGrid) -> bool {
        self.s1.apply(grid) | self.s2.apply(grid)
    }
}

impl<S1, S2> Clone for CompositeStrategy<S1, S2>
where
    S1: Strategy + Clone,
    S2: Strategy + Clone
{
    fn clone(&self) -> Self {
        CompositeStrategy::new(self.s1.clone(), self.s2.clone())
    }
}
