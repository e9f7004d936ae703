//! This module defines the unit and peer topology of the Sudoku grid, which
//! specifies the rules of the puzzle.
//!
//! A *unit* is a group of 9 cells which must jointly contain every digit from
//! 1 to 9 exactly once: the 9 rows, 9 columns, and 9 blocks, plus the two
//! diagonals ( ╲ and ╱ ) if the [Ruleset::Diagonal] variant is played. A
//! *peer* of a cell is any other cell that shares at least one unit with it.
//!
//! The [Topology] aggregates all units and the derived peer sets. It is
//! deterministic, immutable, and only depends on the ruleset, so one instance
//! per ruleset is built lazily and shared for the lifetime of the process via
//! [Topology::shared].

use crate::{SIZE, BLOCK_SIZE, index};

use once_cell::sync::Lazy;

use serde::{Deserialize, Serialize};

/// A group of cells, represented by a vector of their coordinates in the form
/// `(column, row)`.
pub type Group = Vec<(usize, usize)>;

/// The rules under which a puzzle is played. This controls which units are
/// part of the [Topology].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Ruleset {

    /// Classic Sudoku rules: every row, column, and 3x3 block contains each
    /// digit from 1 to 9 exactly once. 27 units in total.
    Classic,

    /// Classic rules plus the requirement that the two main diagonals also
    /// contain each digit from 1 to 9 exactly once. 29 units in total.
    Diagonal
}

fn row_groups() -> Vec<Group> {
    let mut groups = Vec::new();

    for row in 0..SIZE {
        let mut group = Group::new();

        for column in 0..SIZE {
            group.push((column, row));
        }

        groups.push(group);
    }

    groups
}

fn column_groups() -> Vec<Group> {
    let mut groups = Vec::new();

    for column in 0..SIZE {
        let mut group = Group::new();

        for row in 0..SIZE {
            group.push((column, row));
        }

        groups.push(group);
    }

    groups
}

fn block_groups() -> Vec<Group> {
    let mut groups = Vec::new();

    for block_row in 0..BLOCK_SIZE {
        let base_row = block_row * BLOCK_SIZE;

        for block_column in 0..BLOCK_SIZE {
            let base_column = block_column * BLOCK_SIZE;
            let mut group = Group::new();

            for sub_row in 0..BLOCK_SIZE {
                for sub_column in 0..BLOCK_SIZE {
                    group.push((base_column + sub_column, base_row + sub_row));
                }
            }

            groups.push(group);
        }
    }

    groups
}

fn diagonal_groups() -> Vec<Group> {
    let mut main_diagonal = Group::new();
    let mut anti_diagonal = Group::new();

    for i in 0..SIZE {
        main_diagonal.push((i, i));
        anti_diagonal.push((i, SIZE - i - 1));
    }

    vec![
        main_diagonal,
        anti_diagonal
    ]
}

/// The complete unit and peer structure of a 9x9 Sudoku grid under some
/// [Ruleset].
///
/// Units are stored in a fixed, deterministic order: rows top-to-bottom, then
/// columns left-to-right, then blocks left-to-right and top-to-bottom, then
/// (for the diagonal variant) the main diagonal followed by the
/// anti-diagonal. All solving steps iterate units in this order, which is
/// what makes the solver deterministic.
pub struct Topology {
    ruleset: Ruleset,
    units: Vec<Group>,
    units_of: Vec<Vec<usize>>,
    peers: Vec<Group>
}

static CLASSIC_TOPOLOGY: Lazy<Topology> =
    Lazy::new(|| Topology::new(Ruleset::Classic));

static DIAGONAL_TOPOLOGY: Lazy<Topology> =
    Lazy::new(|| Topology::new(Ruleset::Diagonal));

impl Topology {

    /// Builds the topology for the given ruleset from scratch. Prefer
    /// [Topology::shared] unless you explicitly need an owned instance, since
    /// the result is always the same for the same ruleset.
    pub fn new(ruleset: Ruleset) -> Topology {
        let mut units = row_groups();
        units.append(&mut column_groups());
        units.append(&mut block_groups());

        if let Ruleset::Diagonal = ruleset {
            units.append(&mut diagonal_groups());
        }

        let mut units_of = vec![Vec::new(); SIZE * SIZE];
        let mut peers = vec![Group::new(); SIZE * SIZE];

        for (unit_index, unit) in units.iter().enumerate() {
            for &(column, row) in unit {
                let cell_index = index(column, row);
                units_of[cell_index].push(unit_index);

                for &other in unit {
                    if other != (column, row) {
                        peers[cell_index].push(other);
                    }
                }
            }
        }

        for cell_peers in peers.iter_mut() {
            cell_peers.sort_by_key(|&(column, row)| index(column, row));
            cell_peers.dedup();
        }

        Topology {
            ruleset,
            units,
            units_of,
            peers
        }
    }

    /// Gets a reference to the process-wide shared topology for the given
    /// ruleset. The topology is built on first use and reused for all
    /// subsequent puzzles.
    pub fn shared(ruleset: Ruleset) -> &'static Topology {
        match ruleset {
            Ruleset::Classic => &CLASSIC_TOPOLOGY,
            Ruleset::Diagonal => &DIAGONAL_TOPOLOGY
        }
    }

    /// Gets the ruleset from which this topology was built.
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Gets all units of this topology, in their fixed order. Under
    /// [Ruleset::Classic] these are 27 groups, under [Ruleset::Diagonal] 29.
    pub fn units(&self) -> &[Group] {
        &self.units
    }

    /// Gets the indices into [Topology::units] of all units that contain the
    /// cell at the given position. Every cell lies in one row, one column,
    /// and one block; cells on a main diagonal additionally lie in one or,
    /// for the center cell, both diagonals.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, 9[`.
    pub fn units_of(&self, column: usize, row: usize) -> &[usize] {
        &self.units_of[index(column, row)]
    }

    /// Gets the peers of the cell at the given position, that is, all cells
    /// which share at least one unit with it, excluding the cell itself. The
    /// peers are sorted in row-major order and free of duplicates.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cell. Must be in the
    /// range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cell. Must be in the range
    /// `[0, 9[`.
    pub fn peers(&self, column: usize, row: usize) -> &[(usize, usize)] {
        &self.peers[index(column, row)]
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use std::collections::HashSet;

    #[test]
    fn classic_topology_has_27_units() {
        assert_eq!(27, Topology::shared(Ruleset::Classic).units().len());
    }

    #[test]
    fn diagonal_topology_has_29_units() {
        assert_eq!(29, Topology::shared(Ruleset::Diagonal).units().len());
    }

    #[test]
    fn every_unit_has_nine_distinct_cells() {
        for &ruleset in &[Ruleset::Classic, Ruleset::Diagonal] {
            let topology = Topology::shared(ruleset);

            for unit in topology.units() {
                assert_eq!(9, unit.len());

                let distinct: HashSet<&(usize, usize)> = unit.iter().collect();
                assert_eq!(9, distinct.len());
            }
        }
    }

    #[test]
    fn peer_sets_exclude_the_cell_itself() {
        let topology = Topology::shared(Ruleset::Diagonal);

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert!(!topology.peers(column, row).contains(&(column, row)));
            }
        }
    }

    #[test]
    fn peers_are_symmetric() {
        for &ruleset in &[Ruleset::Classic, Ruleset::Diagonal] {
            let topology = Topology::shared(ruleset);

            for row in 0..SIZE {
                for column in 0..SIZE {
                    for &(peer_column, peer_row) in topology.peers(column, row) {
                        assert!(
                            topology.peers(peer_column, peer_row)
                                .contains(&(column, row)),
                            "asymmetric peers: ({}, {}) and ({}, {})",
                            column, row, peer_column, peer_row);
                    }
                }
            }
        }
    }

    #[test]
    fn classic_cells_have_20_peers() {
        let topology = Topology::shared(Ruleset::Classic);

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert_eq!(20, topology.peers(column, row).len());
            }
        }
    }

    #[test]
    fn diagonal_peer_counts() {
        let topology = Topology::shared(Ruleset::Diagonal);

        // Off-diagonal cells keep their 20 classic peers, cells on one
        // diagonal gain 6 and the center cell, lying on both, gains 12.
        assert_eq!(20, topology.peers(1, 0).len());
        assert_eq!(26, topology.peers(0, 0).len());
        assert_eq!(26, topology.peers(8, 0).len());
        assert_eq!(26, topology.peers(3, 3).len());
        assert_eq!(32, topology.peers(4, 4).len());
    }

    #[test]
    fn unit_membership_counts() {
        let classic = Topology::shared(Ruleset::Classic);
        let diagonal = Topology::shared(Ruleset::Diagonal);

        // Row + column + block everywhere, diagonals only where they apply.
        assert_eq!(3, classic.units_of(4, 4).len());
        assert_eq!(3, diagonal.units_of(1, 0).len());
        assert_eq!(4, diagonal.units_of(0, 0).len());
        assert_eq!(4, diagonal.units_of(0, 8).len());
        assert_eq!(5, diagonal.units_of(4, 4).len());
    }

    #[test]
    fn corner_cells_lie_on_exactly_one_diagonal() {
        let topology = Topology::shared(Ruleset::Diagonal);

        for &(column, row) in &[(0, 0), (8, 0), (0, 8), (8, 8)] {
            assert_eq!(4, topology.units_of(column, row).len());
        }
    }

    #[test]
    fn ruleset_serde_round_trip() {
        let json = serde_json::to_string(&Ruleset::Diagonal).unwrap();
        let parsed: Ruleset = serde_json::from_str(&json).unwrap();
        assert_eq!(Ruleset::Diagonal, parsed);
    }
}
