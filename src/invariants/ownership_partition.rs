//! Ownership partition invariant: X's cells, O's cells, and the free cells
//! partition the board.

use super::Invariant;
use crate::cells::CellSet;
use crate::typestate::GameInProgress;

/// Invariant: Cell ownership partitions the board exactly.
///
/// The sets reconstructed from the move history must be pairwise disjoint,
/// must union to the full board together with the free cells, and must match
/// the board itself. No cell is ever claimed by both players, and once
/// claimed a cell never changes hands or empties again.
pub struct OwnershipPartitionInvariant;

impl Invariant<GameInProgress> for OwnershipPartitionInvariant {
    fn holds(game: &GameInProgress) -> bool {
        // Reconstruct ownership from history
        let mut x_cells = CellSet::EMPTY;
        let mut o_cells = CellSet::EMPTY;

        for mov in game.history() {
            // Cell must not already be claimed by either side
            if x_cells.contains(mov.position) || o_cells.contains(mov.position) {
                return false;
            }
            match mov.player {
                crate::types::Player::X => x_cells = x_cells.with(mov.position),
                crate::types::Player::O => o_cells = o_cells.with(mov.position),
            }
        }

        let board = game.board();
        let free = board.free_cells();

        // Reconstructed ownership must match the board
        if x_cells != board.cells(crate::types::Player::X)
            || o_cells != board.cells(crate::types::Player::O)
        {
            return false;
        }

        // The three sets partition the full board
        !x_cells.intersects(o_cells)
            && !x_cells.intersects(free)
            && !o_cells.intersects(free)
            && x_cells.union(o_cells).union(free) == CellSet::ALL
    }

    fn description() -> &'static str {
        "X cells, O cells, and free cells partition the board"
    }
}
