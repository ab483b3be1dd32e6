//! Draw detection logic for tic-tac-toe.

use crate::cells::CellSet;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Set-based draw test: no free cell remains and neither side holds a line.
pub(crate) fn is_draw_sets(x_cells: CellSet, o_cells: CellSet, free: CellSet) -> bool {
    free.is_empty() && super::winning_side(x_cells, o_cells).is_none()
}
