//! Exhaustive minimax search for perfect play.
//!
//! The engine scores positions from X's point of view: +10 when X holds a
//! winning line, -10 when O does, 0 otherwise. X maximizes, O minimizes.
//! Every legal continuation is enumerated — with at most nine plies the full
//! tree is a few hundred thousand leaves, so there is no pruning, no move
//! ordering, and no depth weighting. The chosen move is game-theoretically
//! optimal: the side the engine plays for never loses.

use crate::cells::CellSet;
use crate::position::Position;
use crate::rules;
use crate::types::Player;
use tracing::{debug, instrument};

/// Terminal score for a completed winning line, positive for X.
const WIN_SCORE: i32 = 10;

/// Error returned when a move is requested on a terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// A winning line is already complete; there is no move to make.
    #[display("{:?} has already won", _0)]
    AlreadyWon(Player),

    /// Every cell is occupied; there is no move to make.
    #[display("No free cell remains on the board")]
    BoardFull,
}

impl std::error::Error for SearchError {}

/// Returns the side holding a complete winning line, if any.
///
/// `None` means the game is unresolved (which includes a draw — combine
/// with [`is_draw`] to distinguish). X takes precedence on corrupt
/// double-win input.
pub fn evaluate_outcome(x_cells: CellSet, o_cells: CellSet) -> Option<Player> {
    rules::winning_side(x_cells, o_cells)
}

/// Returns true if the board is full with no winning line on either side.
pub fn is_draw(x_cells: CellSet, o_cells: CellSet, free: CellSet) -> bool {
    rules::is_draw_sets(x_cells, o_cells, free)
}

fn outcome_score(x_cells: CellSet, o_cells: CellSet) -> i32 {
    match rules::winning_side(x_cells, o_cells) {
        Some(Player::X) => WIN_SCORE,
        Some(Player::O) => -WIN_SCORE,
        None => 0,
    }
}

/// Recursive core: the game-theoretic value of the position with `to_move`
/// to act.
///
/// Terminal positions (a completed line, or no free cell) return the raw
/// outcome score. Otherwise every free cell is tried for the side to move
/// and the best result for that side is returned. Each branch derives its
/// own copies of the sets, so sibling branches share nothing. The free set
/// shrinks by one cell per ply, which bounds the recursion at `free.len()`
/// levels and guarantees termination.
fn search(x_cells: CellSet, o_cells: CellSet, free: CellSet, to_move: Player) -> i32 {
    let score = outcome_score(x_cells, o_cells);
    if score != 0 || free.is_empty() {
        return score;
    }

    match to_move {
        Player::X => {
            let mut best = i32::MIN;
            for pos in free {
                let value = search(x_cells.with(pos), o_cells, free.without(pos), Player::O);
                best = best.max(value);
            }
            best
        }
        Player::O => {
            let mut best = i32::MAX;
            for pos in free {
                let value = search(x_cells, o_cells.with(pos), free.without(pos), Player::X);
                best = best.min(value);
            }
            best
        }
    }
}

/// Computes the optimal move for `to_move` on the given position.
///
/// Every candidate in `free` is scored by exhaustive search with the
/// opponent to move next; X keeps the highest score, O the lowest. Ties
/// keep the first candidate in ascending cell order, so the result is
/// deterministic for identical input.
///
/// # Errors
///
/// Terminal positions have no move to offer: [`SearchError::AlreadyWon`] if
/// a winning line is already complete, [`SearchError::BoardFull`] if no
/// free cell remains. Callers must check before asking, as the game layer's
/// typestate does.
#[instrument]
pub fn optimal_move(
    to_move: Player,
    x_cells: CellSet,
    o_cells: CellSet,
    free: CellSet,
) -> Result<Position, SearchError> {
    if let Some(winner) = rules::winning_side(x_cells, o_cells) {
        return Err(SearchError::AlreadyWon(winner));
    }

    let mut best: Option<(Position, i32)> = None;
    for pos in free {
        let score = match to_move {
            Player::X => search(x_cells.with(pos), o_cells, free.without(pos), Player::O),
            Player::O => search(x_cells, o_cells.with(pos), free.without(pos), Player::X),
        };

        let better = match best {
            None => true,
            Some((_, best_score)) => match to_move {
                Player::X => score > best_score,
                Player::O => score < best_score,
            },
        };
        if better {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => {
            debug!(?to_move, ?pos, score, "Selected optimal move");
            Ok(pos)
        }
        None => Err(SearchError::BoardFull),
    }
}

/// Computes the automated player's move: the optimal placement for O.
///
/// This is the engine's entry point for callers that track the position as
/// three cell sets. The returned cell is always drawn from `free`, and no
/// other choice yields a strictly better result for O against perfect play.
pub fn choose_move(
    x_cells: CellSet,
    o_cells: CellSet,
    free: CellSet,
) -> Result<Position, SearchError> {
    optimal_move(Player::O, x_cells, o_cells, free)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[usize]) -> CellSet {
        indices
            .iter()
            .filter_map(|&i| Position::from_index(i))
            .collect()
    }

    fn free_from(x_cells: CellSet, o_cells: CellSet) -> CellSet {
        Position::ALL
            .into_iter()
            .filter(|pos| !x_cells.contains(*pos) && !o_cells.contains(*pos))
            .collect()
    }

    #[test]
    fn test_terminal_scores() {
        let x_row = set(&[0, 1, 2]);
        let o_col = set(&[0, 3, 6]);
        assert_eq!(outcome_score(x_row, CellSet::EMPTY), 10);
        assert_eq!(outcome_score(CellSet::EMPTY, o_col), -10);
        assert_eq!(outcome_score(CellSet::EMPTY, CellSet::EMPTY), 0);
    }

    #[test]
    fn test_search_stops_on_completed_line() {
        // X already won; remaining free cells must not be explored.
        let x = set(&[0, 1, 2]);
        let o = set(&[3, 4]);
        let free = free_from(x, o);
        assert_eq!(search(x, o, free, Player::O), 10);
    }

    #[test]
    fn test_full_board_without_line_scores_zero() {
        // X O X / O X X / O X O
        let x = set(&[0, 2, 4, 5, 7]);
        let o = set(&[1, 3, 6, 8]);
        assert_eq!(search(x, o, CellSet::EMPTY, Player::X), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw_under_optimal_play() {
        // The classic result, and a termination check for the full tree:
        // both first moves lead to 0.
        assert_eq!(search(CellSet::EMPTY, CellSet::EMPTY, CellSet::ALL, Player::X), 0);
        assert_eq!(search(CellSet::EMPTY, CellSet::EMPTY, CellSet::ALL, Player::O), 0);
    }

    #[test]
    fn test_search_is_symmetric_under_role_swap() {
        // Swapping the two owner sets and the side to move negates the value.
        let positions = [
            (set(&[4]), set(&[0]), Player::X),
            (set(&[0, 4]), set(&[1, 8]), Player::X),
            (set(&[1, 2, 3, 4]), set(&[0, 5, 7]), Player::O),
        ];

        for (x, o, to_move) in positions {
            let free = free_from(x, o);
            assert_eq!(
                search(x, o, free, to_move),
                -search(o, x, free, to_move.opponent()),
            );
        }
    }

    #[test]
    fn test_optimal_move_for_x_takes_the_win() {
        // X completes the top row rather than anything else.
        let x = set(&[0, 1]);
        let o = set(&[3, 4]);
        let free = free_from(x, o);
        assert_eq!(
            optimal_move(Player::X, x, o, free),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_choose_move_prefers_own_win_over_block() {
        // Both sides have two in a row; O must finish its own line.
        let x = set(&[0, 1]);
        let o = set(&[3, 4]);
        let free = free_from(x, o);
        assert_eq!(choose_move(x, o, free), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_errors_on_terminal_positions() {
        let x_won = set(&[0, 4, 8]);
        let o = set(&[1, 2]);
        assert_eq!(
            choose_move(x_won, o, free_from(x_won, o)),
            Err(SearchError::AlreadyWon(Player::X))
        );

        let x = set(&[0, 2, 4, 5, 7]);
        let o_full = set(&[1, 3, 6, 8]);
        assert_eq!(
            choose_move(x, o_full, CellSet::EMPTY),
            Err(SearchError::BoardFull)
        );
    }
}
