//! Alternating turn invariant: the two players strictly alternate.

use super::Invariant;
use crate::typestate::GameInProgress;

/// Invariant: Players alternate turns.
///
/// Move history must alternate sides starting from whichever player opened
/// the game (X when the human moves first, O when the engine does), and the
/// side to move must match the history's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.is_empty() {
            return true;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // Current to_move must follow the last move
        let last = history[history.len() - 1].player;
        game.to_move() == last.opponent()
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
