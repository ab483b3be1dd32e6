//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses mathematically verify that invariants hold
//! for ALL possible game states (bounded).

#[cfg(kani)]
mod proofs {
    use crate::action::Move;
    use crate::invariants::{Invariant, OwnershipPartitionInvariant};
    use crate::position::Position;
    use crate::typestate::{GameResult, GameSetup};
    use crate::types::Player;

    /// Verify the ownership partition holds on every reachable state.
    ///
    /// Proves: After any sequence of up to four legal moves, X cells,
    /// O cells, and free cells still partition the board.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_ownership_partition_after_moves() {
        let first: Player = kani::any();
        let mut game = GameSetup::new().start(first);

        for _ in 0..4 {
            let pos: Position = kani::any();
            let action = Move::new(game.to_move(), pos);

            match game.make_move(action) {
                Ok(GameResult::InProgress(next)) => game = next,
                // Finished games and rejected moves end the trace
                Ok(GameResult::Finished(_)) => return,
                Err(_) => return,
            }

            assert!(
                OwnershipPartitionInvariant::holds(&game),
                "OwnershipPartitionInvariant violated"
            );
        }
    }

    /// Verify rejected moves leave no trace.
    ///
    /// Proves: A move to an occupied square errors rather than claiming
    /// the cell for a second owner.
    #[kani::proof]
    #[kani::unwind(3)]
    fn verify_occupied_square_is_rejected() {
        let first_pos: Position = kani::any();
        let second_pos: Position = kani::any();
        kani::assume(first_pos == second_pos);

        let game = GameSetup::new().start(Player::X);
        let opening = Move::new(Player::X, first_pos);

        if let Ok(GameResult::InProgress(game)) = game.make_move(opening) {
            let clash = Move::new(Player::O, second_pos);
            assert!(game.make_move(clash).is_err());
        }
    }
}
