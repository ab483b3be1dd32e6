//! Phase-specific typestate structs for tic-tac-toe.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a finished game ALWAYS
//! has an outcome, not `Option<Outcome>`, and only a game in progress
//! can accept moves.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract, assert_invariants};
use crate::engine::{self, SearchError};
use crate::phases::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always empty.
/// No history, no outcome.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first player (consumes setup, returns in-progress).
    ///
    /// Either side may open: X when the human moves first as usual, O when
    /// the engine does.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - to_move alternates
/// - No outcome yet (outcome is in GameFinished)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to next state.
    ///
    /// Returns either a new InProgress or a Finished state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        // Store state for postcondition checking
        #[cfg(debug_assertions)]
        let before = self.clone();

        // Precondition: Check contract
        MoveContract::pre(&self, &action)?;

        // Apply move
        let mut game = self;
        game.board
            .set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        // Check for win using rules module
        if let Some(winner) = rules::check_winner(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Winner(winner),
            }));
        }

        // Check for draw using rules module
        if rules::is_full(&game.board) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                outcome: Outcome::Draw,
            }));
        }

        // Continue game
        game.to_move = game.to_move.opponent();

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        assert_invariants(&game);

        Ok(GameResult::InProgress(game))
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Computes the optimal move for the side to move.
    ///
    /// Bridges to the search engine with the board's three cell sets. An
    /// in-progress game always has a free cell and no completed line, so
    /// this only fails on states corrupted outside `make_move`.
    #[instrument(skip(self))]
    pub fn best_move(&self) -> Result<Position, SearchError> {
        engine::optimal_move(
            self.to_move,
            self.board.cells(Player::X),
            self.board.cells(Player::O),
            self.board.free_cells(),
        )
    }

    /// Replays moves from initial state.
    ///
    /// The first move's player opens the game; an empty slice yields an
    /// untouched in-progress game with X to move.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let first = moves.first().map(|m| m.player).unwrap_or(Player::X);
        let mut game = GameSetup::new().start(first);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - outcome determined.
///
/// The outcome is ALWAYS present (not Option).
/// This struct encodes the invariant at the type level.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// Returns the outcome.
    ///
    /// Never returns Option - outcome is guaranteed.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}
