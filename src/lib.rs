//! Perfect-play tic-tac-toe engine.
//!
//! This library determines the optimal move for an automated player on the
//! standard 3×3 board by exhaustively searching the remaining game tree.
//! The engine side never loses: against any opponent it forces at least a
//! draw, and it converts every winnable position.
//!
//! # Architecture
//!
//! - **Cells**: [`CellSet`], a 9-bit set of board cells with deterministic
//!   ascending iteration — the search's working representation.
//! - **Rules**: the eight winning lines, win and draw detection, shared by
//!   the board layer and the search's terminal evaluation.
//! - **Engine**: [`choose_move`] and friends — exhaustive minimax over the
//!   three cell sets (X, O, free).
//! - **Game layer**: typestate phases ([`GameSetup`] → [`GameInProgress`] →
//!   [`GameFinished`]) with contract-validated moves and runtime invariants,
//!   for callers that want a managed game rather than raw sets.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{choose_move, CellSet, Position};
//!
//! // X threatens {2,4,6}; only one of the two free cells survives.
//! let x: CellSet = [
//!     Position::TopCenter,
//!     Position::TopRight,
//!     Position::MiddleLeft,
//!     Position::Center,
//! ]
//! .into_iter()
//! .collect();
//! let o: CellSet = [
//!     Position::TopLeft,
//!     Position::MiddleRight,
//!     Position::BottomCenter,
//! ]
//! .into_iter()
//! .collect();
//! let free: CellSet = [Position::BottomLeft, Position::BottomRight]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(choose_move(x, o, free), Ok(Position::BottomLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod cells;
mod contracts;
mod engine;
mod invariants;
mod kani_support;
mod phases;
mod position;
mod rules;
mod typestate;
mod types;

// Crate-level exports - cell sets
pub use cells::{CellSet, Cells};

// Crate-level exports - core types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - actions
pub use action::{Move, MoveError};

// Crate-level exports - search engine
pub use engine::{SearchError, choose_move, evaluate_outcome, is_draw, optimal_move};

// Crate-level exports - typestate game layer
pub use phases::Outcome;
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, OwnershipPartitionInvariant,
};
