//! Core domain types for tic-tac-toe.

use crate::cells::CellSet;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// By convention of this engine, X moves first and is the maximizing side in
/// the search's scoring; O is the automated player and minimizes. The
/// assignment is a sign convention, not a property of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first; the maximizing side).
    X,
    /// Player O (goes second; the minimizing side, played by the engine).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Each cell holds exactly one [`Square`], so the cells owned by X, the
/// cells owned by O, and the free cells partition the board by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// This is a raw write; legality (the square being empty, it being the
    /// player's turn) is enforced by the contracts in the game layer.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the set of cells occupied by the given player.
    pub fn cells(&self, player: Player) -> CellSet {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos) == Square::Occupied(player))
            .collect()
    }

    /// Returns the set of unoccupied cells.
    pub fn free_cells(&self) -> CellSet {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their cell index so the displayed grid doubles as
    /// an input legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for pos in Position::ALL {
            assert!(board.is_empty(pos));
        }
        assert_eq!(board.free_cells(), CellSet::ALL);
        assert!(board.cells(Player::X).is_empty());
        assert!(board.cells(Player::O).is_empty());
    }

    #[test]
    fn test_cells_track_ownership() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(board.cells(Player::X).contains(Position::Center));
        assert!(board.cells(Player::O).contains(Position::TopLeft));
        assert!(!board.free_cells().contains(Position::Center));
        assert_eq!(board.free_cells().len(), 7);
    }

    #[test]
    fn test_cell_sets_partition_board() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::X));

        let x = board.cells(Player::X);
        let o = board.cells(Player::O);
        let free = board.free_cells();

        assert!(!x.intersects(o));
        assert!(!x.intersects(free));
        assert!(!o.intersects(free));
        assert_eq!(x.union(o).union(free), CellSet::ALL);
    }

    #[test]
    fn test_display_marks_and_indices() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));

        let grid = board.display();
        assert!(grid.starts_with("X|1|2"));
        assert!(grid.contains("3|O|5"));
    }
}
