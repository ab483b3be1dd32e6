//! Kani arbitrary implementations for tic-tac-toe types.
//!
//! These implementations allow Kani to explore all possible values of our types
//! during model checking.

#[cfg(kani)]
use crate::{Player, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::X
        } else {
            Player::O
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        match index {
            0 => Position::TopLeft,
            1 => Position::TopCenter,
            2 => Position::TopRight,
            3 => Position::MiddleLeft,
            4 => Position::Center,
            5 => Position::MiddleRight,
            6 => Position::BottomLeft,
            7 => Position::BottomCenter,
            8 => Position::BottomRight,
            _ => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}
