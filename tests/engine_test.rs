//! Tests for the exhaustive search engine's public surface.

use perfect_tictactoe::{
    CellSet, GameResult, GameSetup, Move, Outcome, Player, Position, SearchError, choose_move,
    evaluate_outcome, is_draw,
};

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
fn test_sample_position_avoids_the_diagonal_loss() {
    // Cells 6 and 8 are open; 8 hands X the {2,4,6} diagonal, 6 forces a draw.
    let x = set(&[1, 2, 3, 4]);
    let o = set(&[0, 5, 7]);
    let free = set(&[6, 8]);

    assert_eq!(choose_move(x, o, free), Ok(Position::BottomLeft));
}

#[test]
fn test_immediate_threat_is_blocked() {
    // X holds {0,1}; anything but cell 2 loses on the spot.
    let x = set(&[0, 1]);
    let o = CellSet::EMPTY;
    let free = free_from(x, o);

    assert_eq!(choose_move(x, o, free), Ok(Position::TopRight));
}

#[test]
fn test_completed_diagonal_wins_regardless_of_rest() {
    let diagonal = set(&[0, 4, 8]);

    assert_eq!(evaluate_outcome(diagonal, CellSet::EMPTY), Some(Player::X));
    assert_eq!(
        evaluate_outcome(diagonal, set(&[1, 3, 5, 7])),
        Some(Player::X)
    );
}

#[test]
fn test_full_board_without_line_is_unresolved_and_drawn() {
    // X O X / O X X / O X O
    let x = set(&[0, 2, 4, 5, 7]);
    let o = set(&[1, 3, 6, 8]);

    assert_eq!(evaluate_outcome(x, o), None);
    assert!(is_draw(x, o, CellSet::EMPTY));
}

#[test]
fn test_partial_board_is_not_a_draw() {
    let x = set(&[0]);
    let o = set(&[4]);
    assert!(!is_draw(x, o, free_from(x, o)));
}

#[test]
fn test_choose_move_is_deterministic() {
    let x = set(&[0, 4]);
    let o = set(&[1]);
    let free = free_from(x, o);

    let first = choose_move(x, o, free);
    for _ in 0..3 {
        assert_eq!(choose_move(x, o, free), first);
    }
}

#[test]
fn test_terminal_positions_are_rejected() {
    let x_won = set(&[0, 1, 2]);
    let o = set(&[3, 4]);
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

#[test]
fn test_optimal_play_from_empty_board_draws() {
    // Mutual perfect play always lands on a draw, whichever side opens.
    for first in [Player::X, Player::O] {
        let mut game = GameSetup::new().start(first);

        let finished = loop {
            let pos = game.best_move().expect("in-progress game has a move");
            let action = Move::new(game.to_move(), pos);
            match game.make_move(action).expect("engine move is legal") {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(done) => break done,
            }
        };

        assert_eq!(*finished.outcome(), Outcome::Draw);
    }
}

/// Walks every X strategy while O plays the engine's choice, asserting X
/// never completes a line.
fn assert_engine_never_loses(x_cells: CellSet, o_cells: CellSet, free: CellSet, x_to_move: bool) {
    if let Some(winner) = evaluate_outcome(x_cells, o_cells) {
        assert_ne!(
            winner,
            Player::X,
            "engine lost: x={:?} o={:?}",
            x_cells,
            o_cells
        );
        return;
    }
    if free.is_empty() {
        return;
    }

    if x_to_move {
        for pos in free {
            assert_engine_never_loses(x_cells.with(pos), o_cells, free.without(pos), false);
        }
    } else {
        let pos = choose_move(x_cells, o_cells, free).expect("unresolved position has a move");
        assert!(free.contains(pos), "chosen move must be a free cell");
        assert_engine_never_loses(x_cells, o_cells.with(pos), free.without(pos), true);
    }
}

#[test]
fn test_engine_never_loses_when_opponent_opens() {
    assert_engine_never_loses(CellSet::EMPTY, CellSet::EMPTY, CellSet::ALL, true);
}

#[test]
fn test_engine_never_loses_when_engine_opens() {
    assert_engine_never_loses(CellSet::EMPTY, CellSet::EMPTY, CellSet::ALL, false);
}
