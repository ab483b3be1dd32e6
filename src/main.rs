//! Perfect-play tic-tac-toe engine - command line interface.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    CellSet, GameResult, GameSetup, LegalMove, Move, Outcome, Player, Position, choose_move,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { json } => run_demo(json),
        Command::Play => run_play(),
    }
}

/// Report emitted by `demo --json`.
#[derive(Debug, serde::Serialize)]
struct DemoReport {
    position: usize,
    label: &'static str,
    x_cells: Vec<usize>,
    o_cells: Vec<usize>,
    free_cells: Vec<usize>,
}

/// Run the engine once on a fixed sample position and print its move.
fn run_demo(json: bool) -> Result<()> {
    // X holds cells {1,2,3,4}, O holds {0,5,7}; 6 and 8 are open and only
    // one of them avoids handing X the {2,4,6} diagonal.
    let x: CellSet = [
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
    ]
    .into_iter()
    .collect();
    let o: CellSet = [
        Position::TopLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ]
    .into_iter()
    .collect();
    let free: CellSet = [Position::BottomLeft, Position::BottomRight]
        .into_iter()
        .collect();

    let chosen = choose_move(x, o, free)?;

    if json {
        let report = DemoReport {
            position: chosen.to_index(),
            label: chosen.label(),
            x_cells: x.iter().map(Position::to_index).collect(),
            o_cells: o.iter().map(Position::to_index).collect(),
            free_cells: free.iter().map(Position::to_index).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Engine plays {} (cell {})", chosen.label(), chosen.to_index());
    }

    Ok(())
}

/// Run interactive games against the engine until the player quits.
fn run_play() -> Result<()> {
    println!("You are X; the engine is O. Enter a cell index (0-8) or a label like \"center\".");

    loop {
        play_one_game()?;

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }

    Ok(())
}

/// Play a single game to completion. The human is X and moves first.
fn play_one_game() -> Result<()> {
    let mut game = GameSetup::new().start(Player::X);

    let finished = loop {
        println!("\n{}\n", game.board().display());

        let action = if game.to_move() == Player::X {
            let Some(pos) = prompt_for_cell()? else {
                println!("Unrecognized cell; enter 0-8 or a label like \"center\".");
                continue;
            };
            Move::new(Player::X, pos)
        } else {
            let pos = game.best_move()?;
            println!("Engine plays {} (cell {})", pos.label(), pos.to_index());
            Move::new(Player::O, pos)
        };

        // Occupied cells are refused and re-prompted, never overwritten
        if let Err(err) = LegalMove::check(&action, &game) {
            println!("{}", err);
            continue;
        }

        match game.make_move(action)? {
            GameResult::InProgress(next) => {
                println!("status: in progress");
                game = next;
            }
            GameResult::Finished(done) => break done,
        }
    };

    println!("\n{}\n", finished.board().display());
    println!("status: {}", finished.outcome());
    match finished.outcome() {
        Outcome::Winner(Player::X) => println!("You win!"),
        Outcome::Winner(Player::O) => println!("You lose."),
        Outcome::Draw => println!("Draw."),
    }

    Ok(())
}

/// Prompt for one cell of input; `None` means the input didn't parse.
fn prompt_for_cell() -> Result<Option<Position>> {
    print!("Your move: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("input closed before the game finished");
    }

    Ok(Position::from_label_or_number(line.trim()))
}
