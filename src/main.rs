use std::env;

use quince_chess::board::geometry::square_to_algebraic;
use quince_chess::board::piece::Color;
use quince_chess::game::{Game, TurnOutcome};
use quince_chess::input::move_source::MoveSource;
use quince_chess::input::random_source::RandomSource;
use quince_chess::input::terminal_source::TerminalSource;
use quince_chess::rules::apply_move::pawn_awaiting_promotion;
use quince_chess::rules::legal_moves::GameStatus;
use quince_chess::utils::render_board::render_board;
use quince_chess::utils::turn_clock::TurnClock;

fn side_label(color: Color) -> &'static str {
    match color {
        Color::Light => "light",
        Color::Dark => "dark",
    }
}

fn main() {
    // `quince_chess [dark-source]` where dark-source is "human" (default)
    // or "random".
    let dark_choice = env::args().nth(1).unwrap_or_else(|| "human".to_owned());
    let mut light: Box<dyn MoveSource> = Box::new(TerminalSource::new());
    let mut dark: Box<dyn MoveSource> = match dark_choice.as_str() {
        "random" => Box::new(RandomSource::new()),
        "human" => Box::new(TerminalSource::new()),
        other => {
            eprintln!("unknown dark-source '{other}', expected 'human' or 'random'");
            return;
        }
    };

    let mut game = Game::new_game();
    println!("quince_chess: dark is played by '{}'", dark.name());

    loop {
        let snapshot = game.current();
        println!("\n{}", render_board(snapshot));
        print!(
            "move {}, {} to move",
            snapshot.fullmove_number,
            side_label(snapshot.side_to_move)
        );
        match snapshot.en_passant_target {
            Some(square) => match square_to_algebraic(square) {
                Ok(name) => println!(", en passant on {name}"),
                Err(_) => println!(),
            },
            None => println!(),
        }
        if let Some(square) = pawn_awaiting_promotion(snapshot) {
            if let Ok(name) = square_to_algebraic(square) {
                println!("(pawn on {name} reached the back rank; promotion is not supported)");
            }
        }

        let mover = snapshot.side_to_move;
        let source = match mover {
            Color::Light => light.as_mut(),
            Color::Dark => dark.as_mut(),
        };

        let clock = TurnClock::start();
        match game.play_turn(source) {
            Ok(TurnOutcome::Played { notation }) => {
                println!(
                    "{} played {} ({})",
                    side_label(mover),
                    notation,
                    clock.elapsed_label()
                );
            }
            Ok(TurnOutcome::Finished(status)) => {
                match status {
                    GameStatus::Checkmate { winner } => {
                        println!("checkmate, {} wins", side_label(winner));
                    }
                    GameStatus::Stalemate => println!("stalemate, draw"),
                    GameStatus::InProgress => {}
                }
                break;
            }
            Err(message) => {
                eprintln!("game stopped: {message}");
                break;
            }
        }
    }

    if !game.notation_history().is_empty() {
        println!("\nmoves: {}", game.notation_history().join(" "));
    }
}
