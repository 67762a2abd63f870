use anyhow::Result;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use tictactoe_ai::board::{GameState, Player};
use tictactoe_ai::solver::Solver;

mod display;
use display::*;

fn main() -> Result<()> {
    let mut game = Game::new();

    let stdin = stdin();

    println!("Welcome to Tic-Tac-Toe\n");

    let mut ai_players = (false, false);

    // choose AI control of X
    loop {
        let mut buffer = String::new();
        print!("Is X AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of O
    loop {
        let mut buffer = String::new();
        print!("Is O AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        game.display().expect("Failed to draw board!");

        match game.board.state() {
            GameState::Playing => {
                let to_move = game.board.current_player();
                let next_move =
                    // AI player
                    if (to_move == Player::X && ai_players.0) || (to_move == Player::O && ai_players.1) {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let mut solver = Solver::new(game.board);
                        let (score, best_move) = solver.solve();

                        match score.cmp(&0) {
                            Ordering::Greater => println!("X can force a win."),
                            Ordering::Less => println!("O can force a win."),
                            Ordering::Equal => println!("Best play from both sides leads to a draw."),
                        }

                        let best_move = best_move.expect("a move exists while the game is in progress");
                        println!("Best move: ({}, {})", best_move.row + 1, best_move.col + 1);
                        (best_move.row + 1, best_move.col + 1)

                    // human player
                    } else {
                        print!("Move input (row column) > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        let mut numbers = input_str
                            .split_whitespace()
                            .map(|word| word.parse::<usize>());
                        match (numbers.next(), numbers.next()) {
                            (Some(Ok(row)), Some(Ok(col))) => (row, col),
                            _ => {
                                println!("Invalid input: {}", input_str.trim());
                                continue;
                            }
                        }
                    };

                if let Err(err) = game.play_checked(next_move.0, next_move.1) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::XWin => {
                println!("X wins!");
                break;
            }
            GameState::OWin => {
                println!("O wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
