use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::board::{Action, Board, GameState, Player};
use tictactoe_ai::SIZE;

/// The front-end's working copy of a game in progress
pub struct Game {
    pub board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Plays a move given as one-indexed (row, column) coordinates
    ///
    /// The resulting game state is re-derived from the new position.
    pub fn play_checked(&mut self, row: usize, col: usize) -> Result<GameState> {
        if !(1..=SIZE).contains(&row) || !(1..=SIZE).contains(&col) {
            return Err(anyhow!(
                "Invalid move, ({}, {}) out of range. Coordinates must be between 1 and {}",
                row,
                col,
                SIZE
            ));
        }
        self.board = self.board.apply(Action::new(row - 1, col - 1))?;

        Ok(self.board.state())
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=SIZE).map(|col| format!(" {}", col)).collect();
        stdout.queue(PrintStyledContent(style(format!("  {}\n", cols))))?;

        for row in 0..SIZE {
            stdout.queue(PrintStyledContent(style(format!(" {} ", row + 1))))?;
            for col in 0..SIZE {
                let (tile, color) = match self.board.get(row, col) {
                    Some(Player::X) => ("X", Color::Red),
                    Some(Player::O) => ("O", Color::Yellow),
                    None => (".", Color::DarkGrey),
                };
                stdout
                    .queue(PrintStyledContent(
                        style(tile).attribute(Attribute::Bold).with(color),
                    ))?
                    .queue(PrintStyledContent(style(" ")))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
