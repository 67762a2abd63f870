//! An agent to play perfect tic-tac-toe

use rand::{rngs::ThreadRng, thread_rng, Rng};

use crate::board::{Action, Board, Player};

/// An agent to find the optimal move in any tic-tac-toe position
///
/// # Notes
/// This agent searches the game tree exhaustively: every node is expanded
/// all the way to a finished game before a move is chosen. There is no
/// pruning, no position cache and no depth cutoff beyond the nine cells of
/// the board itself, so the returned move is mathematically optimal and the
/// full cost of the search is paid on every call.
///
/// # Position Scoring
/// A position is scored +1 if X can force a win, -1 if O can force a win
/// and 0 if best play from both sides leads to a draw.
pub struct Solver<R: Rng = ThreadRng> {
    board: Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
    rng: R,
}

impl Solver<ThreadRng> {
    /// Creates a new `Solver` for a position
    pub fn new(board: Board) -> Self {
        Self::with_rng(board, thread_rng())
    }
}

impl<R: Rng> Solver<R> {
    /// Creates a new `Solver` with a caller-supplied source of randomness
    ///
    /// Only the opening move is randomised, so this mainly matters to tests
    /// that need a reproducible opening.
    pub fn with_rng(board: Board, rng: R) -> Self {
        Self {
            board,
            node_count: 0,
            rng,
        }
    }

    /// Calculates the score and best move of the current position
    ///
    /// Returns the score of the position (see [Position Scoring]) and the
    /// optimal action for the player to move, or `None` if the game is
    /// already over.
    ///
    /// The empty board is the one position that is never searched: every
    /// opening leads to a draw under best play, so a uniformly random
    /// opening is returned instead of expanding the full nine-ply tree for
    /// an answer with no strategic content.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn solve(&mut self) -> (i32, Option<Action>) {
        if self.board.is_terminal() {
            return (self.board.utility(), None);
        }

        // random opening; 0 is the known score of the empty board
        if self.board.is_empty() {
            let actions = self.board.legal_actions();
            let opening = actions[self.rng.gen_range(0..actions.len())];
            return (0, Some(opening));
        }

        self.node_count += 1;

        let mover = self.board.current_player();
        let mut best_score = match mover {
            Player::X => i32::MIN,
            Player::O => i32::MAX,
        };
        let mut best_action = None;

        for action in self.board.legal_actions() {
            let child = self.board.apply(action).expect("legal actions always apply");
            // each candidate is scored by the opponent's best reply
            let score = match mover {
                Player::X => self.min_value(&child),
                Player::O => self.max_value(&child),
            };

            // strict comparisons keep the first candidate on a tie, which is
            // the lexicographically smallest of the tied moves
            let better = match mover {
                Player::X => score > best_score,
                Player::O => score < best_score,
            };
            if better {
                best_score = score;
                best_action = Some(action);
            }
        }

        (best_score, best_action)
    }

    /// Returns the optimal action for the player to move, or `None` if the
    /// game is already over
    pub fn best_move(&mut self) -> Option<Action> {
        self.solve().1
    }

    /// The score of `board` with X to move, assuming O answers optimally
    fn max_value(&mut self, board: &Board) -> i32 {
        self.node_count += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MIN;
        for action in board.legal_actions() {
            let child = board.apply(action).expect("legal actions always apply");
            value = value.max(self.min_value(&child));
        }
        value
    }

    /// The score of `board` with O to move, assuming X answers optimally
    fn min_value(&mut self, board: &Board) -> i32 {
        self.node_count += 1;

        if board.is_terminal() {
            return board.utility();
        }

        let mut value = i32::MAX;
        for action in board.legal_actions() {
            let child = board.apply(action).expect("legal actions always apply");
            value = value.min(self.max_value(&child));
        }
        value
    }
}

impl<R: Rng> std::ops::Deref for Solver<R> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
