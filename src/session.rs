//! A game in progress: the live board plus the moves that led to it.
//!
//! Front ends drive a [`GameSession`] with column numbers from a human or
//! with an [`Agent`], and use the history to take moves back.

use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{ConnectBoard, ConnectMove, GameOutcome};
use crate::search::Board;

pub struct GameSession {
    board: ConnectBoard,
    history: Vec<ConnectMove>,
}

impl GameSession {
    /// Start a new game on `board`, which is reset to the empty position.
    pub fn new(mut board: ConnectBoard) -> Self {
        board.reset();
        GameSession {
            board,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &ConnectBoard {
        &self.board
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[ConnectMove] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.board.is_end_position()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.board.outcome()
    }

    /// Drop a stone in `column` for the player to move.
    pub fn play(&mut self, column: usize) -> Result<ConnectMove, MoveError> {
        let mv = self.board.play(column)?;
        self.history.push(mv);
        Ok(mv)
    }

    pub fn apply(&mut self, mv: ConnectMove) -> Result<(), MoveError> {
        self.board.apply(mv)?;
        self.history.push(mv);
        Ok(())
    }

    /// Let `agent` move for the player to move.
    ///
    /// Returns `Ok(None)` when the agent has nothing to play, and an error
    /// if it proposes an illegal move.
    pub fn play_agent(&mut self, agent: &mut dyn Agent) -> Result<Option<ConnectMove>, MoveError> {
        let Some(mv) = agent.select_move(&mut self.board) else {
            return Ok(None);
        };
        log::info!("{} plays {mv}", agent.name());
        self.apply(mv)?;
        Ok(Some(mv))
    }

    /// Undo the most recent move, finished game or not.
    pub fn undo_last(&mut self) -> Option<ConnectMove> {
        let mv = self.history.pop()?;
        self.board.undo_move(&mv);
        Some(mv)
    }

    /// Whether [`take_back`](GameSession::take_back) would do anything.
    pub fn can_take_back(&self) -> bool {
        !self.is_over() && self.history.len() >= 2
    }

    /// Undo the last two moves, returning the same player to move.
    ///
    /// Refused once the game is over or before both players have moved.
    pub fn take_back(&mut self) -> bool {
        if !self.can_take_back() {
            return false;
        }
        self.undo_last();
        self.undo_last();
        true
    }

    /// Clear the board and the history.
    pub fn new_game(&mut self) {
        self.board.reset();
        self.history.clear();
    }

    /// One-line description of the game state.
    pub fn status(&self) -> String {
        match self.outcome() {
            None => format!("It is {}'s turn.", self.board.next_player()),
            Some(GameOutcome::Draw) => "Drawn game!".to_string(),
            Some(GameOutcome::Winner(player)) => {
                format!("Game is over! {player} is the winner.")
            }
        }
    }
}

/// Play a whole game between two agents on `board`.
pub fn play_game<'a>(
    board: ConnectBoard,
    first: &'a mut dyn Agent,
    second: &'a mut dyn Agent,
) -> Result<GameSession, MoveError> {
    let mut session = GameSession::new(board);
    let mut turn = 0;

    while !session.is_over() {
        let agent = if turn % 2 == 0 { &mut *first } else { &mut *second };
        if session.play_agent(agent)?.is_none() {
            break;
        }
        turn += 1;
    }

    Ok(session)
}
