use crate::game::{ConnectBoard, ConnectMove};

/// Anything that can pick the next move on a live board.
pub trait Agent {
    /// Select a move for the player to move, or `None` once the game is over.
    ///
    /// Agents may search the board in place but must hand it back in the
    /// position they received it.
    fn select_move(&mut self, board: &mut ConnectBoard) -> Option<ConnectMove>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
