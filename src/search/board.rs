use std::ops::{Deref, DerefMut};

use crate::game::Player;

use super::Score;

/// Capabilities a two-player, perfect-information board needs in order to
/// be searched.
///
/// Implementations must make [`do_move`](Board::do_move) and
/// [`undo_move`](Board::undo_move) cheap: the search applies and reverts
/// every candidate on the one board it is given instead of copying it.
/// [`heuristic_value`](Board::heuristic_value) is from the first player's
/// point of view, so the first player maximizes and the second minimizes.
pub trait Board {
    type Move: Clone;

    /// Legal moves for [`next_player`](Board::next_player); empty iff the
    /// position is terminal.
    fn valid_moves(&mut self) -> Vec<Self::Move>;

    fn is_valid_move(&self, mv: &Self::Move) -> bool;

    fn heuristic_value(&self) -> Score;

    fn next_player(&self) -> Player;

    /// Owner of the winning line, `Player::None` for a draw or a running game.
    fn winner(&self) -> Player;

    fn is_end_position(&self) -> bool;

    /// While set, moves are simulated and the board stays silent.
    fn is_searching(&self) -> bool;

    fn set_searching(&mut self, searching: bool);

    /// Apply a legal move for the player to move.
    fn do_move(&mut self, mv: &Self::Move);

    /// Revert `mv`, which must be the most recently applied move.
    fn undo_move(&mut self, mv: &Self::Move);
}

/// A move applied to a board for the lifetime of the guard.
///
/// Dropping the guard undoes the move, so every exit from a search frame,
/// early returns included, leaves the board as it found it.
pub struct AppliedMove<'a, B: Board> {
    board: &'a mut B,
    mv: B::Move,
}

impl<'a, B: Board> AppliedMove<'a, B> {
    pub fn new(board: &'a mut B, mv: B::Move) -> Self {
        board.do_move(&mv);
        AppliedMove { board, mv }
    }
}

impl<B: Board> Deref for AppliedMove<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board> DerefMut for AppliedMove<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board> Drop for AppliedMove<'_, B> {
    fn drop(&mut self) {
        self.board.undo_move(&self.mv);
    }
}

/// Marks a board as searching until dropped, then restores the previous
/// flag.
pub struct SearchScope<'a, B: Board> {
    board: &'a mut B,
    previous: bool,
}

impl<'a, B: Board> SearchScope<'a, B> {
    pub fn enter(board: &'a mut B) -> Self {
        let previous = board.is_searching();
        board.set_searching(true);
        SearchScope { board, previous }
    }
}

impl<B: Board> Deref for SearchScope<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board> DerefMut for SearchScope<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board> Drop for SearchScope<'_, B> {
    fn drop(&mut self) {
        self.board.set_searching(self.previous);
    }
}
