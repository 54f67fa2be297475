use std::fmt;

use super::Player;

/// A stone dropped by `player` into `column` (1-indexed).
///
/// The landing row is not stored; it follows from the column's fill height
/// at the time the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectMove {
    pub player: Player,
    pub column: usize,
}

impl ConnectMove {
    pub fn new(player: Player, column: usize) -> Self {
        ConnectMove { player, column }
    }
}

impl fmt::Display for ConnectMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ player = {}, column = {} }}", self.player, self.column)
    }
}

/// A board coordinate. Row 1 is the bottom row, column 1 the leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub fn new(row: usize, column: usize) -> Self {
        Coord { row, column }
    }
}
