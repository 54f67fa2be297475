use std::fmt;

/// Occupant of a board cell and side to move.
///
/// `None` marks empty cells (including the sentinel border) and the winner
/// of a drawn or unfinished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    First,
    Second,
    #[default]
    None,
}

impl Player {
    /// Get the other player. `None` has no opponent and maps to itself.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
            Player::None => Player::None,
        }
    }

    /// Signed weight used by the heuristic: +1 for first, -1 for second.
    pub fn weight(self) -> i32 {
        match self {
            Player::First => 1,
            Player::Second => -1,
            Player::None => 0,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::First => "First",
            Player::Second => "Second",
            Player::None => "None",
        }
    }

    /// Board glyph used by the text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => '0',
            Player::None => '-',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
