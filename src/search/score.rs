use std::fmt;

/// Value of a position from the first player's point of view.
///
/// Forced outcomes are separate variants rather than integer extremes, so
/// they order correctly against any heuristic value and never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    SecondPlayerWins,
    Heuristic(i32),
    FirstPlayerWins,
}

impl Score {
    /// Lowest possible score; the maximizer's starting best and alpha.
    pub const MIN: Score = Score::SecondPlayerWins;
    /// Highest possible score; the minimizer's starting best and beta.
    pub const MAX: Score = Score::FirstPlayerWins;

    pub fn is_decisive(self) -> bool {
        !matches!(self, Score::Heuristic(_))
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Heuristic(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::SecondPlayerWins => f.write_str("second player wins"),
            Score::Heuristic(value) => write!(f, "{value}"),
            Score::FirstPlayerWins => f.write_str("first player wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ord() {
        assert!(Score::FirstPlayerWins > Score::Heuristic(i32::MAX));
        assert!(Score::Heuristic(i32::MIN) > Score::SecondPlayerWins);
        assert!(Score::Heuristic(100) > Score::Heuristic(0));
        assert!(Score::Heuristic(0) > Score::Heuristic(-100));
        assert_eq!(Score::MIN, Score::SecondPlayerWins);
        assert_eq!(Score::MAX, Score::FirstPlayerWins);
    }

    #[test]
    fn test_decisive() {
        assert!(Score::FirstPlayerWins.is_decisive());
        assert!(Score::SecondPlayerWins.is_decisive());
        assert!(!Score::Heuristic(80).is_decisive());
    }

    #[test]
    fn test_display() {
        assert_eq!(Score::Heuristic(-30).to_string(), "-30");
        assert_eq!(Score::FirstPlayerWins.to_string(), "first player wins");
    }
}
