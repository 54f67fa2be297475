use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Order in which a board lists its candidate columns.
///
/// The search keeps the last of several equally scored moves, so shuffling
/// the candidates varies the engine's play between games.
#[derive(Debug, Clone)]
pub enum MoveOrdering {
    /// Center column first, then alternating outward.
    CenterOut,
    /// Fisher-Yates shuffle on every call.
    Shuffled(StdRng),
}

impl MoveOrdering {
    /// Shuffled ordering seeded from the operating system.
    pub fn shuffled() -> Self {
        MoveOrdering::Shuffled(StdRng::from_os_rng())
    }

    /// Reproducible shuffled ordering.
    pub fn seeded(seed: u64) -> Self {
        MoveOrdering::Shuffled(StdRng::seed_from_u64(seed))
    }

    /// Playable columns `1..=width` in this ordering.
    pub fn columns(&mut self, width: usize) -> Vec<usize> {
        let mut columns = center_out(width);
        if let MoveOrdering::Shuffled(rng) = self {
            columns.shuffle(rng);
        }
        columns
    }
}

impl Default for MoveOrdering {
    fn default() -> Self {
        Self::shuffled()
    }
}

/// Columns `1..=width` ordered by distance from the center, left of center
/// first on ties.
pub fn center_out(width: usize) -> Vec<usize> {
    let mut columns: Vec<usize> = (1..=width).collect();
    // twice the distance to the center avoids fractional centers on even widths
    columns.sort_by_key(|&c| ((2 * c) as isize - (width + 1) as isize).unsigned_abs());
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_out_seven() {
        assert_eq!(center_out(7), vec![4, 3, 5, 2, 6, 1, 7]);
    }

    #[test]
    fn test_center_out_even_width() {
        assert_eq!(center_out(4), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut ordering = MoveOrdering::seeded(7);
        for _ in 0..20 {
            let mut columns = ordering.columns(7);
            columns.sort_unstable();
            assert_eq!(columns, (1..=7).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut a = MoveOrdering::seeded(42);
        let mut b = MoveOrdering::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.columns(7), b.columns(7));
        }
    }

    #[test]
    fn test_shuffle_varies_order() {
        let mut ordering = MoveOrdering::seeded(1);
        let first = ordering.columns(7);
        let varied = (0..50).any(|_| ordering.columns(7) != first);
        assert!(varied, "50 shuffles of 7 columns should not all match");
    }
}
