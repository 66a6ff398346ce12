use rand::prelude::*;

/// Upon insertion of a new node, the node is replicated to higher levels with
/// a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;

    /// Pick a level for a new node, in the range `[1, total]`.
    ///
    /// This must never return a level that is `> self.total()`.
    fn random(&mut self) -> usize;
}

/// A level generator which produces geometrically distributed levels.
///
/// The probability of generating level `n` is `p` times the probability of
/// generating level `n-1`, truncated at the maximum number of levels allowed.
/// With `p ~ 1/branching-factor` this yields the expected `O(log n)` tower
/// heights the skip list's complexity bounds rely on.
pub struct GeometricalLevelGenerator {
    total: usize,
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new `GeometricalLevelGenerator` with `total` levels and `p`
    /// as the probability that a given node is promoted to the next level.
    ///
    /// # Panics
    ///
    /// `p` must be in `(0, 1)` and will panic otherwise. Similarly, `total`
    /// must be greater or equal to 1.
    pub fn new(total: usize, p: f64) -> Self {
        if total == 0 {
            panic!("total must be non-zero.");
        }
        if !(p > 0.0 && p < 1.0) {
            panic!("p must be in (0, 1).");
        }
        GeometricalLevelGenerator {
            total,
            p,
            rng: SmallRng::from_rng(thread_rng()).unwrap(),
        }
    }

    /// Like [`new`], but with a caller-supplied seed. Two generators built
    /// from the same seed produce identical level sequences, which pins node
    /// placement in tests.
    ///
    /// # Panics
    ///
    /// Same contract as [`new`].
    ///
    /// [`new`]: GeometricalLevelGenerator::new
    pub fn seeded(total: usize, p: f64, seed: u64) -> Self {
        let mut gen = Self::new(total, p);
        gen.rng = SmallRng::seed_from_u64(seed);
        gen
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self) -> usize {
        let mut lvl = 1;
        while self.rng.gen::<f64>() < self.p && lvl < self.total {
            lvl += 1;
        }
        lvl
    }

    fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::{
        GeometricalLevelGenerator,
        LevelGenerator,
    };

    #[test]
    #[should_panic]
    fn invalid_total() {
        GeometricalLevelGenerator::new(0, 0.5);
    }

    #[test]
    #[should_panic]
    fn invalid_p_0() {
        GeometricalLevelGenerator::new(1, 0.0);
    }

    #[test]
    #[should_panic]
    fn invalid_p_1() {
        GeometricalLevelGenerator::new(1, 1.0);
    }

    #[test]
    #[should_panic]
    fn invalid_p_nan() {
        GeometricalLevelGenerator::new(1, f64::NAN);
    }

    #[test]
    fn new() {
        GeometricalLevelGenerator::new(1, 0.5);
    }

    #[test]
    fn test_levels_stay_in_range() {
        let mut gen = GeometricalLevelGenerator::new(5, 0.7);
        assert_eq!(gen.total(), 5);
        for _ in 0..10_000 {
            let lvl = gen.random();
            assert!((1..=gen.total()).contains(&lvl));
        }
    }

    #[test]
    fn test_degenerate_single_level() {
        // with total == 1 the draw can never promote, whatever the rng says
        let mut gen = GeometricalLevelGenerator::new(1, 0.9);
        for _ in 0..1_000 {
            assert_eq!(gen.random(), 1);
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = GeometricalLevelGenerator::seeded(8, 0.5, 42);
        let mut b = GeometricalLevelGenerator::seeded(8, 0.5, 42);
        let first: Vec<usize> = (0..1_000).map(|_| a.random()).collect();
        let second: Vec<usize> = (0..1_000).map(|_| b.random()).collect();
        assert_eq!(first, second);
    }
}
