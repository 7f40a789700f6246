use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for skip list node heights.
pub trait RandomGenerator {
    fn next(&mut self) -> u32;

    /// Returns true roughly once every `n` calls.
    fn one_in(&mut self, n: u32) -> bool {
        assert!(n > 0);
        self.next() % n == 0
    }
}

/// Seedable generator, the same seed always yields the same sequence.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomGenerator for Random {
    #[inline]
    fn next(&mut self) -> u32 {
        self.rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::random::{Random, RandomGenerator};

    #[test]
    fn test_same_seed() {
        let mut a = Random::new(0xdead_beef);
        let mut b = Random::new(0xdead_beef);
        for _ in 0..1000 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_one_in() {
        let mut rnd = Random::new(301);
        assert!((0..100).all(|_| rnd.one_in(1)));

        let hits = (0..10000).filter(|_| rnd.one_in(2)).count();
        // fair coin, loose bounds
        assert!(hits > 4500 && hits < 5500, "hits: {}", hits);
    }
}
