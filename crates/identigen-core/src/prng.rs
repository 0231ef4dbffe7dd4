// crates/identigen-core/src/prng.rs
//
// Seeded MT19937 context with bounded integer draws.
// Pinned algorithm: MT19937 keyed via init_by_array + top-bits rejection sampling.

use rand_mt::Mt;

use crate::seed::Seed;

/// Explicitly owned generator state for one generation.
pub struct Prng {
    mt: Mt,
    draws: u64,
}

impl Prng {
    pub fn new(seed: &Seed) -> Self {
        Self {
            mt: Mt::new_with_key(seed.key_words()),
            draws: 0,
        }
    }

    /// Reset to the state `Prng::new(seed)` would produce.
    pub fn reseed(&mut self, seed: &Seed) {
        *self = Self::new(seed);
    }

    /// Number of `next_in_range` calls answered since the last (re)seed.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Next integer in `[min, max]`, both inclusive. Requires `min <= max`.
    pub fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max, "next_in_range: min {min} > max {max}");
        self.draws += 1;

        let n = u64::from(max - min) + 1;
        let k = 64 - n.leading_zeros();

        // Reject instead of reducing modulo n so every value stays equally likely.
        let mut r = self.random_bits(k);
        while r >= n {
            r = self.random_bits(k);
        }
        min + r as u32
    }

    /// `k` uniformly random bits, 1 <= k <= 64, taken from the top of each word.
    fn random_bits(&mut self, k: u32) -> u64 {
        if k <= 32 {
            return u64::from(self.mt.next_u32() >> (32 - k));
        }
        let low = u64::from(self.mt.next_u32());
        let high = u64::from(self.mt.next_u32() >> (64 - k));
        low | (high << 32)
    }
}
