use crate::math::Real;

/// Mask applied to the raw integers before rescaling them to floats.
pub const RAND_LIMIT: u32 = 32767;

/// An explicit, seedable source of uniform-ish random floats.
///
/// There is no process-wide generator: each simulation context owns its own
/// instance, which keeps results reproducible under test.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: oorandom::Rand32,
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomGenerator {
    /// Creates a generator from a seed. Equal seeds produce equal sequences.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
        }
    }

    #[inline]
    fn next_unit(&mut self) -> Real {
        (self.rng.rand_u32() & RAND_LIMIT) as Real / RAND_LIMIT as Real
    }

    /// A random number in `[-1, 1]`.
    #[inline]
    pub fn random(&mut self) -> Real {
        2.0 * self.next_unit() - 1.0
    }

    /// A random number in `[lo, hi]`.
    #[inline]
    pub fn random_range(&mut self, lo: Real, hi: Real) -> Real {
        (hi - lo) * self.next_unit() + lo
    }
}
