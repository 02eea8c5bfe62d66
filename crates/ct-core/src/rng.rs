//! Deterministic, explicitly owned RNG.
//!
//! # Determinism strategy
//!
//! There is no process-wide RNG.  Every random operation (city generation,
//! district selection, random-walk baselines) takes a `&mut CityRng` that the
//! caller seeded from a `u64`.  The same seed and parameters always produce
//! the same output, and tests running in parallel never share state.
//!
//! Independent streams are derived with [`CityRng::child`], which mixes an
//! offset into a fresh seed using the 64-bit fractional golden-ratio
//! constant.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG threaded through every random stage of the pipeline.
///
/// Not `Clone`: two copies of a stream draw identical values.
pub struct CityRng(SmallRng);

impl CityRng {
    pub fn new(seed: u64) -> Self {
        CityRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `CityRng` with a different seed offset, giving
    /// a pipeline stage its own stream from the root seed.
    pub fn child(&mut self, offset: u64) -> CityRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        CityRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw one value from `dist` (e.g. a `WeightedIndex`).
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
