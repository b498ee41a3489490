//! Random outcome source for the shop simulation
//!
//! Everything random in the shop (part counts, which parts start broken, repair
//! outcomes) is drawn through [`RandomSource`], so tests can swap in a scripted source.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::error::ShopError;

/// A uniform integer generator over half-open ranges
pub trait RandomSource {
    /// Draw from `[min, max)`. Only called with `min < max`.
    fn draw(&mut self, min: u32, max: u32) -> u32;

    /// Draw from `[min, max)`, rejecting empty ranges
    fn next(&mut self, min: u32, max: u32) -> Result<u32, ShopError> {
        if min >= max {
            return Err(ShopError::InvalidRange { min, max });
        }
        Ok(self.draw(min, max))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        (**self).draw(min, max)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        (**self).draw(min, max)
    }
}

/// Default random source backed by `rand`
///
/// Uses the thread-local generator unless a seed was given.
#[derive(Debug, Default)]
pub struct ShopRng {
    rng: Option<StdRng>,
}

impl ShopRng {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Create a seeded source for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for ShopRng {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(min..max),
            None => rand::rng().random_range(min..max),
        }
    }
}
