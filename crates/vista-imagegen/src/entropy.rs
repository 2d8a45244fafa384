use rand::Rng;

use crate::types::MAX_SEED;

/// Source of the per-request random values
///
/// Each call draws fresh values; implementations must not share mutable
/// state between concurrent requests.
pub trait Entropy: Send + Sync {
    /// Seed forwarded to the provider, in `0..=MAX_SEED`
    fn seed(&self) -> u16;

    /// Query value that keeps fallback placeholder URLs distinct
    fn cache_buster(&self) -> u64;
}

/// Draws from the calling thread's RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn seed(&self) -> u16 {
        rand::rng().random_range(0..=MAX_SEED)
    }

    fn cache_buster(&self) -> u64 {
        rand::rng().random()
    }
}
