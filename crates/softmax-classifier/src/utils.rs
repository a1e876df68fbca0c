//! Common utilities used across the crate.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random generator used by tests, benches and demos.
pub type DefaultRng = Xoshiro256PlusPlus;

/// Deterministic generator from a `u64` seed.
///
/// Passing the same seed to [`SoftmaxClassifier::train`](crate::SoftmaxClassifier::train)
/// reproduces initialization and every sampled batch.
#[inline]
pub fn seeded_rng(seed: u64) -> DefaultRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
