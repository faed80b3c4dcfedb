use rand::{SeedableRng, rngs::StdRng};

/// Builds the generator a benchmark run owns for its whole lifetime.
///
/// With a seed every run sees the same sequence of inputs; without one the
/// generator is seeded from OS entropy.
pub fn bench_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
