use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed random seed to support repeatable testing
const SEED: u64 = 0x5eed_7ab1e;

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Generate `n` uniformly distributed numbers in `[lo, hi)`
pub fn uniform(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    std::iter::repeat_with(|| rng.random_range(lo..hi))
        .take(n)
        .collect()
}

/// Generate a strictly increasing grid of `n` points starting at `start`,
/// with uneven spacing between 0.25 and 1.25
pub fn random_grid(rng: &mut StdRng, n: usize, start: f64) -> Vec<f64> {
    let mut x = start;
    (0..n)
        .map(|i| {
            if i > 0 {
                x += rng.random_range(0.25..1.25);
            }
            x
        })
        .collect()
}
