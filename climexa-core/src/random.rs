//! Injectable uniform random source.
//!
//! Scoring is deterministic apart from two draws: the success-rate jitter and
//! the precipitation branch. Both go through [`RandomSource`] so callers can
//! substitute a fixed source in tests or a seeded one for reproducible runs.

use rand::rngs::ThreadRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform values in `[0.0, 1.0)`.
///
/// # Examples
///
/// ```rust
/// use climexa_core::RandomSource;
///
/// struct Midpoint;
///
/// impl RandomSource for Midpoint {
///     fn next_unit(&mut self) -> f64 {
///         0.5
///     }
/// }
///
/// assert_eq!(Midpoint.below(10), 5);
/// ```
pub trait RandomSource {
    /// Draw the next uniform value in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;

    /// Draw an integer uniformly from `0..bound`.
    ///
    /// Computed as `floor(u * bound)`; out-of-range draws are clamped so a
    /// misbehaving source cannot escape the interval.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "flooring a unit draw scaled by a small bound"
    )]
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let raw = self.next_unit();
        let unit = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let scaled = (unit * f64::from(bound)).floor() as u32;
        scaled.min(bound - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Non-seeded source drawing from the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
