//! Deterministic random sources for unit and behaviour tests.

use std::collections::VecDeque;

use crate::RandomSource;

/// Source that returns the same value on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom {
    value: f64,
}

impl FixedRandom {
    /// Build a source that always yields `value`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Source that always yields `0.0`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.value
    }
}

/// Source replaying a scripted sequence, then `fallback` once exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: VecDeque<f64>,
    fallback: f64,
    draws: usize,
}

impl SequenceRandom {
    /// Replay `values` in order, falling back to `0.0`.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.0,
            draws: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
