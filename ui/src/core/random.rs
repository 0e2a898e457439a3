//! Random sources for synthetic demo data.
//!
//! Engines draw through [`RandomSource`] so tests can pin the values.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in the inclusive range `[min, max]`.
    fn int_in(&mut self, min: i64, max: i64) -> i64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Always returns the midpoint of each requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointSource;

impl RandomSource for MidpointSource {
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        min + (max - min) / 2
    }

    fn unit(&mut self) -> f64 {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rng_source_respects_bounds() {
        let mut source = RngSource(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let v = source.int_in(-3_000, 12_000);
            assert!((-3_000..=12_000).contains(&v));
            let u = source.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn midpoint_source_is_fixed() {
        let mut source = MidpointSource;
        assert_eq!(source.int_in(-3_000, 12_000), 4_500);
        assert_eq!(source.unit(), 0.5);
    }
}
