//! Injected randomness.
//!
//! Every random roll in the simulation (spawn positions, enemy variant,
//! cooldown jitter, power-up kind, particle spray) goes through `GameRng`, so
//! callers control determinism.  Any `rand::Rng` works; `ConstantRng` pins
//! every roll to the same point of its range.

use rand::Rng;

pub trait GameRng {
    /// Uniform float in `[low, high)`.
    fn range_f32(&mut self, low: f32, high: f32) -> f32;
    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn range_i32(&mut self, low: i32, high: i32) -> i32;
    /// True with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: Rng + ?Sized> GameRng for R {
    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }

    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// A generator whose every roll lands at the same fraction of its range.
///
/// `ConstantRng::new(0.0)` always yields the low end and passes every
/// `chance(p)` with `p > 0`; `ConstantRng::new(1.0)` yields the high end and
/// fails every `chance(p)` below certainty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantRng {
    fraction: f64,
}

impl ConstantRng {
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 0.999_999),
        }
    }
}

impl GameRng for ConstantRng {
    fn range_f32(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.fraction as f32
    }

    fn range_i32(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        low + (span * self.fraction).floor() as i32
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.fraction < probability
    }
}
