//! hc-resample
//!
//! Historical bootstrap resampling estimator:
//! - derive the set of period-over-period relative shifts from a series
//! - resample shifts uniformly over distinct values (or weighted by
//!   historical frequency, as an explicit alternative mode)
//! - optional per-draw adjustments: random sign-flip via the reciprocal
//!   transform, or a flip correlated with a second series' move
//! - simulate N independent single-step trials into a forecast
//!   distribution queryable by linear-interpolation quantile
//!
//! Deterministic, pure logic. No IO, no time, no ambient randomness: every
//! sampling call takes the caller's `rand::Rng` explicitly.

mod distribution;
mod flips;
mod shifts;
mod simulate;
mod types;

pub use distribution::OutcomeDistribution;
pub use flips::{correlated_flip, random_flip, reciprocal};
pub use shifts::{compute_shifts, ShiftSet};
pub use simulate::simulate;
pub use types::{ResampleError, SamplingMode, ShiftAdjustment};
