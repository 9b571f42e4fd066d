//! Per-draw shift adjustments.
//!
//! Both flips replace a shift with its *reciprocal transform*: the relative
//! change that exactly undoes it. The transform is its own inverse for any
//! shift other than -1.

use rand::Rng;

/// The reciprocal transform `1/(1+x) - 1`.
///
/// Self-inverse away from the pole: `reciprocal(reciprocal(x)) == x` for
/// `x != -1`.
pub fn reciprocal(shift: f64) -> f64 {
    1.0 / (1.0 + shift) - 1.0
}

/// Reciprocal transform, guarded at the pole.
///
/// A shift of -1 (value went to zero) or below has no finite reciprocal
/// change; such shifts pass through unchanged instead of manufacturing an
/// infinity.
fn flip_or_keep(shift: f64) -> f64 {
    if shift <= -1.0 {
        shift
    } else {
        reciprocal(shift)
    }
}

/// Randomly destabilize a shift: with probability `1/(cx+1)`, replace it
/// with its reciprocal transform; otherwise return it unchanged.
///
/// `confidence_weight` (cx) expresses confidence in the historical
/// direction: cx = 0 always flips, large cx rarely flips.
///
/// A zero shift short-circuits before any random draw is consumed: flipping
/// zero is a no-op either way, and skipping the draw keeps the RNG stream
/// independent of how many flat periods history contains.
pub fn random_flip<R: Rng>(shift: f64, confidence_weight: u32, rng: &mut R) -> f64 {
    if shift == 0.0 {
        return shift;
    }
    if rng.gen_range(0..=confidence_weight) == 0 {
        return flip_or_keep(shift);
    }
    shift
}

/// Correlate a shift's direction with a second series' contemporaneous move.
///
/// With probability `probability`, enforce sign *agreement* with
/// `reference_move`: keep the shift when `shift * reference_move > 0`,
/// otherwise flip it. With the complementary probability, enforce
/// disagreement. A zero on either side counts as disagreement (the product
/// test is strict).
///
/// `probability` must already be validated into `[0, 1]`;
/// [`crate::simulate`] rejects out-of-range values up front.
pub fn correlated_flip<R: Rng>(
    shift: f64,
    reference_move: f64,
    probability: f64,
    rng: &mut R,
) -> f64 {
    let agrees = shift * reference_move > 0.0;
    if rng.gen::<f64>() < probability {
        if agrees {
            shift
        } else {
            flip_or_keep(shift)
        }
    } else if agrees {
        flip_or_keep(shift)
    } else {
        shift
    }
}
