use rand::Rng;

use crate::distribution::OutcomeDistribution;
use crate::flips::{correlated_flip, random_flip};
use crate::shifts::ShiftSet;
use crate::types::{ResampleError, SamplingMode, ShiftAdjustment};

/// Run `trials` independent single-step draws.
///
/// Each trial samples one shift, applies the configured adjustment, and
/// produces `last_value * (1 + shift)`. No state is carried between trials:
/// this is a one-step forecast, not a random walk.
pub fn simulate<R: Rng>(
    last_value: f64,
    shifts: &ShiftSet,
    trials: u32,
    mode: SamplingMode,
    adjustment: &ShiftAdjustment,
    rng: &mut R,
) -> Result<OutcomeDistribution, ResampleError> {
    if trials == 0 {
        return Err(ResampleError::ZeroTrials);
    }
    if shifts.is_empty() {
        return Err(ResampleError::EmptyShiftSet);
    }
    if let ShiftAdjustment::CorrelatedFlip { probability, .. } = adjustment {
        if !(0.0..=1.0).contains(probability) || probability.is_nan() {
            return Err(ResampleError::BadProbability { p: *probability });
        }
    }

    let mut outcomes = Vec::with_capacity(trials as usize);
    for _ in 0..trials {
        let sampled = shifts.sample(mode, rng)?;
        let shift = match *adjustment {
            ShiftAdjustment::None => sampled,
            ShiftAdjustment::RandomFlip { confidence_weight } => {
                random_flip(sampled, confidence_weight, rng)
            }
            ShiftAdjustment::CorrelatedFlip {
                reference_move,
                probability,
            } => correlated_flip(sampled, reference_move, probability, rng),
        };
        outcomes.push(last_value * (1.0 + shift));
    }

    OutcomeDistribution::new(outcomes)
}
