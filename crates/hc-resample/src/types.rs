use std::fmt;

/// How a shift is drawn from the [`crate::ShiftSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Equal probability per *distinct* shift value, regardless of how often
    /// it occurred historically (shifts pass through a set before sampling).
    /// The default.
    #[default]
    UniformOverDistinct,
    /// Probability proportional to historical frequency. Offered as an
    /// explicit alternative; never silently substituted for the default.
    WeightedByFrequency,
}

/// Optional per-draw transformation applied to a sampled shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShiftAdjustment {
    /// Use the sampled shift as-is.
    None,
    /// Flip the shift to its reciprocal transform with probability
    /// `1 / (confidence_weight + 1)`. Higher weight = fewer flips.
    RandomFlip { confidence_weight: u32 },
    /// With probability `probability`, force directional agreement with
    /// `reference_move` (flipping via the reciprocal transform when signs
    /// disagree); with the complementary probability, force disagreement.
    CorrelatedFlip {
        reference_move: f64,
        probability: f64,
    },
}

/// Estimator error variants. All terminal for the run: the enclosing
/// program reports and stops, there is no retry policy.
#[derive(Clone, Debug, PartialEq)]
pub enum ResampleError {
    /// Shift derivation needs at least two periods.
    InsufficientData { periods: usize },
    /// An adjacent-pair ratio was NaN or infinite (zero/absurd base value).
    NonFiniteShift { index: usize },
    /// Sampling from an empty shift set.
    EmptyShiftSet,
    /// A distribution must contain at least one outcome.
    EmptyDistribution,
    /// Quantile argument outside `[0, 1]`.
    QuantileOutOfRange { q: f64 },
    /// A simulation of zero trials is meaningless.
    ZeroTrials,
    /// Correlation probability outside `[0, 1]`.
    BadProbability { p: f64 },
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::InsufficientData { periods } => write!(
                f,
                "insufficient data: {} period(s), need at least 2",
                periods
            ),
            ResampleError::NonFiniteShift { index } => {
                write!(f, "non-finite shift at adjacent pair index {}", index)
            }
            ResampleError::EmptyShiftSet => write!(f, "empty shift set"),
            ResampleError::EmptyDistribution => write!(f, "empty outcome distribution"),
            ResampleError::QuantileOutOfRange { q } => {
                write!(f, "quantile {} outside [0, 1]", q)
            }
            ResampleError::ZeroTrials => write!(f, "trial count must be > 0"),
            ResampleError::BadProbability { p } => {
                write!(f, "correlation probability {} outside [0, 1]", p)
            }
        }
    }
}

impl std::error::Error for ResampleError {}
