use serde::Serialize;

use hc_resample::ResampleError;
use hc_series::SeriesError;

/// One evaluated quantile of the forecast distribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuantilePoint {
    pub q: f64,
    pub value: f64,
}

/// Forecast report produced after a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForecastReport {
    /// Last historical period (after the start-period filter).
    pub last_period: String,
    /// Last historical value — the simulation base.
    pub last_value: f64,
    /// Whole months from the last period to the configured expiration.
    pub horizon_months: Option<i64>,
    /// Number of distinct historical shifts resampled.
    pub shift_count: usize,
    /// Trial count actually simulated.
    pub trials: u32,
    /// Seed the RNG was started from (configured or derived).
    pub seed: u64,
    /// Quantile ladder, sorted ascending by `q`.
    pub quantiles: Vec<QuantilePoint>,
}

/// Pipeline error variants (forwarded from the stage that failed).
#[derive(Clone, Debug, PartialEq)]
pub enum ForecastError {
    /// Configuration rejected by validation or inconsistent with inputs.
    Config(String),
    /// Series construction / reshaping failed.
    Series(SeriesError),
    /// Estimator failed (insufficient data, bad quantile, ...).
    Resample(ResampleError),
}

impl From<SeriesError> for ForecastError {
    fn from(e: SeriesError) -> Self {
        ForecastError::Series(e)
    }
}

impl From<ResampleError> for ForecastError {
    fn from(e: ResampleError) -> Self {
        ForecastError::Resample(e)
    }
}

impl std::fmt::Display for ForecastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastError::Config(msg) => write!(f, "config: {}", msg),
            ForecastError::Series(e) => write!(f, "series: {}", e),
            ForecastError::Resample(e) => write!(f, "resample: {}", e),
        }
    }
}

impl std::error::Error for ForecastError {}
