use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use hc_config::ForecastConfig;
use hc_resample::{compute_shifts, simulate, ResampleError, ShiftAdjustment};
use hc_series::{from_period, months_until, TimeSeries};

use crate::types::{ForecastError, ForecastReport, QuantilePoint};

/// Run one forecast.
///
/// `reference` is the optional second series the correlated flip keys on;
/// it is required when `correlation_probability` is configured and ignored
/// otherwise. When both flip knobs are configured the correlated flip wins
/// (the more specific instruction).
pub fn run(
    config: &ForecastConfig,
    series: &TimeSeries,
    reference: Option<&TimeSeries>,
) -> Result<ForecastReport, ForecastError> {
    config
        .validate()
        .map_err(|e| ForecastError::Config(e.to_string()))?;
    let start = config
        .start()
        .map_err(|e| ForecastError::Config(e.to_string()))?;
    let expiration = config
        .expiration()
        .map_err(|e| ForecastError::Config(e.to_string()))?;

    // FILTER: restrict history to the forecaster-determined window.
    let filtered;
    let series = match start {
        Some(start) => {
            filtered = from_period(series, start)?;
            &filtered
        }
        None => series,
    };
    debug!(
        periods = series.len(),
        last_period = %series.last_period(),
        "history window selected"
    );

    // SHIFTS
    let shifts = compute_shifts(series)?;

    // ADJUSTMENT
    let adjustment = build_adjustment(config, reference)?;

    // SIMULATE (seeded; derived seed is reported so unseeded runs stay
    // reproducible after the fact).
    let seed = config.seed.unwrap_or_else(derive_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(
        trials = config.trials,
        shifts = shifts.len(),
        seed,
        adjustment = ?adjustment,
        "running forecast simulation"
    );
    let distribution = simulate(
        series.last_value(),
        &shifts,
        config.trials,
        config.sampling.into(),
        &adjustment,
        &mut rng,
    )?;

    // QUANTILES
    let mut qs = config.quantiles.clone();
    qs.sort_by(f64::total_cmp);
    let mut quantiles = Vec::with_capacity(qs.len());
    for q in qs {
        quantiles.push(QuantilePoint {
            q,
            value: distribution.quantile(q)?,
        });
    }

    let horizon_months = expiration.map(|e| months_until(series.last_period(), e));

    Ok(ForecastReport {
        last_period: series.last_period().to_string(),
        last_value: series.last_value(),
        horizon_months,
        shift_count: shifts.len(),
        trials: config.trials,
        seed,
        quantiles,
    })
}

fn build_adjustment(
    config: &ForecastConfig,
    reference: Option<&TimeSeries>,
) -> Result<ShiftAdjustment, ForecastError> {
    if let Some(probability) = config.correlation_probability {
        let reference = reference.ok_or_else(|| {
            ForecastError::Config(
                "correlation_probability configured but no reference series supplied".to_string(),
            )
        })?;
        let reference_move = latest_move(reference)?;
        return Ok(ShiftAdjustment::CorrelatedFlip {
            reference_move,
            probability,
        });
    }
    if let Some(confidence_weight) = config.confidence_weight {
        return Ok(ShiftAdjustment::RandomFlip { confidence_weight });
    }
    Ok(ShiftAdjustment::None)
}

/// The reference series' most recent period-over-period relative move.
fn latest_move(reference: &TimeSeries) -> Result<f64, ForecastError> {
    let points = reference.points();
    if points.len() < 2 {
        return Err(ForecastError::Resample(ResampleError::InsufficientData {
            periods: points.len(),
        }));
    }
    let prev = points[points.len() - 2].1;
    let last = points[points.len() - 1].1;
    let shift = last / prev - 1.0;
    if !shift.is_finite() {
        return Err(ForecastError::Resample(ResampleError::NonFiniteShift {
            index: points.len() - 2,
        }));
    }
    Ok(shift)
}

/// Seed for unseeded runs: hash of the current wall clock. Explicit so the
/// derived value can be logged and reported for after-the-fact replay.
fn derive_seed() -> u64 {
    let mut hasher = DefaultHasher::new();
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .hash(&mut hasher);
    hasher.finish()
}
