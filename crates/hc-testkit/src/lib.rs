//! hc-testkit
//!
//! Builders shared by the cross-crate scenario tests under `tests/`.
//! Dev-facing only: nothing here belongs in a production dependency graph.

use hc_config::ForecastConfig;
use hc_series::{Period, TimeSeries};

/// An annual series starting at `start_year`, one value per year.
pub fn annual_series(start_year: i32, values: &[f64]) -> TimeSeries {
    TimeSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (Period::annual(start_year + i as i32), *v))
            .collect(),
    )
    .expect("annual_series builder produced an invalid series")
}

/// A monthly series starting at `start_year`-01, rolling over year ends.
pub fn monthly_series(start_year: i32, values: &[f64]) -> TimeSeries {
    TimeSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let year = start_year + (i / 12) as i32;
                let month = (i % 12) as u8 + 1;
                (Period::monthly(year, month).expect("month in 1..=12"), *v)
            })
            .collect(),
    )
    .expect("monthly_series builder produced an invalid series")
}

/// A seeded config with a modest trial count, suitable for scenarios.
pub fn seeded_config(trials: u32, seed: u64) -> ForecastConfig {
    ForecastConfig {
        trials,
        seed: Some(seed),
        ..ForecastConfig::sane_defaults()
    }
}

/// Install a test tracing subscriber. Safe to call from every scenario:
/// later calls are no-ops once a subscriber is set.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
