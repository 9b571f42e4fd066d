//! Correlated-flip forecast against a reference series, end to end.

use hc_report::{run, ForecastError};
use hc_testkit::{annual_series, seeded_config};

#[test]
fn scenario_full_correlation_against_a_falling_reference() {
    // Main series only ever grew: shifts {1.0, 0.5}, all positive.
    let series = annual_series(2018, &[10.0, 20.0, 30.0]);
    // Reference series' latest move is negative.
    let reference = annual_series(2018, &[100.0, 110.0, 99.0]);

    let mut cfg = seeded_config(2_000, 5);
    cfg.correlation_probability = Some(1.0);

    let report = run(&cfg, &series, Some(&reference)).unwrap();

    // Full correlation with a falling reference flips every positive shift
    // to its reciprocal (a negative change), so every quantile lands below
    // the last value.
    for point in &report.quantiles {
        assert!(
            point.value < report.last_value,
            "quantile {} = {} should sit below last value {}",
            point.q,
            point.value,
            report.last_value
        );
    }
}

#[test]
fn scenario_zero_correlation_keeps_disagreement() {
    // probability 0 enforces disagreement: positive shifts against a rising
    // reference all flip negative.
    let series = annual_series(2018, &[10.0, 20.0, 30.0]);
    let reference = annual_series(2018, &[50.0, 55.0, 66.0]);

    let mut cfg = seeded_config(2_000, 6);
    cfg.correlation_probability = Some(0.0);

    let report = run(&cfg, &series, Some(&reference)).unwrap();
    for point in &report.quantiles {
        assert!(point.value < report.last_value);
    }
}

#[test]
fn scenario_reference_too_short_is_rejected() {
    let series = annual_series(2018, &[10.0, 20.0, 30.0]);
    let reference = annual_series(2018, &[42.0]);

    let mut cfg = seeded_config(100, 7);
    cfg.correlation_probability = Some(0.5);

    let err = run(&cfg, &series, Some(&reference)).unwrap_err();
    assert!(matches!(err, ForecastError::Resample(_)));
}
