//! Reshaping a long-format dataset into the single series a forecast runs
//! on: select one measure, filter to the relevant window, aggregate monthly
//! data to annual, derive a share-of-total ratio, and size the forecast
//! horizon.

use std::collections::BTreeMap;

use crate::loader::RawObservation;
use crate::period::Period;
use crate::series::{SeriesError, TimeSeries};

/// Pull one logical series out of a long-format table by description.
///
/// Returns raw points in input order; callers hand them to
/// [`TimeSeries::new`], which enforces ordering and uniqueness.
pub fn select(observations: &[RawObservation], description: &str) -> Vec<(Period, f64)> {
    observations
        .iter()
        .filter(|o| o.description == description)
        .map(|o| (o.period, o.value))
        .collect()
}

/// Drop points before `start` (the forecaster-determined relevant window).
///
/// Errors with [`SeriesError::Empty`] when nothing survives the filter.
pub fn from_period(series: &TimeSeries, start: Period) -> Result<TimeSeries, SeriesError> {
    let points: Vec<(Period, f64)> = series
        .points()
        .iter()
        .copied()
        .filter(|(p, _)| *p >= start)
        .collect();
    TimeSeries::new(points)
}

/// Sum monthly values into one annual point per year.
///
/// Already-annual points pass through as their own year's contribution, so
/// mixed input still aggregates deterministically.
pub fn aggregate_annual(series: &TimeSeries) -> Result<TimeSeries, SeriesError> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for (period, value) in series.points() {
        *by_year.entry(period.year()).or_insert(0.0) += value;
    }
    let points: Vec<(Period, f64)> = by_year
        .into_iter()
        .map(|(year, value)| (Period::annual(year), value))
        .collect();
    TimeSeries::new(points)
}

/// Inner-join two series on period and divide: `numerator / denominator`.
///
/// Periods present in only one input are dropped (join semantics). A zero
/// denominator surfaces as [`SeriesError::NonFiniteValue`] rather than an
/// infinity smuggled into the series.
pub fn ratio_of(numerator: &TimeSeries, denominator: &TimeSeries) -> Result<TimeSeries, SeriesError> {
    let mut points = Vec::new();
    let mut den_iter = denominator.points().iter().peekable();

    for (period, num) in numerator.points() {
        while den_iter.peek().is_some_and(|(p, _)| p < period) {
            den_iter.next();
        }
        if let Some((p, den)) = den_iter.peek() {
            if p == period {
                let ratio = num / den;
                if !ratio.is_finite() {
                    return Err(SeriesError::NonFiniteValue { period: *period });
                }
                points.push((*period, ratio));
            }
        }
    }
    TimeSeries::new(points)
}

/// Forecast horizon: whole months from `last` to `expiration`.
///
/// Day-count arithmetic: day delta divided by the 30.5-day mean month,
/// floored (so a negative horizon rounds away from zero, consistent with
/// the positive direction). Annual periods count from January.
pub fn months_until(last: Period, expiration: Period) -> i64 {
    const DAYS_IN_MONTH: f64 = 30.5;
    let days = (expiration.first_day() - last.first_day()).num_days();
    (days as f64 / DAYS_IN_MONTH).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(period: &str, value: f64, description: &str) -> RawObservation {
        RawObservation {
            period: period.parse().unwrap(),
            value,
            description: description.to_string(),
        }
    }

    fn annual(points: &[(i32, f64)]) -> TimeSeries {
        TimeSeries::new(
            points
                .iter()
                .map(|(y, v)| (Period::annual(*y), *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn select_filters_by_description() {
        let table = vec![
            obs("2020", 1.0, "Biofuels Consumption"),
            obs("2020", 10.0, "Total Renewable Energy Consumption"),
            obs("2021", 2.0, "Biofuels Consumption"),
        ];
        let picked = select(&table, "Biofuels Consumption");
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[1], (Period::annual(2021), 2.0));
    }

    #[test]
    fn from_period_drops_early_points() {
        let s = annual(&[(2019, 1.0), (2020, 2.0), (2021, 3.0)]);
        let filtered = from_period(&s, Period::annual(2020)).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.points()[0].0, Period::annual(2020));

        assert_eq!(
            from_period(&s, Period::annual(2030)),
            Err(SeriesError::Empty)
        );
    }

    #[test]
    fn aggregate_annual_sums_months() {
        let s = TimeSeries::new(vec![
            (Period::monthly(2020, 1).unwrap(), 1.0),
            (Period::monthly(2020, 2).unwrap(), 2.0),
            (Period::monthly(2021, 1).unwrap(), 5.0),
        ])
        .unwrap();
        let agg = aggregate_annual(&s).unwrap();
        assert_eq!(
            agg.points(),
            &[(Period::annual(2020), 3.0), (Period::annual(2021), 5.0)]
        );
    }

    #[test]
    fn ratio_of_joins_on_shared_periods() {
        let num = annual(&[(2020, 1.0), (2021, 3.0), (2022, 4.0)]);
        let den = annual(&[(2020, 4.0), (2022, 8.0)]);
        let ratio = ratio_of(&num, &den).unwrap();
        assert_eq!(
            ratio.points(),
            &[(Period::annual(2020), 0.25), (Period::annual(2022), 0.5)]
        );
    }

    #[test]
    fn ratio_of_rejects_zero_denominator() {
        let num = annual(&[(2020, 1.0)]);
        let den = annual(&[(2020, 0.0)]);
        assert_eq!(
            ratio_of(&num, &den),
            Err(SeriesError::NonFiniteValue {
                period: Period::annual(2020)
            })
        );
    }

    #[test]
    fn months_until_uses_mean_month_length() {
        let last = Period::monthly(2023, 10).unwrap();
        let expiration = Period::monthly(2024, 1).unwrap();
        // 92 days / 30.5 -> 3 whole months.
        assert_eq!(months_until(last, expiration), 3);
    }

    #[test]
    fn months_until_floors_negative_horizons() {
        let last = Period::monthly(2024, 1).unwrap();
        let expiration = Period::monthly(2023, 10).unwrap();
        // -92 days / 30.5 = -3.016... floors to -4, not toward zero.
        assert_eq!(months_until(last, expiration), -4);
        // An exact multiple stays exact in both directions.
        let a = Period::annual(2023);
        assert_eq!(months_until(a, a), 0);
    }
}
