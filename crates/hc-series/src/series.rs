use std::fmt;

use crate::period::Period;

/// Errors from series construction, loading, and reshaping.
///
/// Small, explicit, and test-friendly (no boxed sources).
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// A series must contain at least one point.
    Empty,
    /// Points are not strictly increasing by period.
    OutOfOrder { at: Period },
    /// Two points share the same period.
    DuplicatePeriod { at: Period },
    /// A value is NaN or infinite (including division by zero in `ratio_of`).
    NonFiniteValue { period: Period },
    /// A period string could not be parsed.
    BadPeriod { raw: String },
    /// CSV: a required header column is missing.
    MissingHeader(&'static str),
    /// CSV: a row is structurally broken (wrong field count).
    BadRow { line: usize, reason: String },
    /// File IO failure.
    Io(String),
}

impl From<std::io::Error> for SeriesError {
    fn from(e: std::io::Error) -> Self {
        SeriesError::Io(e.to_string())
    }
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Empty => write!(f, "series has no points"),
            SeriesError::OutOfOrder { at } => {
                write!(f, "series periods out of order at {}", at)
            }
            SeriesError::DuplicatePeriod { at } => {
                write!(f, "duplicate period in series: {}", at)
            }
            SeriesError::NonFiniteValue { period } => {
                write!(f, "non-finite value at period {}", period)
            }
            SeriesError::BadPeriod { raw } => write!(f, "cannot parse period: '{}'", raw),
            SeriesError::MissingHeader(h) => write!(f, "csv missing header: '{}'", h),
            SeriesError::BadRow { line, reason } => {
                write!(f, "csv bad row at line {}: {}", line, reason)
            }
            SeriesError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for SeriesError {}

/// An ordered `(Period, f64)` time series.
///
/// Invariants enforced at construction and never revalidated:
/// - at least one point
/// - periods strictly increasing (one value per period, no duplicates)
/// - every value finite
///
/// Read-only after construction; reshaping helpers return new series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    points: Vec<(Period, f64)>,
}

impl TimeSeries {
    pub fn new(points: Vec<(Period, f64)>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (period, value) in &points {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { period: *period });
            }
        }
        for pair in points.windows(2) {
            let (prev, _) = pair[0];
            let (next, _) = pair[1];
            if next == prev {
                return Err(SeriesError::DuplicatePeriod { at: next });
            }
            if next < prev {
                return Err(SeriesError::OutOfOrder { at: next });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unconstructible, but keeps clippy's len/is_empty pairing honest.
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(Period, f64)] {
        &self.points
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, v)| *v)
    }

    /// The most recent period (series are never empty).
    pub fn last_period(&self) -> Period {
        self.points[self.points.len() - 1].0
    }

    /// The most recent value — the base the simulation multiplies forward.
    pub fn last_value(&self) -> f64 {
        self.points[self.points.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(year: i32) -> Period {
        Period::annual(year)
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(TimeSeries::new(vec![]), Err(SeriesError::Empty));
    }

    #[test]
    fn rejects_out_of_order_and_duplicates() {
        let out_of_order = vec![(p(2021), 1.0), (p(2020), 2.0)];
        assert_eq!(
            TimeSeries::new(out_of_order),
            Err(SeriesError::OutOfOrder { at: p(2020) })
        );

        let duplicate = vec![(p(2020), 1.0), (p(2020), 2.0)];
        assert_eq!(
            TimeSeries::new(duplicate),
            Err(SeriesError::DuplicatePeriod { at: p(2020) })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let nan = vec![(p(2020), f64::NAN)];
        assert!(matches!(
            TimeSeries::new(nan),
            Err(SeriesError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn exposes_last_point() {
        let s = TimeSeries::new(vec![(p(2020), 1.5), (p(2021), 2.5)]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.last_period(), p(2021));
        assert_eq!(s.last_value(), 2.5);
    }
}
