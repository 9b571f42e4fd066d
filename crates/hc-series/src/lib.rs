//! hc-series
//!
//! Periods, time-series containers, and the dataset-side reshaping that
//! turns a long-format public dataset into a single forecastable series:
//! - `Period` / `TimeSeries` (ordered, validated, read-only after build)
//! - deterministic long-format CSV loading
//! - select-by-description, start-period filter, annual aggregation,
//!   ratio of two series, forecast horizon in months
//!
//! Pure and synchronous. No network fetch, no charting: callers obtain the
//! raw CSV however they like and hand the text (or a path) to the loader.

mod loader;
mod period;
mod reshape;
mod series;

pub use loader::{load_csv_file, parse_csv_str, RawObservation};
pub use period::Period;
pub use reshape::{aggregate_annual, from_period, months_until, ratio_of, select};
pub use series::{SeriesError, TimeSeries};
