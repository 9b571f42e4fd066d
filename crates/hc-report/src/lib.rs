//! hc-report
//!
//! One-shot forecast pipeline: config in, quantile report out.
//!
//! Pipeline per run: VALIDATE -> FILTER -> SHIFTS -> ADJUSTMENT -> SIMULATE
//! -> QUANTILES. Stateless across runs; every error is terminal (the
//! enclosing program reports and stops, there is no retry policy).

mod engine;
mod types;

pub use engine::run;
pub use types::{ForecastError, ForecastReport, QuantilePoint};
