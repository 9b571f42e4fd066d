//! Long-format CSV loading (deterministic).
//!
//! Public datasets of the kind this crate forecasts ship as "long" tables:
//! one row per (period, measure) with the measure named in a description
//! column. The loader decodes rows into [`RawObservation`] values and leaves
//! series assembly to [`crate::reshape::select`].
//!
//! ## CSV column contract (case-insensitive, order-independent)
//!
//! | Column        | Type / example            | Notes                        |
//! |---------------|---------------------------|------------------------------|
//! | `period`      | `1981-07`, `198107`, `2023` | See [`crate::Period`]      |
//! | `value`       | `129.787`                 | `Not Available`/`NA` skipped |
//! | `description` | `Biofuels Consumption`    | Optional; defaults to `""`   |
//!
//! Row-level noise is skipped, not fatal: not-available markers, annualized
//! month-13 roll-up rows, and unparseable periods or values are all dropped
//! the way the upstream cleaning step drops them. Only structural problems
//! (missing header, short row) are returned as `Err`.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::period::Period;
use crate::series::SeriesError;

/// One decoded row of a long-format dataset, before any series assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct RawObservation {
    pub period: Period,
    pub value: f64,
    /// Measure name; empty when the dataset has no description column.
    pub description: String,
}

/// Value markers the source datasets use for "no data this period".
const NOT_AVAILABLE: &[&str] = &["not available", "na", "n/a", ""];

/// Load observations from a CSV file on disk.
pub fn load_csv_file(path: impl AsRef<Path>) -> Result<Vec<RawObservation>, SeriesError> {
    let src = std::fs::read_to_string(path)?;
    parse_csv_str(&src)
}

/// Parse observations from CSV text (pure; useful for tests).
pub fn parse_csv_str(src: &str) -> Result<Vec<RawObservation>, SeriesError> {
    let mut lines = src.lines();

    let header_line = match lines.next() {
        Some(l) => l.trim().trim_start_matches('\u{feff}'),
        None => return Ok(Vec::new()),
    };
    let col_idx = build_col_index(header_line)?;
    let has_description = col_idx.contains_key("description");

    let mut out = Vec::new();
    let mut line_num: usize = 1; // 1-based, header = 1

    for line in lines {
        line_num += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Minimal split: comma-separated, no quoting (sufficient for these
        // numeric tables; description fields in the wild carry no commas).
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        let get = |name: &'static str| -> Result<&str, SeriesError> {
            let i = *col_idx
                .get(name)
                .ok_or(SeriesError::MissingHeader(name))?;
            fields.get(i).copied().ok_or_else(|| SeriesError::BadRow {
                line: line_num,
                reason: format!("expected at least {} fields, got {}", i + 1, fields.len()),
            })
        };

        let value_s = get("value")?;
        if NOT_AVAILABLE.contains(&value_s.to_ascii_lowercase().as_str()) {
            continue;
        }
        let value: f64 = match value_s.parse() {
            Ok(v) => v,
            // Unparseable value — skip row.
            Err(_) => continue,
        };

        let period_s = get("period")?;
        let period = match Period::from_str(period_s) {
            Ok(p) => p,
            // Annualized month-13 rows and garbage periods — skip row.
            Err(_) => continue,
        };

        let description = if has_description {
            get("description")?.to_string()
        } else {
            String::new()
        };

        out.push(RawObservation {
            period,
            value,
            description,
        });
    }

    Ok(out)
}

/// Build a case-insensitive column-name → index map from the header line.
fn build_col_index(header_line: &str) -> Result<HashMap<String, usize>, SeriesError> {
    let mut idx = HashMap::new();
    for (i, name) in header_line.split(',').enumerate() {
        idx.entry(name.trim().to_ascii_lowercase()).or_insert(i);
    }
    for required in ["period", "value"] {
        if !idx.contains_key(required) {
            return Err(SeriesError::MissingHeader(required));
        }
    }
    Ok(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_format_with_description() {
        let csv = "Period,Value,Description\n\
                   198101,10.5,Biofuels Consumption\n\
                   198101,100.0,Total Renewable Energy Consumption\n";
        let obs = parse_csv_str(csv).unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].period, Period::monthly(1981, 1).unwrap());
        assert_eq!(obs[0].value, 10.5);
        assert_eq!(obs[0].description, "Biofuels Consumption");
    }

    #[test]
    fn skips_not_available_and_month_13_rows() {
        let csv = "period,value\n\
                   202301,1.0\n\
                   202302,Not Available\n\
                   202313,99.0\n\
                   202303,3.0\n";
        let obs = parse_csv_str(csv).unwrap();
        let periods: Vec<String> = obs.iter().map(|o| o.period.to_string()).collect();
        assert_eq!(periods, vec!["2023-01", "2023-03"]);
    }

    #[test]
    fn missing_value_header_is_an_error() {
        let csv = "period,description\n2023,foo\n";
        assert_eq!(parse_csv_str(csv), Err(SeriesError::MissingHeader("value")));
    }

    #[test]
    fn short_row_is_an_error() {
        let csv = "period,value\n2023\n";
        assert!(matches!(
            parse_csv_str(csv),
            Err(SeriesError::BadRow { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input_yields_no_observations() {
        assert_eq!(parse_csv_str("").unwrap(), vec![]);
    }
}
