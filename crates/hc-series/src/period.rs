use std::fmt;
use std::str::FromStr;

use crate::series::SeriesError;

/// A reporting period: a calendar year, optionally narrowed to one month.
///
/// Ordering is by year, then month; an annual period sorts before any
/// monthly period of the same year. Source datasets encode periods either
/// as `YYYY-MM` / `YYYY` strings or as packed `YYYYMM` integers — both
/// forms parse via [`FromStr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: Option<u8>,
}

impl Period {
    /// An annual period (e.g. `2023`).
    pub fn annual(year: i32) -> Self {
        Self { year, month: None }
    }

    /// A monthly period. Month must be in `1..=12`.
    pub fn monthly(year: i32, month: u8) -> Result<Self, SeriesError> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::BadPeriod {
                raw: format!("{year}-{month:02}"),
            });
        }
        Ok(Self {
            year,
            month: Some(month),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    /// First calendar day of the period (January for annual periods).
    ///
    /// Used only for horizon arithmetic; month values are validated at
    /// construction so the conversion cannot fail.
    pub(crate) fn first_day(&self) -> chrono::NaiveDate {
        let month = u32::from(self.month.unwrap_or(1));
        chrono::NaiveDate::from_ymd_opt(self.year, month, 1)
            .unwrap_or(chrono::NaiveDate::MIN)
    }
}

impl FromStr for Period {
    type Err = SeriesError;

    /// Accepts `YYYY`, `YYYY-MM`, and packed `YYYYMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || SeriesError::BadPeriod { raw: s.to_string() };
        let s = s.trim();

        if let Some((y, m)) = s.split_once('-') {
            let year: i32 = y.parse().map_err(|_| bad())?;
            let month: u8 = m.parse().map_err(|_| bad())?;
            return Period::monthly(year, month);
        }

        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            // Packed YYYYMM (EIA-style). Month 13 is the annualized roll-up
            // row and is rejected here; the loader skips it upstream.
            let year: i32 = s[..4].parse().map_err(|_| bad())?;
            let month: u8 = s[4..].parse().map_err(|_| bad())?;
            return Period::monthly(year, month);
        }

        let year: i32 = s.parse().map_err(|_| bad())?;
        Ok(Period::annual(year))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(m) => write!(f, "{}-{:02}", self.year, m),
            None => write!(f, "{}", self.year),
        }
    }
}
