use hc_series::TimeSeries;
use rand::Rng;

use crate::types::{ResampleError, SamplingMode};

/// The set of historical period-over-period relative shifts.
///
/// Set semantics over exact f64 bit patterns: repeated identical shift
/// values count once for uniform sampling. Historical multiplicity is
/// retained alongside each distinct value so
/// [`SamplingMode::WeightedByFrequency`] stays available without a second
/// derivation pass. Entries are held sorted ascending, so iteration order
/// and sampling are deterministic for a given RNG stream.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftSet {
    /// `(shift, historical occurrence count)`, sorted ascending by shift.
    entries: Vec<(f64, u32)>,
    /// Sum of occurrence counts (weighted-mode denominator).
    total_count: u32,
}

impl ShiftSet {
    /// Build from raw shift values (finite; used by tests and callers that
    /// derive shifts themselves). Duplicates merge into one entry.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut raw: Vec<f64> = values.into_iter().collect();
        raw.sort_by(f64::total_cmp);

        let mut entries: Vec<(f64, u32)> = Vec::new();
        for v in raw {
            match entries.last_mut() {
                Some((last, count)) if last.to_bits() == v.to_bits() => *count += 1,
                _ => entries.push((v, 1)),
            }
        }
        let total_count = entries.iter().map(|(_, c)| c).sum();
        Self {
            entries,
            total_count,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct shift values, ascending.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(v, _)| *v)
    }

    /// Exact-bit membership test.
    pub fn contains(&self, shift: f64) -> bool {
        self.entries
            .iter()
            .any(|(v, _)| v.to_bits() == shift.to_bits())
    }

    /// Draw one shift.
    ///
    /// Uniform mode gives each *distinct* value probability `1/len`;
    /// weighted mode gives each value probability proportional to its
    /// historical occurrence count. An empty set is
    /// [`ResampleError::EmptyShiftSet`].
    pub fn sample<R: Rng>(&self, mode: SamplingMode, rng: &mut R) -> Result<f64, ResampleError> {
        if self.entries.is_empty() {
            return Err(ResampleError::EmptyShiftSet);
        }
        match mode {
            SamplingMode::UniformOverDistinct => {
                let i = rng.gen_range(0..self.entries.len());
                Ok(self.entries[i].0)
            }
            SamplingMode::WeightedByFrequency => {
                let mut ticket = rng.gen_range(0..self.total_count);
                for (value, count) in &self.entries {
                    if ticket < *count {
                        return Ok(*value);
                    }
                    ticket -= count;
                }
                // total_count is the sum of counts, so the loop always hits.
                unreachable!("ticket exceeded total count")
            }
        }
    }
}

/// Derive the shift set from a series: `v[t]/v[t-1] - 1` per adjacent pair,
/// deduplicated.
///
/// A series of all-equal values yields `{0.0}`. Fewer than two periods is
/// [`ResampleError::InsufficientData`]; a zero previous value makes the
/// ratio non-finite and is [`ResampleError::NonFiniteShift`].
pub fn compute_shifts(series: &TimeSeries) -> Result<ShiftSet, ResampleError> {
    if series.len() < 2 {
        return Err(ResampleError::InsufficientData {
            periods: series.len(),
        });
    }

    let values: Vec<f64> = series.values().collect();
    let mut shifts = Vec::with_capacity(values.len() - 1);
    for (index, pair) in values.windows(2).enumerate() {
        let shift = pair[1] / pair[0] - 1.0;
        if !shift.is_finite() {
            return Err(ResampleError::NonFiniteShift { index });
        }
        shifts.push(shift);
    }
    Ok(ShiftSet::from_values(shifts))
}
