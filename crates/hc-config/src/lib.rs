//! hc-config
//!
//! Forecast run configuration: trial count, history window, expiration,
//! flip knobs, and the quantile ladder as one explicit serde struct,
//! loadable from a JSON or YAML file and validated fail-fast before any
//! simulation runs.
//!
//! Validation diagnoses every bad field with a message; it does not attempt
//! repair. Configs carry no secrets or credentials.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use hc_resample::SamplingMode;
use hc_series::Period;

/// The default quantile ladder the report evaluates.
pub const DEFAULT_QUANTILES: &[f64] = &[0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95];

/// Serde-facing sampling mode (the core enum stays serde-free).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Equal weight per distinct shift (the default).
    #[default]
    UniformOverDistinct,
    /// Weight by historical frequency (explicit alternative).
    WeightedByFrequency,
}

impl From<Sampling> for SamplingMode {
    fn from(s: Sampling) -> Self {
        match s {
            Sampling::UniformOverDistinct => SamplingMode::UniformOverDistinct,
            Sampling::WeightedByFrequency => SamplingMode::WeightedByFrequency,
        }
    }
}

/// One forecast run, fully specified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastConfig {
    /// Monte Carlo trial count. Must be > 0.
    pub trials: u32,

    /// RNG seed. `None` derives one at run time (and logs it) so unseeded
    /// runs stay explicit about where randomness entered.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Drop history before this period (`"1981"`, `"2007-01"`).
    #[serde(default)]
    pub start_period: Option<String>,

    /// Question expiration; sets the reported forecast horizon.
    #[serde(default)]
    pub expiration_period: Option<String>,

    /// Enables the random flip: flip probability is
    /// `1 / (confidence_weight + 1)`.
    #[serde(default)]
    pub confidence_weight: Option<u32>,

    /// Enables the correlated flip against a reference series; must be in
    /// `[0, 1]`.
    #[serde(default)]
    pub correlation_probability: Option<f64>,

    /// Shift sampling mode.
    #[serde(default)]
    pub sampling: Sampling,

    /// Quantiles to report, each in `[0, 1]`.
    #[serde(default = "default_quantiles")]
    pub quantiles: Vec<f64>,
}

fn default_quantiles() -> Vec<f64> {
    DEFAULT_QUANTILES.to_vec()
}

impl ForecastConfig {
    /// Reasonable defaults: 100k trials, uniform sampling, no flips, the
    /// standard quantile ladder.
    pub fn sane_defaults() -> Self {
        Self {
            trials: 100_000,
            seed: None,
            start_period: None,
            expiration_period: None,
            confidence_weight: None,
            correlation_probability: None,
            sampling: Sampling::UniformOverDistinct,
            quantiles: default_quantiles(),
        }
    }

    /// Parsed `start_period`, if configured.
    pub fn start(&self) -> Result<Option<Period>> {
        parse_optional_period(self.start_period.as_deref(), "start_period")
    }

    /// Parsed `expiration_period`, if configured.
    pub fn expiration(&self) -> Result<Option<Period>> {
        parse_optional_period(self.expiration_period.as_deref(), "expiration_period")
    }

    /// Fail-fast validation. Every rejected field gets a diagnostic.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            bail!("trials must be > 0");
        }
        if let Some(p) = self.correlation_probability {
            if !(0.0..=1.0).contains(&p) || p.is_nan() {
                bail!("correlation_probability {p} outside [0, 1]");
            }
        }
        if self.quantiles.is_empty() {
            bail!("quantiles must not be empty");
        }
        for q in &self.quantiles {
            if !(0.0..=1.0).contains(q) || q.is_nan() {
                bail!("quantile {q} outside [0, 1]");
            }
        }
        let start = self.start()?;
        let expiration = self.expiration()?;
        if let (Some(s), Some(e)) = (start, expiration) {
            if s > e {
                bail!("start_period {s} is after expiration_period {e}");
            }
        }
        Ok(())
    }
}

fn parse_optional_period(raw: Option<&str>, field: &str) -> Result<Option<Period>> {
    match raw {
        None => Ok(None),
        Some(s) => {
            let p = Period::from_str(s)
                .map_err(|e| anyhow::anyhow!("{field}: {e}"))?;
            Ok(Some(p))
        }
    }
}

/// Load a config from a JSON or YAML file, chosen by extension
/// (`.json` / `.yaml` / `.yml`). The loaded config is validated.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<ForecastConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let config: ForecastConfig = match ext.as_str() {
        "json" => serde_json::from_str(&raw)
            .with_context(|| format!("invalid json config: {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid yaml config: {}", path.display()))?,
        other => bail!("unsupported config extension '{other}' (expected json/yaml/yml)"),
    };

    config.validate()?;
    Ok(config)
}
