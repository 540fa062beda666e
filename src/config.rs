use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::classify::DEFAULT_DELTA;
use crate::analysis::distance::DEFAULT_ALPHA;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags and
/// dataset files can override the parameters loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Temporal distance weight (COEXIST_ALPHA, default 1.0)
    pub alpha: f64,
    /// Incompatibility threshold (COEXIST_DELTA, default 5.0)
    pub delta: f64,
    /// Where to write the markdown report, if anywhere (COEXIST_REPORT_PATH)
    pub report_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            delta: DEFAULT_DELTA,
            report_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Unset or empty variables fall back to defaults; set but malformed
    /// values are errors rather than silently ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            alpha: read_param(&lookup, "COEXIST_ALPHA")?.unwrap_or(defaults.alpha),
            delta: read_param(&lookup, "COEXIST_DELTA")?.unwrap_or(defaults.delta),
            report_path: lookup("COEXIST_REPORT_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that alpha and delta are usable. Call again after applying
    /// overrides from flags or dataset files.
    pub fn validate(&self) -> Result<()> {
        validate_param("alpha", self.alpha)?;
        validate_param("delta", self.delta)?;
        Ok(())
    }
}

/// Parameters must be finite and non-negative.
pub fn validate_param(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("{name} must be a finite, non-negative number (got {value})");
    }
    Ok(())
}

fn read_param<F>(lookup: &F, key: &str) -> Result<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{key} is not a number: {raw:?}"))?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
