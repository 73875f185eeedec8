//! Reporting configuration

use anyhow::{Result, ensure};
use commerce_common::constants::{DEFAULT_TOP_CATEGORIES, DEFAULT_WHISKER_FACTOR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `COMMERCE_REPORT_TOP_CATEGORIES=10`
pub const ENV_PREFIX: &str = "COMMERCE_REPORT";

/// Reporting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Categories listed in the top-categories view
    pub top_categories: usize,

    /// IQR multiplier for payment box-plot outliers
    pub whisker_factor: f64,

    /// Source dataset (CSV, optionally gzip-compressed)
    pub data_path: Option<PathBuf>,

    /// Skip malformed source rows instead of failing the load
    pub skip_invalid_rows: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_categories: DEFAULT_TOP_CATEGORIES,
            whisker_factor: DEFAULT_WHISKER_FACTOR,
            data_path: None,
            skip_invalid_rows: true,
        }
    }
}

impl ReportingConfig {
    /// Load configuration from file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(Self::environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides only
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot honour
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.whisker_factor.is_finite() && self.whisker_factor >= 0.0,
            "whisker_factor must be a non-negative number, got {}",
            self.whisker_factor
        );
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .try_parsing(true)
    }
}
