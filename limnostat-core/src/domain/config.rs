use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use super::alternative::Alternative;
use crate::error::Result;

pub const DEFAULT_ALPHA: f64 = 0.05;

/// Environment prefix for overrides, e.g. `LIMNOSTAT_DEFAULT_ALPHA=0.01`.
pub const ENV_PREFIX: &str = "LIMNOSTAT";

/// Defaults applied to requests that leave options unspecified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct EngineConfig {
    #[validate(range(exclusive_min = 0.0, exclusive_max = 1.0))]
    pub default_alpha: f64,

    pub default_alternative: Alternative,

    /// Reference mean for one-sample requests without `mu0`.
    pub default_mu0: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_alpha: DEFAULT_ALPHA,
            default_alternative: Alternative::TwoSided,
            default_mu0: 0.0,
        }
    }
}

impl EngineConfig {
    /// Layer an optional config file and `LIMNOSTAT_*` environment variables over
    /// the built-in defaults, then validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = EngineConfig::default();

        let mut builder = ConfigLoader::builder()
            .set_default("default_alpha", defaults.default_alpha)?
            .set_default("default_alternative", defaults.default_alternative.as_str())?
            .set_default("default_mu0", defaults.default_mu0)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let loaded: EngineConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn with_default_alpha(mut self, alpha: f64) -> Self {
        self.default_alpha = alpha;
        self
    }

    pub fn with_default_alternative(mut self, alternative: Alternative) -> Self {
        self.default_alternative = alternative;
        self
    }

    pub fn with_default_mu0(mut self, mu0: f64) -> Self {
        self.default_mu0 = mu0;
        self
    }
}
