use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::error::AppError;
use crate::feed::portfolio::{DEFAULT_ALERT_COUNT, DEFAULT_PORTFOLIO_DAYS};
use crate::feed::DEFAULT_ARTICLE_COUNT;
use crate::index_series::DEFAULT_INDEX_POINTS;
use crate::intraday::{DEFAULT_INTERVAL_MINUTES, SESSION_MINUTES};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const SEED_ENV: &str = "FINNEWS_SEED";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible feeds; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub interval_minutes: u32,
    pub index_points: usize,
    pub article_count: usize,
    pub alert_count: usize,
    pub portfolio_days: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            index_points: DEFAULT_INDEX_POINTS,
            article_count: DEFAULT_ARTICLE_COUNT,
            alert_count: DEFAULT_ALERT_COUNT,
            portfolio_days: DEFAULT_PORTFOLIO_DAYS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.interval_minutes == 0 {
            return Err(AppError::Config(
                "generator.interval_minutes must be > 0".to_string(),
            ));
        }
        if self.interval_minutes > SESSION_MINUTES {
            return Err(AppError::Config(format!(
                "generator.interval_minutes must be <= {} (one session)",
                SESSION_MINUTES
            )));
        }
        if self.index_points == 0 {
            return Err(AppError::Config(
                "generator.index_points must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse a seed override such as `FINNEWS_SEED=42`.
pub fn parse_seed(s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .with_context(|| format!("invalid seed '{}': expected an unsigned integer", s))
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("failed to parse config toml")?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Load from `path` (or the default path), falling back to built-in
    /// defaults when the default file is absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = match path {
            Some(path) => {
                let config_str = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::from_toml(&config_str)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    let config_str = std::fs::read_to_string(default_path)
                        .with_context(|| format!("failed to read {}", default_path.display()))?;
                    Self::from_toml(&config_str)
                        .with_context(|| format!("invalid config {}", default_path.display()))?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(raw) = std::env::var(SEED_ENV) {
            config.generator.seed =
                Some(parse_seed(&raw).with_context(|| format!("{} is invalid", SEED_ENV))?);
        }

        Ok(config)
    }
}
