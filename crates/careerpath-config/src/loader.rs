use std::path::{Path, PathBuf};
use tracing::info;

use careerpath_core::{CareerError, Result};

use crate::schema::{CareerConfig, ConfigWarning};

/// Environment variable holding the skill store connection URI.
pub const DB_URI_ENV: &str = "CAREERPATH_DB_URI";
pub const CONFIG_PATH_ENV: &str = "CAREERPATH_CONFIG";
pub const LISTEN_ENV: &str = "CAREERPATH_LISTEN";
pub const LOG_LEVEL_ENV: &str = "CAREERPATH_LOG_LEVEL";

/// Loads the careerpath configuration.
///
/// Loading usually happens before logging is initialized, so non-fatal
/// issues are kept in [`warnings`](Self::warnings) for the caller to report.
pub struct ConfigLoader {
    config: CareerConfig,
    config_path: PathBuf,
    warnings: Vec<String>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > CAREERPATH_CONFIG env >
    /// ./careerpath.toml > ~/.careerpath/careerpath.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(p);
        }
        let local = PathBuf::from("careerpath.toml");
        if local.exists() {
            return local;
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".careerpath")
            .join("careerpath.toml")
    }

    /// Load the config from disk, falling back to defaults, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path);
        let mut warnings = Vec::new();
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            warnings.push(format!(
                "config file {} not found, using defaults",
                config_path.display()
            ));
            CareerConfig::default()
        };

        let config = Self::apply_overrides(config, |key| std::env::var(key).ok());
        warnings.extend(Self::check(&config)?.iter().map(ToString::to_string));

        Ok(Self {
            config,
            config_path,
            warnings,
        })
    }

    /// Parse TOML text into a config.
    pub fn parse(raw: &str, origin: &Path) -> Result<CareerConfig> {
        toml::from_str::<CareerConfig>(raw).map_err(|e| {
            CareerError::Config(format!("failed to parse {}: {}", origin.display(), e))
        })
    }

    /// Validate, failing on errors and returning the remaining warnings.
    pub fn check(config: &CareerConfig) -> Result<Vec<ConfigWarning>> {
        config.validate().map_err(CareerError::Config)
    }

    /// Get a copy of the loaded config.
    pub fn get(&self) -> CareerConfig {
        self.config.clone()
    }

    /// Non-fatal issues found while loading, in the order they were found.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Path the config was resolved from (may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply overrides from `lookup` (the process environment in [`load`](Self::load)).
    pub fn apply_overrides<F>(mut config: CareerConfig, lookup: F) -> CareerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(DB_URI_ENV) {
            config.store.uri = v;
        }
        if let Some(v) = lookup(LISTEN_ENV) {
            config.server.listen = v;
        }
        if let Some(v) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = v;
        }
        config
    }
}
