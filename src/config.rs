//! Configuration management for the catalog engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Page size used when a request omits `size` or sends a value <= 0
    pub default_page_size: usize,
    /// Longest parent chain accepted before the hierarchy is reported as corrupt
    pub max_category_depth: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    /// JSON file loaded into the in-memory catalog at startup
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (CATALOG_<SECTION>__<KEY>)
            .add_source(environment())
            // Override seed path from SEED_FILE env var if present
            .set_override_option("seed.path", env::var("SEED_FILE").ok())?
            .build()?;

        config.try_deserialize()
    }
}

/// Environment source. Sections and keys are split on a double underscore so
/// that keys containing `_` survive, e.g. `CATALOG_CATALOG__DEFAULT_PAGE_SIZE`.
fn environment() -> Environment {
    Environment::with_prefix("CATALOG")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_category_depth: 64,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(raw: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_file() {
        let config = from_toml(include_str!("../config/default.toml"));
        assert_eq!(config.catalog.default_page_size, 10);
        assert_eq!(config.catalog.max_category_depth, 64);
        assert_eq!(config.seed.path.as_deref(), Some("config/seed.json"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_environment_overrides_multi_word_keys() {
        let vars: config::Map<String, String> = [
            ("CATALOG_CATALOG__DEFAULT_PAGE_SIZE", "3"),
            ("CATALOG_CATALOG__MAX_CATEGORY_DEPTH", "8"),
            ("CATALOG_LOGGING__LEVEL", "debug"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(include_str!("../config/default.toml"), FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.default_page_size, 3);
        assert_eq!(config.catalog.max_category_depth, 8);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = from_toml("[logging]\nlevel = \"debug\"\nformat = \"json\"\n");
        assert_eq!(config.catalog.default_page_size, 10);
        assert!(config.seed.path.is_none());
        assert_eq!(config.logging.level, "debug");
    }
}
