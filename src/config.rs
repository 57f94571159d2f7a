//! Runtime configuration, sourced from `BTU_*` environment variables.
//!
//! Mirrors `Settings(BaseSettings)` in `original_source/app/core/config.py`,
//! which uses `pydantic_settings` with `env_prefix = "BTU_"`. There is no
//! settings crate in the reference dependency stack this project starts
//! from, so environment lookups are done directly with `std::env`, the way
//! the reference CLI reads its own `LZ4_CLEVEL` / `LZ4_NBWORKERS` overrides.

use std::env;

use crate::level::CompressionLevel;

const ENV_PREFIX: &str = "BTU_";

/// Application-wide settings, all overridable via `BTU_<FIELD>` env vars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub debug: bool,
    pub cors_origins: Vec<String>,
    /// Default compressor strategy for conversions that don't specify one.
    pub compression_level: CompressionLevel,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app_name: "Broadlink to UFO-R11 Converter".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            debug: false,
            cors_origins: vec![
                "http://localhost:3000".to_owned(),
                "http://127.0.0.1:3000".to_owned(),
            ],
            compression_level: CompressionLevel::Balanced,
        }
    }
}

impl Config {
    /// Build a [`Config`], overriding each field with its `BTU_*` variable
    /// when present. Unset or unparsable variables fall back to the default
    /// silently, matching `pydantic_settings`'s `extra = "ignore"` posture.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            app_name: env_var("APP_NAME").unwrap_or(defaults.app_name),
            version: env_var("VERSION").unwrap_or(defaults.version),
            debug: env_var("DEBUG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debug),
            cors_origins: env_var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_owned()).collect())
                .unwrap_or(defaults.cors_origins),
            compression_level: env_var("COMPRESSION_LEVEL")
                .and_then(|v| v.parse::<u8>().ok())
                .map(CompressionLevel::from_u8)
                .unwrap_or(defaults.compression_level),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}{name}")).ok()
}
