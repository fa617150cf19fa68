//! bobthetiler configuration.
//!
//! TOML-based, with serde defaults on every section so partial files work.
//!
//! ```rust,no_run
//! use bob_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BobConfig, IdConfig, LoggingConfig, SeedMode};

use bob_common::ConfigError;

/// Load `config.toml` from the platform config directory (or
/// `$BOB_CONFIG`), creating a documented default file on first run.
/// The loader validates whatever it reads.
pub fn load_config() -> Result<BobConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BobConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
