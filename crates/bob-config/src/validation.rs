//! Configuration validation. All problems are collected and reported
//! together.

use crate::schema::BobConfig;
use bob_common::ConfigError;

pub fn validate(config: &BobConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // 0 means "no id" at the C boundary
    if config.ids.start == 0 {
        errors.push("ids.start = 0 is out of range [1, u64::MAX]".into());
    }

    if config.logging.filter.trim().is_empty() {
        errors.push("logging.filter must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
