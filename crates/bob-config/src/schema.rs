//! Configuration schema types.
//!
//! All structs use `serde(default)` so missing fields fall back to defaults.

use bob_common::IdGenerator;
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BobConfig {
    pub ids: IdConfig,
    pub logging: LoggingConfig,
}

/// Where a new layout tree starts numbering its containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Wall-clock milliseconds at construction.
    #[default]
    Timestamp,
    /// `ids.start`, for reproducible ids.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    pub seed: SeedMode,
    /// First id when `seed = "fixed"` (must be at least 1).
    pub start: u64,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            seed: SeedMode::Timestamp,
            start: 1,
        }
    }
}

impl IdConfig {
    pub fn generator(&self) -> IdGenerator {
        match self.seed {
            SeedMode::Timestamp => IdGenerator::from_timestamp(),
            SeedMode::Fixed => IdGenerator::starting_at(self.start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bob=info".into(),
        }
    }
}
