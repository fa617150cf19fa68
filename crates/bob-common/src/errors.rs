use std::path::PathBuf;

use crate::id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    #[error("container not found: {0}")]
    NotFound(NodeId),

    #[error("cannot remove the root container {0}")]
    CannotRemoveRoot(NodeId),

    #[error("invalid tree state: {0}")]
    InvalidTreeState(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BobError {
    #[error(transparent)]
    Tiling(#[from] TilingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
