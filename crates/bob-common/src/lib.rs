pub mod errors;
pub mod id;

pub use errors::{BobError, ConfigError, TilingError};
pub use id::{IdGenerator, NodeId};

pub type Result<T> = std::result::Result<T, BobError>;
