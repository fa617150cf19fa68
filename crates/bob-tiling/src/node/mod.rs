//! Container nodes: windows (leaves) and splits (ordered, owned children).

mod operations;
mod traversal;
mod types;

pub use types::*;
