//! The LayoutTree: one root container plus the id generator for its tab.

mod operations;
mod search;
mod types;


pub use types::*;
