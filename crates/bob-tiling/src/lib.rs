//! Tiling layout tree: windows and splits, id-addressed structural edits,
//! and flattened traversal for hosts that render the layout.

pub mod attrs;
pub mod commands;
pub mod node;
pub mod tree;
pub mod view;

pub use attrs::NodeAttributes;
pub use bob_common::{IdGenerator, NodeId, TilingError};
pub use commands::{CommandOutcome, TilingCommand};
pub use node::{ContainerNode, NodeKind, Orientation};
pub use tree::LayoutTree;
pub use view::{ContainerKind, LayoutView, NodeSnapshot};
