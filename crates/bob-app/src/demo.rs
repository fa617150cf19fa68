//! The sample layout printed by `bob demo`.

use bob_common::{IdGenerator, Result};
use bob_tiling::{LayoutTree, NodeAttributes, Orientation};

/// Root split horizontally, the new window split vertically, then one more
/// window appended to the root split.
pub fn build() -> Result<LayoutTree> {
    let mut tree = LayoutTree::with_ids(
        NodeAttributes::new("Root Tab", "https://example.com").with_focus(true),
        IdGenerator::starting_at(1),
    );
    let root = tree.root_id();

    let docs = tree.insert_window(
        root,
        Orientation::Horizontal,
        NodeAttributes::new("Docs", "https://docs.rs"),
    )?;
    tree.insert_window(
        docs,
        Orientation::Vertical,
        NodeAttributes::new("Crates", "https://crates.io"),
    )?;
    tree.insert_window(
        root,
        Orientation::Horizontal,
        NodeAttributes::new("Search", "https://duckduckgo.com"),
    )?;
    Ok(tree)
}
