//! Lookup and traversal over the whole tree.

use bob_common::{NodeId, TilingError};

use super::LayoutTree;
use crate::node::ContainerNode;

impl LayoutTree {
    /// Resolve `id` anywhere in the tree. Ids held by a host must be
    /// re-resolved through here after every mutation.
    pub fn find_container(&self, id: NodeId) -> Result<&ContainerNode, TilingError> {
        self.root.find(id).ok_or(TilingError::NotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.root.contains(id)
    }

    /// Pre-order listing of every container, root first.
    pub fn traverse(&self) -> Vec<&ContainerNode> {
        self.root.flatten()
    }
}
