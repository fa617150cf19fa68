//! The LayoutTree type, its constructors and accessors.

use bob_common::{IdGenerator, NodeId};

use crate::attrs::NodeAttributes;
use crate::node::ContainerNode;

/// Owns the root container and the id generator for one layout (one tab).
#[derive(Debug, Clone)]
pub struct LayoutTree {
    pub(super) root: ContainerNode,
    pub(super) ids: IdGenerator,
}

impl LayoutTree {
    /// Create a tree holding a single window, with ids seeded from the clock.
    pub fn new(initial_attrs: NodeAttributes) -> Self {
        Self::with_ids(initial_attrs, IdGenerator::from_timestamp())
    }

    /// Create a tree whose root window takes the generator's next id.
    ///
    /// A generator that is already exhausted gives the root `u64::MAX`, its
    /// last id; later inserts into such a tree fail.
    pub fn with_ids(initial_attrs: NodeAttributes, mut ids: IdGenerator) -> Self {
        let root_id = ids.mint().unwrap_or(NodeId(u64::MAX));
        let root = ContainerNode::window(root_id, None, initial_attrs);
        Self { root, ids }
    }

    pub fn root(&self) -> &ContainerNode {
        &self.root
    }

    pub fn root_id(&self) -> NodeId {
        self.root.id()
    }

    /// Total number of containers, windows and splits alike.
    pub fn len(&self) -> usize {
        self.root.node_count()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn window_count(&self) -> usize {
        self.root.flatten().iter().filter(|n| n.is_window()).count()
    }

    /// Window ids in presentation order.
    pub fn window_ids(&self) -> Vec<NodeId> {
        self.root.window_ids()
    }

    /// The id the next inserted container will receive, `None` once the id
    /// space is used up.
    pub fn next_id(&self) -> Option<NodeId> {
        self.ids.peek()
    }
}
