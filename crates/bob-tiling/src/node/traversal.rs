//! Read-only walks over a container subtree.

use bob_common::NodeId;

use super::ContainerNode;

impl ContainerNode {
    /// Pre-order flattening: this node, then each child's subtree left to right.
    pub fn flatten(&self) -> Vec<&ContainerNode> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a ContainerNode>) {
        out.push(self);
        for child in self.children() {
            child.flatten_into(out);
        }
    }

    pub fn find(&self, id: NodeId) -> Option<&ContainerNode> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut ContainerNode> {
        if self.id == id {
            return Some(self);
        }
        self.children_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(ContainerNode::node_count).sum::<usize>()
    }

    /// Collect window ids in presentation (depth-first, left-to-right) order.
    pub fn window_ids(&self) -> Vec<NodeId> {
        self.flatten()
            .into_iter()
            .filter(|node| node.is_window())
            .map(ContainerNode::id)
            .collect()
    }
}
