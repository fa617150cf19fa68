//! Structural edits on a container subtree: add, remove, convert, collapse.

use bob_common::{NodeId, TilingError};
use tracing::trace;

use super::{ContainerNode, NodeKind, Orientation};
use crate::attrs::NodeAttributes;

impl ContainerNode {
    /// Append `child` as the last child of this split, re-parenting it.
    /// Windows cannot hold children.
    pub fn add_child(&mut self, mut child: ContainerNode) -> Result<(), TilingError> {
        let id = self.id;
        match &mut self.kind {
            NodeKind::Window(_) => Err(TilingError::InvalidTreeState(format!(
                "window {id} cannot hold child {}",
                child.id
            ))),
            NodeKind::Split { children, .. } => {
                child.parent_id = Some(id);
                children.push(child);
                Ok(())
            }
        }
    }

    /// Detach the direct child with `child_id`. No collapse is performed.
    pub fn remove_child(&mut self, child_id: NodeId) -> Option<ContainerNode> {
        let children = self.children_mut()?;
        let index = children.iter().position(|c| c.id == child_id)?;
        Some(children.remove(index))
    }

    /// Turn this window into a split of the same identity. The window's
    /// previous attributes move to a new first child `former_id`, and a
    /// second child `new_id` carries `attrs`.
    pub(crate) fn convert_to_split(
        &mut self,
        orientation: Orientation,
        former_id: NodeId,
        new_id: NodeId,
        attrs: NodeAttributes,
    ) -> Result<(), TilingError> {
        let NodeKind::Window(previous) = &mut self.kind else {
            return Err(TilingError::InvalidTreeState(format!(
                "{} is already a split",
                self.id
            )));
        };
        let previous = std::mem::take(previous);
        let children = vec![
            ContainerNode::window(former_id, Some(self.id), previous),
            ContainerNode::window(new_id, Some(self.id), attrs),
        ];
        *self = ContainerNode::split(self.id, self.parent_id, orientation, children);
        Ok(())
    }

    /// Replace a split holding a single child by that child. The promoted
    /// node keeps its own identity and takes over this node's parent link.
    pub(crate) fn collapse_if_trivial(&mut self) -> bool {
        let NodeKind::Split { children, .. } = &mut self.kind else {
            return false;
        };
        debug_assert!(!children.is_empty(), "split {} has no children", self.id);
        if children.len() != 1 {
            return false;
        }
        let mut survivor = children.remove(0);
        trace!(split = %self.id, survivor = %survivor.id, "collapsing single-child split");
        survivor.parent_id = self.parent_id;
        *self = survivor;
        true
    }

    /// Remove the descendant `target` (with its subtree) and collapse every
    /// split on the way back up that is left with one child.
    ///
    /// Returns `Ok(None)` when `target` is not below this node. Fails
    /// without mutating if the parent of `target` is a split that already
    /// violates the two-children rule.
    pub(crate) fn remove_descendant(
        &mut self,
        target: NodeId,
    ) -> Result<Option<ContainerNode>, TilingError> {
        let NodeKind::Split { children, .. } = &mut self.kind else {
            return Ok(None);
        };

        let removed = if let Some(index) = children.iter().position(|c| c.id == target) {
            if children.len() < 2 {
                return Err(TilingError::InvalidTreeState(format!(
                    "split {} has {} child(ren)",
                    self.id,
                    children.len()
                )));
            }
            Some(children.remove(index))
        } else {
            let mut found = None;
            for child in children.iter_mut() {
                if let Some(node) = child.remove_descendant(target)? {
                    found = Some(node);
                    break;
                }
            }
            found
        };

        if removed.is_some() {
            self.collapse_if_trivial();
        }
        Ok(removed)
    }
}
