//! Insert, remove, update and command dispatch on the LayoutTree.

use bob_common::{NodeId, TilingError};
use tracing::debug;

use super::LayoutTree;
use crate::attrs::NodeAttributes;
use crate::commands::{CommandOutcome, TilingCommand};
use crate::node::{ContainerNode, NodeKind, Orientation};

impl LayoutTree {
    /// Insert a window next to `parent_id`.
    ///
    /// A window target becomes a split of the same id: its previous content
    /// moves to a freshly minted first child and the new window follows it.
    /// A split target gets the new window appended as its last child.
    /// Returns the id of the new window. When the id space cannot cover the
    /// insert the tree is left untouched.
    pub fn insert_window(
        &mut self,
        parent_id: NodeId,
        orientation: Orientation,
        attrs: NodeAttributes,
    ) -> Result<NodeId, TilingError> {
        let target = self
            .root
            .find_mut(parent_id)
            .ok_or(TilingError::NotFound(parent_id))?;

        let needed = if target.is_window() { 2 } else { 1 };
        if !self.ids.can_mint(needed) {
            return Err(ids_exhausted());
        }

        match target.kind {
            NodeKind::Window(_) => {
                let former_id = self.ids.mint().ok_or_else(ids_exhausted)?;
                let new_id = self.ids.mint().ok_or_else(ids_exhausted)?;
                target.convert_to_split(orientation, former_id, new_id, attrs)?;
                debug!(
                    parent = %parent_id,
                    former = %former_id,
                    window = %new_id,
                    ?orientation,
                    "split window"
                );
                Ok(new_id)
            }
            NodeKind::Split { .. } => {
                let new_id = self.ids.mint().ok_or_else(ids_exhausted)?;
                target.add_child(ContainerNode::window(new_id, Some(parent_id), attrs))?;
                debug!(parent = %parent_id, window = %new_id, "appended window to split");
                Ok(new_id)
            }
        }
    }

    /// Remove `window_id` (and its subtree) and collapse any split left
    /// holding a single child.
    pub fn remove_window(&mut self, window_id: NodeId) -> Result<(), TilingError> {
        if window_id == self.root.id() {
            return Err(TilingError::CannotRemoveRoot(window_id));
        }

        let root_before = self.root.id();
        let removed = self
            .root
            .remove_descendant(window_id)?
            .ok_or(TilingError::NotFound(window_id))?;

        debug!(
            window = %window_id,
            subtree = removed.node_count(),
            "removed container"
        );
        if self.root.id() != root_before {
            debug!(old = %root_before, new = %self.root.id(), "root split collapsed");
        }
        Ok(())
    }

    /// Replace the attributes of window `window_id` wholesale. Splits carry
    /// no attributes and are reported as not found.
    pub fn update_attributes(
        &mut self,
        window_id: NodeId,
        attrs: NodeAttributes,
    ) -> Result<(), TilingError> {
        match self.root.find_mut(window_id).map(|node| &mut node.kind) {
            Some(NodeKind::Window(current)) => {
                *current = attrs;
                debug!(window = %window_id, "updated attributes");
                Ok(())
            }
            _ => Err(TilingError::NotFound(window_id)),
        }
    }

    /// Dispatch a [`TilingCommand`] to the matching operation.
    pub fn execute(&mut self, command: TilingCommand) -> Result<CommandOutcome, TilingError> {
        match command {
            TilingCommand::Insert {
                parent,
                orientation,
                attrs,
            } => self
                .insert_window(parent, orientation, attrs)
                .map(CommandOutcome::Inserted),
            TilingCommand::Remove { window } => {
                self.remove_window(window).map(|()| CommandOutcome::Removed)
            }
            TilingCommand::Update { window, attrs } => self
                .update_attributes(window, attrs)
                .map(|()| CommandOutcome::Updated),
        }
    }
}

fn ids_exhausted() -> TilingError {
    TilingError::InvalidTreeState("id space exhausted".into())
}
