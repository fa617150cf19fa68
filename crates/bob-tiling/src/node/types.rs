//! Core types for the container tree: Orientation, NodeKind and ContainerNode.

use bob_common::NodeId;
use serde::{Deserialize, Serialize};

use crate::attrs::NodeAttributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Window(NodeAttributes),
    Split {
        orientation: Orientation,
        children: Vec<ContainerNode>,
    },
}

/// A node of the layout tree. Windows are leaves; splits exclusively own
/// their children in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub(crate) id: NodeId,
    pub(crate) parent_id: Option<NodeId>,
    pub(crate) kind: NodeKind,
}

impl ContainerNode {
    pub fn window(id: NodeId, parent_id: Option<NodeId>, attrs: NodeAttributes) -> Self {
        Self {
            id,
            parent_id,
            kind: NodeKind::Window(attrs),
        }
    }

    pub fn split(
        id: NodeId,
        parent_id: Option<NodeId>,
        orientation: Orientation,
        children: Vec<ContainerNode>,
    ) -> Self {
        Self {
            id,
            parent_id,
            kind: NodeKind::Split {
                orientation,
                children,
            },
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_window(&self) -> bool {
        matches!(self.kind, NodeKind::Window(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self.kind, NodeKind::Split { .. })
    }

    pub fn attrs(&self) -> Option<&NodeAttributes> {
        match &self.kind {
            NodeKind::Window(attrs) => Some(attrs),
            NodeKind::Split { .. } => None,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match &self.kind {
            NodeKind::Window(_) => None,
            NodeKind::Split { orientation, .. } => Some(*orientation),
        }
    }

    pub fn children(&self) -> &[ContainerNode] {
        match &self.kind {
            NodeKind::Window(_) => &[],
            NodeKind::Split { children, .. } => children,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<ContainerNode>> {
        match &mut self.kind {
            NodeKind::Window(_) => None,
            NodeKind::Split { children, .. } => Some(children),
        }
    }
}
