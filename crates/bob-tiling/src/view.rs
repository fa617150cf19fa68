//! Owned views of a layout for hosts: a flat snapshot, a nested view, and
//! a text dump for debugging.

use std::fmt;

use bob_common::NodeId;
use serde::{Deserialize, Serialize};

use crate::attrs::NodeAttributes;
use crate::node::{ContainerNode, Orientation};
use crate::tree::LayoutTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Window,
    Split,
}

/// One traversal entry, detached from the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub kind: ContainerKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttributes>,
}

impl From<&ContainerNode> for NodeSnapshot {
    fn from(node: &ContainerNode) -> Self {
        Self {
            id: node.id(),
            parent_id: node.parent_id(),
            kind: if node.is_window() {
                ContainerKind::Window
            } else {
                ContainerKind::Split
            },
            orientation: node.orientation(),
            attrs: node.attrs().cloned(),
        }
    }
}

/// Nested form of the layout: each node with its children inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutView {
    #[serde(flatten)]
    pub node: NodeSnapshot,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutView>,
}

impl From<&ContainerNode> for LayoutView {
    fn from(node: &ContainerNode) -> Self {
        Self {
            node: NodeSnapshot::from(node),
            children: node.children().iter().map(LayoutView::from).collect(),
        }
    }
}

impl LayoutTree {
    /// The traversal as owned records, in pre-order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.traverse().into_iter().map(NodeSnapshot::from).collect()
    }

    pub fn view(&self) -> LayoutView {
        LayoutView::from(self.root())
    }
}

fn write_node(
    f: &mut fmt::Formatter<'_>,
    node: &ContainerNode,
    prefix: &str,
    connector: &str,
) -> fmt::Result {
    match (node.attrs(), node.orientation()) {
        (Some(attrs), _) => writeln!(f, "{prefix}{connector}Window {} {:?}", node.id(), attrs.name)?,
        (None, Some(orientation)) => {
            let tag = match orientation {
                Orientation::Horizontal => "H",
                Orientation::Vertical => "V",
            };
            writeln!(f, "{prefix}{connector}Split[{tag}] {}", node.id())?;
        }
        (None, None) => writeln!(f, "{prefix}{connector}? {}", node.id())?,
    }

    let child_prefix = match connector {
        "" => prefix.to_string(),
        "└─ " => format!("{prefix}   "),
        _ => format!("{prefix}│  "),
    };
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let connector = if i + 1 == children.len() { "└─ " } else { "├─ " };
        write_node(f, child, &child_prefix, connector)?;
    }
    Ok(())
}

impl fmt::Display for LayoutTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root(), "", "")
    }
}
