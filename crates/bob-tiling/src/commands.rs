use bob_common::NodeId;
use serde::{Deserialize, Serialize};

use crate::attrs::NodeAttributes;
use crate::node::Orientation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TilingCommand {
    Insert {
        parent: NodeId,
        orientation: Orientation,
        #[serde(default)]
        attrs: NodeAttributes,
    },
    Remove {
        window: NodeId,
    },
    Update {
        window: NodeId,
        attrs: NodeAttributes,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Inserted(NodeId),
    Removed,
    Updated,
}
