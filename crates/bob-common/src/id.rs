use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identity of a container in a layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Monotonic id source owned by a single layout tree.
///
/// The first minted id is the seed itself; every later id is the previous
/// one plus one. Id 0 is never handed out, and once `u64::MAX` has been
/// minted the generator is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    /// A seed of 0 starts at 1.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            next: Some(seed.max(1)),
        }
    }

    /// Seed from wall-clock milliseconds since the Unix epoch.
    pub fn from_timestamp() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(1);
        Self::starting_at(millis.max(1))
    }

    /// Hand out the next id, or `None` when the id space is used up.
    pub fn mint(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(NodeId(id))
    }

    /// The id the next call to [`mint`](Self::mint) will return.
    pub fn peek(&self) -> Option<NodeId> {
        self.next.map(NodeId)
    }

    /// Whether `count` more ids can be minted.
    pub fn can_mint(&self, count: u64) -> bool {
        match (self.next, count.checked_sub(1)) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(next), Some(extra)) => next.checked_add(extra).is_some(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_timestamp()
    }
}
