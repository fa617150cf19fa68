use serde::{Deserialize, Serialize};

/// Display metadata carried by a window container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAttributes {
    pub name: String,
    /// URL or other locator of the content shown in the window.
    pub resource: String,
    pub width: i64,
    pub height: i64,
    pub halted: bool,
    pub focus: bool,
}

impl NodeAttributes {
    pub fn new(name: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_halted(mut self, halted: bool) -> Self {
        self.halted = halted;
        self
    }
}
