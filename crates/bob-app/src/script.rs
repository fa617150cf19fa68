//! Replay scripts: a root window plus a list of tiling commands in TOML.
//!
//! ```toml
//! [root]
//! name = "Root Tab"
//! resource = "https://example.com"
//!
//! [[step]]
//! op = "insert"
//! parent = 1
//! orientation = "horizontal"
//! attrs = { name = "Docs" }
//! ```

use std::path::Path;

use bob_common::{BobError, Result};
use bob_tiling::{CommandOutcome, LayoutTree, NodeAttributes, TilingCommand};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cli::Format;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub root: NodeAttributes,
    pub step: Vec<TilingCommand>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub failed: usize,
}

pub fn load_script(path: &Path) -> Result<Script> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| BobError::Other(format!("failed to parse script {}: {e}", path.display())))
}

/// Apply every step in order. Failed steps are logged and skipped; a
/// failed step never changes the tree.
pub fn replay(tree: &mut LayoutTree, steps: Vec<TilingCommand>) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (index, step) in steps.into_iter().enumerate() {
        match tree.execute(step) {
            Ok(CommandOutcome::Inserted(id)) => {
                debug!(step = index, window = %id, "inserted");
                report.applied += 1;
            }
            Ok(outcome) => {
                debug!(step = index, ?outcome, "applied");
                report.applied += 1;
            }
            Err(e) => {
                warn!(step = index, "step failed: {e}");
                report.failed += 1;
            }
        }
    }
    report
}

pub fn render(tree: &LayoutTree, format: Format) -> Result<String> {
    match format {
        Format::Tree => Ok(tree.to_string()),
        Format::Json => serde_json::to_string_pretty(&tree.view())
            .map_err(|e| BobError::Other(format!("failed to serialize layout: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bob_common::{IdGenerator, NodeId};

    const SCRIPT: &str = r#"
[root]
name = "Root Tab"
resource = "https://example.com"

[[step]]
op = "insert"
parent = 1
orientation = "horizontal"
attrs = { name = "Docs", resource = "https://docs.rs" }

[[step]]
op = "insert"
parent = 9999
orientation = "vertical"

[[step]]
op = "update"
window = 3
attrs = { name = "Crates", resource = "https://crates.io", width = 800 }

[[step]]
op = "remove"
window = 1
"#;

    fn write_script(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, SCRIPT).unwrap();
        path
    }

    #[test]
    fn load_and_replay() {
        let dir = tempfile::tempdir().unwrap();
        let script = load_script(&write_script(&dir)).unwrap();
        assert_eq!(script.root.name, "Root Tab");
        assert_eq!(script.step.len(), 4);

        let mut tree = LayoutTree::with_ids(script.root, IdGenerator::starting_at(1));
        let report = replay(&mut tree, script.step);

        // Unknown parent and root removal fail, the rest apply
        assert_eq!(report, ReplayReport { applied: 2, failed: 2 });
        let updated = tree.find_container(NodeId(3)).unwrap().attrs().unwrap();
        assert_eq!(updated.name, "Crates");
        assert_eq!(updated.width, 800);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn load_missing_script_is_io_error() {
        let err = load_script(Path::new("/tmp/definitely_missing_bob_script.toml")).unwrap_err();
        assert!(matches!(err, BobError::Io(_)));
    }

    #[test]
    fn load_malformed_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[step]]\nop = \"explode\"\n").unwrap();
        let err = load_script(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse script"));
    }

    #[test]
    fn render_json_is_nested() {
        let mut tree = LayoutTree::with_ids(NodeAttributes::new("a", ""), IdGenerator::starting_at(1));
        tree.insert_window(NodeId(1), bob_tiling::Orientation::Vertical, NodeAttributes::new("b", ""))
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&tree, Format::Json).unwrap()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["children"][1]["attrs"]["name"], "b");
    }

    #[test]
    fn render_tree_uses_display() {
        let tree = LayoutTree::with_ids(NodeAttributes::new("solo", ""), IdGenerator::starting_at(7));
        assert_eq!(render(&tree, Format::Tree).unwrap(), "Window node-7 \"solo\"\n");
    }
}
