use std::ffi::{CStr, CString};
use std::ptr;

use super::*;
use bob_tiling::Orientation;

struct OwnedAttrs {
    _name: CString,
    _resource: CString,
    raw: CNodeAttributes,
}

fn attrs(name: &str, resource: &str) -> OwnedAttrs {
    let name = CString::new(name).unwrap();
    let resource = CString::new(resource).unwrap();
    let raw = CNodeAttributes {
        name: name.as_ptr(),
        resource: resource.as_ptr(),
        width: 640,
        height: 480,
        halted: false,
        focus: true,
    };
    OwnedAttrs {
        _name: name,
        _resource: resource,
        raw,
    }
}

fn seeded(name: &str) -> *mut LayoutTreeHandle {
    let root = attrs(name, "https://root.example");
    let tree = unsafe { layout_tree_new_with_seed(&root.raw, 1) };
    assert!(!tree.is_null());
    tree
}

fn message(result: &AddWindowResult) -> String {
    assert!(!result.error_message.is_null());
    unsafe { CStr::from_ptr(result.error_message) }
        .to_str()
        .unwrap()
        .to_string()
}

fn traverse(tree: *const LayoutTreeHandle) -> serde_json::Value {
    unsafe {
        let raw = layout_tree_traverse_json(tree);
        assert!(!raw.is_null());
        let json = CStr::from_ptr(raw).to_str().unwrap().to_string();
        layout_tree_string_free(raw);
        serde_json::from_str(&json).unwrap()
    }
}

#[test]
fn direction_mapping() {
    assert_eq!(direction_from_abi(1), Orientation::Horizontal);
    assert_eq!(direction_from_abi(0), Orientation::Vertical);
    assert_eq!(direction_from_abi(2), Orientation::Vertical);
    assert_eq!(direction_from_abi(u32::MAX), Orientation::Vertical);
}

#[test]
fn new_with_null_attrs_is_null() {
    unsafe {
        assert!(layout_tree_new(ptr::null()).is_null());
        assert!(layout_tree_new_with_seed(ptr::null(), 1).is_null());
    }
}

#[test]
fn new_tree_has_one_node() {
    let root = attrs("root", "https://root.example");
    unsafe {
        let tree = layout_tree_new(&root.raw);
        assert!(!tree.is_null());
        assert_eq!(layout_tree_node_count(tree), 1);
        assert!(layout_tree_root_id(tree) > 0);
        layout_tree_free(tree);
    }
}

#[test]
fn add_window_splits_root() {
    let tree = seeded("root");
    let new = attrs("second", "https://second.example");
    unsafe {
        let result = layout_tree_add_window(tree, 1, 1, &new.raw);
        assert!(result.success);
        assert_eq!(result.window_id, 3);
        assert!(result.error_message.is_null());
        assert_eq!(layout_tree_node_count(tree), 3);
        layout_tree_free(tree);
    }
}

#[test]
fn add_window_direction_reaches_tree() {
    let tree = seeded("root");
    let new = attrs("second", "");
    unsafe {
        layout_tree_add_window(tree, 1, 7, &new.raw);
    }
    let json = traverse(tree);
    assert_eq!(json[0]["orientation"], "vertical");
    unsafe { layout_tree_free(tree) };
}

#[test]
fn add_window_unknown_parent_fails() {
    let tree = seeded("root");
    let new = attrs("x", "");
    unsafe {
        let result = layout_tree_add_window(tree, 9999, 1, &new.raw);
        assert!(!result.success);
        assert_eq!(result.window_id, 0);
        assert_eq!(message(&result), "container not found");
        assert_eq!(layout_tree_node_count(tree), 1);
        layout_tree_free(tree);
    }
}

#[test]
fn add_window_null_arguments() {
    let new = attrs("x", "");
    unsafe {
        let result = layout_tree_add_window(ptr::null_mut(), 1, 1, &new.raw);
        assert!(!result.success);
        assert_eq!(message(&result), "LayoutTree is null");

        let tree = seeded("root");
        let result = layout_tree_add_window(tree, 1, 1, ptr::null());
        assert!(!result.success);
        assert_eq!(message(&result), "attributes are null");
        layout_tree_free(tree);
    }
}

#[test]
fn remove_window_collapses_and_refuses_root() {
    let tree = seeded("root");
    let new = attrs("second", "");
    unsafe {
        let added = layout_tree_add_window(tree, 1, 1, &new.raw);
        assert!(added.success);

        assert!(!layout_tree_remove_window(tree, 1));
        assert!(!layout_tree_remove_window(tree, 4242));
        assert!(layout_tree_remove_window(tree, added.window_id));

        // Split 1 collapsed into the former root content, id 2
        assert_eq!(layout_tree_node_count(tree), 1);
        assert_eq!(layout_tree_root_id(tree), 2);
        assert!(!layout_tree_remove_window(ptr::null_mut(), 2));
        layout_tree_free(tree);
    }
}

#[test]
fn update_attributes_round_trip() {
    let tree = seeded("root");
    let renamed = attrs("renamed", "https://renamed.example");
    unsafe {
        assert!(layout_tree_update_attributes(tree, 1, &renamed.raw));
        assert!(!layout_tree_update_attributes(tree, 99, &renamed.raw));
        assert!(!layout_tree_update_attributes(tree, 1, ptr::null()));
    }
    let json = traverse(tree);
    assert_eq!(json[0]["attrs"]["name"], "renamed");
    assert_eq!(json[0]["attrs"]["resource"], "https://renamed.example");
    assert_eq!(json[0]["attrs"]["width"], 640);
    assert_eq!(json[0]["attrs"]["focus"], true);
    unsafe { layout_tree_free(tree) };
}

#[test]
fn traverse_json_is_preorder() {
    let tree = seeded("root");
    let a = attrs("a", "");
    let b = attrs("b", "");
    unsafe {
        let first = layout_tree_add_window(tree, 1, 1, &a.raw);
        layout_tree_add_window(tree, first.window_id, 0, &b.raw);
    }
    let json = traverse(tree);
    let ids: Vec<u64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(json[2]["kind"], "split");
    assert_eq!(json[3]["parent_id"], 3);
    unsafe { layout_tree_free(tree) };
}

#[test]
fn null_handles_are_harmless() {
    unsafe {
        layout_tree_free(ptr::null_mut());
        layout_tree_string_free(ptr::null_mut());
        assert_eq!(layout_tree_root_id(ptr::null()), 0);
        assert_eq!(layout_tree_node_count(ptr::null()), 0);
        assert!(layout_tree_traverse_json(ptr::null()).is_null());
    }
}

#[test]
fn null_strings_read_as_empty() {
    let raw = CNodeAttributes {
        name: ptr::null(),
        resource: ptr::null(),
        width: 0,
        height: 0,
        halted: true,
        focus: false,
    };
    unsafe {
        let tree = layout_tree_new_with_seed(&raw, 10);
        let json = traverse(tree);
        assert_eq!(json[0]["id"], 10);
        assert_eq!(json[0]["attrs"]["name"], "");
        assert_eq!(json[0]["attrs"]["halted"], true);
        layout_tree_free(tree);
    }
}

#[test]
fn init_logging_only_installs_once() {
    let filter = CString::new("bob=debug").unwrap();
    unsafe {
        let _ = layout_tree_init_logging(filter.as_ptr());
        assert!(!layout_tree_init_logging(ptr::null()));
    }
}

#[test]
fn zero_seed_never_yields_the_null_id() {
    let root = attrs("root", "");
    unsafe {
        let tree = layout_tree_new_with_seed(&root.raw, 0);
        assert_eq!(layout_tree_root_id(tree), 1);
        layout_tree_free(tree);
    }
}

#[test]
fn add_window_reports_exhausted_ids() {
    let root = attrs("root", "");
    let new = attrs("x", "");
    unsafe {
        let tree = layout_tree_new_with_seed(&root.raw, u64::MAX - 1);
        let result = layout_tree_add_window(tree, u64::MAX - 1, 1, &new.raw);
        assert!(!result.success);
        assert_eq!(result.window_id, 0);
        assert_eq!(message(&result), "invalid tree state");
        assert_eq!(layout_tree_node_count(tree), 1);
        layout_tree_free(tree);
    }
}

#[test]
fn default_logging_filter_shows_core_events() {
    assert_eq!(DEFAULT_FFI_FILTER, "bob=debug");
}
