//! C ABI over [`LayoutTree`] for hosts that cannot link the Rust types.
//!
//! The host owns an opaque [`LayoutTreeHandle`] and drives it with plain
//! integers, booleans and NUL-terminated strings. A handle is not
//! synchronised: every call against one handle must be serialised by the
//! host. See `include/layout_tree.h` for the C declarations.

mod convert;

#[cfg(test)]
mod tests;

use std::ffi::{c_char, CString};
use std::ptr;

use bob_common::{IdGenerator, NodeId};
use bob_tiling::LayoutTree;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use convert::{direction_from_abi, CNodeAttributes};
use convert::{attrs_from_c, c_str_to_string, error_message};

/// Filter used by [`layout_tree_init_logging`] when the host passes none.
pub const DEFAULT_FFI_FILTER: &str = "bob=debug";

/// Opaque tree handle handed across the boundary.
pub struct LayoutTreeHandle {
    tree: LayoutTree,
}

#[repr(C)]
pub struct AddWindowResult {
    pub success: bool,
    /// Valid only when `success` is true, 0 otherwise.
    pub window_id: u64,
    /// Static NUL-terminated reason; null on success. Never freed by the host.
    pub error_message: *const c_char,
}

impl AddWindowResult {
    fn ok(window_id: NodeId) -> Self {
        Self {
            success: true,
            window_id: window_id.get(),
            error_message: ptr::null(),
        }
    }

    fn failed(message: &'static std::ffi::CStr) -> Self {
        Self {
            success: false,
            window_id: 0,
            error_message: message.as_ptr(),
        }
    }
}

fn into_handle(tree: LayoutTree) -> *mut LayoutTreeHandle {
    Box::into_raw(Box::new(LayoutTreeHandle { tree }))
}

/// Create a tree holding one window, ids seeded from the clock.
///
/// Returns null when `attrs` is null.
///
/// # Safety
/// `attrs` must be null or point to a valid `CNodeAttributes` whose string
/// fields are null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_new(attrs: *const CNodeAttributes) -> *mut LayoutTreeHandle {
    match attrs_from_c(attrs) {
        Some(attrs) => into_handle(LayoutTree::new(attrs)),
        None => ptr::null_mut(),
    }
}

/// Like [`layout_tree_new`], with the root taking id `seed`. Id 0 means
/// "no id" on this interface, so a seed of 0 starts at 1.
///
/// # Safety
/// Same contract as [`layout_tree_new`].
#[no_mangle]
pub unsafe extern "C" fn layout_tree_new_with_seed(
    attrs: *const CNodeAttributes,
    seed: u64,
) -> *mut LayoutTreeHandle {
    match attrs_from_c(attrs) {
        Some(attrs) => into_handle(LayoutTree::with_ids(attrs, IdGenerator::starting_at(seed))),
        None => ptr::null_mut(),
    }
}

/// Release a handle and every container it owns. Null is a no-op.
///
/// # Safety
/// `tree` must be null or a handle returned by `layout_tree_new*` that has
/// not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_free(tree: *mut LayoutTreeHandle) {
    if tree.is_null() {
        return;
    }
    drop(Box::from_raw(tree));
}

/// Insert a window next to `parent_id`. `direction == 1` splits
/// horizontally, any other value vertically.
///
/// # Safety
/// `tree` must be null or a live handle; `attrs` as in [`layout_tree_new`].
#[no_mangle]
pub unsafe extern "C" fn layout_tree_add_window(
    tree: *mut LayoutTreeHandle,
    parent_id: u64,
    direction: u32,
    attrs: *const CNodeAttributes,
) -> AddWindowResult {
    let Some(handle) = tree.as_mut() else {
        return AddWindowResult::failed(c"LayoutTree is null");
    };
    let Some(attrs) = attrs_from_c(attrs) else {
        return AddWindowResult::failed(c"attributes are null");
    };

    match handle
        .tree
        .insert_window(NodeId(parent_id), direction_from_abi(direction), attrs)
    {
        Ok(window_id) => AddWindowResult::ok(window_id),
        Err(e) => {
            debug!(parent = parent_id, "add_window failed: {e}");
            AddWindowResult::failed(error_message(&e))
        }
    }
}

/// Remove a window and collapse the split it leaves behind.
///
/// # Safety
/// `tree` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_remove_window(tree: *mut LayoutTreeHandle, window_id: u64) -> bool {
    let Some(handle) = tree.as_mut() else {
        return false;
    };
    match handle.tree.remove_window(NodeId(window_id)) {
        Ok(()) => true,
        Err(e) => {
            debug!(window = window_id, "remove_window failed: {e}");
            false
        }
    }
}

/// Replace a window's attributes. Fails for splits and unknown ids.
///
/// # Safety
/// `tree` must be null or a live handle; `attrs` as in [`layout_tree_new`].
#[no_mangle]
pub unsafe extern "C" fn layout_tree_update_attributes(
    tree: *mut LayoutTreeHandle,
    window_id: u64,
    attrs: *const CNodeAttributes,
) -> bool {
    let (Some(handle), Some(attrs)) = (tree.as_mut(), attrs_from_c(attrs)) else {
        return false;
    };
    handle
        .tree
        .update_attributes(NodeId(window_id), attrs)
        .is_ok()
}

/// Id of the current root, 0 for a null handle.
///
/// # Safety
/// `tree` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_root_id(tree: *const LayoutTreeHandle) -> u64 {
    tree.as_ref().map_or(0, |handle| handle.tree.root_id().get())
}

/// Number of containers in the tree, 0 for a null handle.
///
/// # Safety
/// `tree` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_node_count(tree: *const LayoutTreeHandle) -> usize {
    tree.as_ref().map_or(0, |handle| handle.tree.len())
}

/// Pre-order traversal as a JSON array of node records. The returned string
/// must be released with [`layout_tree_string_free`]. Null on failure.
///
/// # Safety
/// `tree` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_traverse_json(tree: *const LayoutTreeHandle) -> *mut c_char {
    let Some(handle) = tree.as_ref() else {
        return ptr::null_mut();
    };
    serde_json::to_string(&handle.tree.snapshot())
        .ok()
        .and_then(|json| CString::new(json).ok())
        .map_or(ptr::null_mut(), CString::into_raw)
}

/// Release a string returned by [`layout_tree_traverse_json`]. Null is a no-op.
///
/// # Safety
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(CString::from_raw(s));
}

/// Install a stderr `tracing` subscriber so the core's debug events become
/// visible. `filter` is an `EnvFilter` directive; null or empty means
/// `bob=debug`, the level the core logs at. Returns false if a global
/// subscriber is already set.
///
/// # Safety
/// `filter` must be null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn layout_tree_init_logging(filter: *const c_char) -> bool {
    let directive = c_str_to_string(filter);
    let directive = if directive.trim().is_empty() {
        DEFAULT_FFI_FILTER.to_string()
    } else {
        directive
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
