//! Conversions between C boundary records and core types.

use std::ffi::{c_char, CStr};

use bob_common::TilingError;
use bob_tiling::{NodeAttributes, Orientation};

/// Window attributes as flat C fields.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CNodeAttributes {
    /// NUL-terminated title; null reads as empty.
    pub name: *const c_char,
    /// NUL-terminated URL or similar; null reads as empty.
    pub resource: *const c_char,
    pub width: i64,
    pub height: i64,
    pub halted: bool,
    pub focus: bool,
}

/// `1` is horizontal; every other value is vertical.
pub fn direction_from_abi(direction: u32) -> Orientation {
    if direction == 1 {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Copy a C string, replacing invalid UTF-8. Null yields an empty string.
pub(crate) unsafe fn c_str_to_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

pub(crate) unsafe fn attrs_from_c(attrs: *const CNodeAttributes) -> Option<NodeAttributes> {
    let attrs = attrs.as_ref()?;
    Some(NodeAttributes {
        name: c_str_to_string(attrs.name),
        resource: c_str_to_string(attrs.resource),
        width: attrs.width,
        height: attrs.height,
        halted: attrs.halted,
        focus: attrs.focus,
    })
}

pub(crate) fn error_message(err: &TilingError) -> &'static CStr {
    match err {
        TilingError::NotFound(_) => c"container not found",
        TilingError::CannotRemoveRoot(_) => c"cannot remove the root container",
        TilingError::InvalidTreeState(_) => c"invalid tree state",
    }
}
