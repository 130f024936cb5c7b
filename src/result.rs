//! The C result block and its ownership protocol
//!
//! Every export allocates exactly one [`NResult`] and hands it to the caller,
//! who owns it until passing it back to [`release`]. The block is never read
//! or freed by this crate after it is returned.

use std::ffi::{CStr, CString, c_char};

use nfunc_core::error::Result;
use nfunc_core::types::{Output, Reply, Status};

/// Result block shared with the host
#[repr(C)]
#[derive(Debug)]
pub struct NResult {
    /// NUL-terminated UTF-8 text, never null
    pub value: *mut c_char,
    /// Epoch milliseconds, or the sentinel
    pub data: i64,
    /// 0 for success, 1 for failure
    pub status: i32,
}

/// Allocate a block for an operation outcome and give up ownership of it
pub fn into_raw(result: Result<Output>) -> *mut NResult {
    let reply = Reply::from(result);
    let block = NResult {
        value: to_c_string(reply.value).into_raw(),
        data: reply.data,
        status: reply.status as i32,
    };
    Box::into_raw(Box::new(block))
}

/// C strings cannot carry interior NULs, so they are dropped
fn to_c_string(text: String) -> CString {
    CString::new(text).unwrap_or_else(|error| {
        let mut bytes = error.into_vec();
        bytes.retain(|&b| b != 0);
        // No NULs remain
        CString::new(bytes).unwrap_or_default()
    })
}

/// Free a block produced by [`into_raw`]
///
/// # Safety
///
/// `block` must be null or a pointer returned by [`into_raw`] that has not
/// been released yet. The pointer must not be used afterwards.
pub unsafe fn release(block: *mut NResult) {
    if block.is_null() {
        return;
    }

    let block = unsafe { Box::from_raw(block) };
    if !block.value.is_null() {
        drop(unsafe { CString::from_raw(block.value) });
    }
}

/// Copy a block's contents into a [`Reply`] without taking ownership
///
/// # Safety
///
/// `block` must be a live pointer returned by [`into_raw`].
pub unsafe fn peek(block: *const NResult) -> Option<Reply> {
    let block = unsafe { block.as_ref() }?;
    let value = if block.value.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(block.value) }
            .to_string_lossy()
            .into_owned()
    };
    let status = if block.status == 0 {
        Status::Ok
    } else {
        Status::Error
    };
    Some(Reply {
        value,
        data: block.data,
        status,
    })
}
