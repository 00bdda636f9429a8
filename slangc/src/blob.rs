//! Byte blobs returned to the caller
//!
//! A blob is an immutable byte buffer whose ownership transfers to the
//! caller on creation; the data pointer stays valid exactly until
//! `slangc_releaseBlob`.

use libc::{c_void, size_t};
use slangc_engine::{Diagnostics, Error};

use crate::{handle_ref, into_handle, release_handle};

pub struct SlangcBlob {
    data: Box<[u8]>,
}

pub(crate) fn blob_from_bytes(bytes: Vec<u8>) -> *mut SlangcBlob {
    into_handle(SlangcBlob {
        data: bytes.into_boxed_slice(),
    })
}

/// Writes advisory diagnostics through an optional out parameter: null out
/// is allowed, and empty diagnostics produce a null blob rather than an
/// empty one.
pub(crate) unsafe fn write_diagnostics(out: *mut *mut SlangcBlob, diags: &Diagnostics) {
    if out.is_null() {
        return;
    }
    *out = if diags.is_empty() {
        std::ptr::null_mut()
    } else {
        blob_from_bytes(diags.to_text().into_bytes())
    };
}

/// Writes an error's diagnostic text through an optional out parameter.
/// Errors without attached compiler output fall back to their display form
/// so the caller is never left with a failure and an empty blob.
pub(crate) unsafe fn write_error_diagnostics(out: *mut *mut SlangcBlob, err: &Error) {
    if out.is_null() {
        return;
    }
    let text = err
        .diagnostics()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    *out = blob_from_bytes(text.into_bytes());
}

/// Data pointer of a blob, or null for a null blob.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getBlobData(blob: *const SlangcBlob) -> *const c_void {
    match handle_ref(blob) {
        Some(blob) => blob.data.as_ptr() as *const c_void,
        None => std::ptr::null(),
    }
}

/// Size of a blob in bytes, or 0 for a null blob.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getBlobSize(blob: *const SlangcBlob) -> size_t {
    match handle_ref(blob) {
        Some(blob) => blob.data.len(),
        None => 0,
    }
}

/// Releases a blob. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseBlob(blob: *mut SlangcBlob) {
    release_handle(blob);
}
