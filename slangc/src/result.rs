//! Result codes and the thread-local error state

use std::cell::RefCell;
use std::ffi::CString;

use libc::c_char;
use slangc_engine::Error;

/// Result code returned by the primary calling convention.
pub type SlangcResult = i32;

pub const SLANGC_OK: SlangcResult = 0;
pub const SLANGC_FAIL: SlangcResult = -1;
pub const SLANGC_E_NOT_IMPLEMENTED: SlangcResult = -2;
pub const SLANGC_E_INVALID_ARG: SlangcResult = -3;
pub const SLANGC_E_OUT_OF_MEMORY: SlangcResult = -4;
pub const SLANGC_E_BUFFER_TOO_SMALL: SlangcResult = -5;

/// Version of the C API described by this header generation.
pub const SLANGC_API_VERSION: u32 = slangc_engine::API_VERSION;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Records a failure in the calling thread's error slot and returns the
/// code. Every fallible export funnels failures through here so both
/// calling conventions observe the same state.
pub(crate) fn failure(code: SlangcResult, message: &str) -> SlangcResult {
    let text = CString::new(message).unwrap_or_else(|_| {
        CString::new(message.replace('\0', " ")).unwrap_or_default()
    });
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(text));
    code
}

/// Clears the error slot and returns `SLANGC_OK`. Fallible exports call
/// this on success so the slot always reflects the most recent operation.
pub(crate) fn success() -> SlangcResult {
    LAST_ERROR.with(|slot| slot.borrow_mut().take());
    SLANGC_OK
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|slot| slot.borrow_mut().take());
}

/// Maps an engine error onto the closed ABI code set.
pub(crate) fn code_for(err: &Error) -> SlangcResult {
    match err {
        Error::InvalidArgument(_) | Error::IndexOutOfRange { .. } => SLANGC_E_INVALID_ARG,
        _ => SLANGC_FAIL,
    }
}

pub(crate) fn engine_failure(err: &Error) -> SlangcResult {
    failure(code_for(err), &err.to_string())
}

pub(crate) fn invalid_arg(message: &str) -> SlangcResult {
    failure(SLANGC_E_INVALID_ARG, message)
}

/// Returns true if the most recent fallible call on this thread failed.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_hasError() -> bool {
    LAST_ERROR.with(|slot| slot.borrow().is_some())
}

/// The last error message on this thread, or null when the most recent
/// fallible call succeeded. Valid until the next fallible call or
/// [`slangc_clearError`]; do not free.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_getLastError() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |text| text.as_ptr())
    })
}

/// Clears the calling thread's error state.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_clearError() {
    clear_error_state();
    slangc_engine::clear_internal_error();
}

/// The last error message, never null: an empty string when there is none.
/// Valid until the next fallible call on this thread; do not free.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_getLastErrorMessage() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(c"".as_ptr(), |text| text.as_ptr())
    })
}
