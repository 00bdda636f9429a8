//! Flat C-callable surface over the `slangc-engine` compiler
//!
//! Every export follows one of two conventions. The primary convention
//! returns a `SlangcResult` and writes created objects through out
//! parameters. The `*Direct` adapter family returns handles (null on
//! failure) and reports details through the thread-local error state
//! (`slangc_hasError`, `slangc_getLastError`, `slangc_clearError`).
//!
//! Handles are caller-owned opaque pointers. Each successful create, load,
//! or find call yields a handle the caller releases exactly once; release
//! functions accept null as a no-op. Shared engine state survives through
//! internal reference counts, so releasing a module that a composite still
//! uses is always safe.
//!
//! Handles carry no locking of their own; using the same handle from
//! multiple threads concurrently is the caller's responsibility.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]
#![allow(unsafe_op_in_unsafe_fn)]

mod blob;
mod component;
mod direct;
mod enums;
mod module;
mod request;
mod result;
mod session;

pub use blob::{SlangcBlob, slangc_getBlobData, slangc_getBlobSize, slangc_releaseBlob};
pub use component::{
    SlangcComponentType, slangc_createCompositeComponentType,
    slangc_createEntryPointComponentType, slangc_createModuleComponentType,
    slangc_getComponentTypeEntryPoint, slangc_getComponentTypeKind,
    slangc_getComponentTypeModule, slangc_getEntryPointCode, slangc_linkComponentType,
    slangc_releaseComponentType,
};
pub use direct::*;
pub use enums::*;
pub use module::{
    SlangcEntryPoint, SlangcModule, slangc_findEntryPoint, slangc_loadModule,
    slangc_loadModuleFromSource, slangc_releaseEntryPoint, slangc_releaseModule,
};
pub use request::{
    SlangcCompileRequest, slangc_addEntryPoint, slangc_addTranslationUnit, slangc_compile,
    slangc_createCompileRequest, slangc_getCompiledCode, slangc_getDiagnosticOutput,
    slangc_releaseCompileRequest, slangc_setTarget,
};
pub use result::{
    SLANGC_API_VERSION, SLANGC_E_BUFFER_TOO_SMALL, SLANGC_E_INVALID_ARG,
    SLANGC_E_NOT_IMPLEMENTED, SLANGC_E_OUT_OF_MEMORY, SLANGC_FAIL, SLANGC_OK, SlangcResult,
    slangc_clearError, slangc_getLastError, slangc_getLastErrorMessage, slangc_hasError,
};
pub use session::{
    SlangcGlobalSession, SlangcGlobalSessionDesc, SlangcSession, SlangcSessionDesc,
    slangc_createGlobalSession, slangc_createGlobalSessionWithDesc, slangc_createSession,
    slangc_createSessionWithProfile, slangc_findProfile, slangc_releaseGlobalSession,
    slangc_releaseSession,
};

use std::ffi::CStr;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::c_char;

/// Borrows a C string as UTF-8. `None` for null or non-UTF-8 input.
pub(crate) unsafe fn opt_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Moves a value onto the heap and hands ownership to the caller.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Reclaims a handle produced by [`into_handle`]. Null is a no-op.
pub(crate) unsafe fn release_handle<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

pub(crate) unsafe fn handle_ref<'a, T>(ptr: *const T) -> Option<&'a T> {
    if ptr.is_null() { None } else { Some(&*ptr) }
}

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

pub(crate) fn is_shut_down() -> bool {
    SHUTDOWN.load(Ordering::Acquire)
}

/// Version string for this library. The pointer is static; do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_getVersionString() -> *const c_char {
    static VERSION: &str = concat!("slangc ", env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

/// Returns true once [`slangc_shutdown`] has been called.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_isShutdown() -> bool {
    is_shut_down()
}

/// Optional final cleanup, callable only after every handle is released.
/// Safe to call multiple times; after the first call the library refuses to
/// create new global sessions in this process.
#[unsafe(no_mangle)]
pub extern "C" fn slangc_shutdown() {
    if SHUTDOWN.swap(true, Ordering::AcqRel) {
        return;
    }
    slangc_engine::clear_internal_error();
    result::clear_error_state();
    log::debug!("slangc shut down");
}
