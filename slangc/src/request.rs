//! Legacy single-shot compile-request path
//!
//! Kept for source compatibility with older callers. Every operation
//! reports not-implemented without constructing anything; out parameters
//! are nulled so a caller that ignores the code still cannot observe a
//! half-built object. The component-type pipeline is the supported path.

use libc::c_char;

use crate::blob::SlangcBlob;
use crate::result::{self, SLANGC_E_NOT_IMPLEMENTED, SlangcResult};

pub struct SlangcCompileRequest {
    _private: [u8; 0],
}

fn not_implemented(what: &str) -> SlangcResult {
    result::failure(
        SLANGC_E_NOT_IMPLEMENTED,
        &format!("{what} is not implemented; use the component type API"),
    )
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createCompileRequest(
    _session: *const crate::session::SlangcSession,
    outCompileRequest: *mut *mut SlangcCompileRequest,
) -> SlangcResult {
    if !outCompileRequest.is_null() {
        *outCompileRequest = std::ptr::null_mut();
    }
    not_implemented("slangc_createCompileRequest")
}

/// Returns -1: translation units cannot be added to a request that cannot
/// be created.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_addTranslationUnit(
    _request: *mut SlangcCompileRequest,
    _language: i32,
    _path: *const c_char,
    _source: *const c_char,
) -> i32 {
    not_implemented("slangc_addTranslationUnit");
    -1
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_addEntryPoint(
    _request: *mut SlangcCompileRequest,
    _translationUnitIndex: i32,
    _name: *const c_char,
    _stage: i32,
) -> i32 {
    not_implemented("slangc_addEntryPoint");
    -1
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_setTarget(
    _request: *mut SlangcCompileRequest,
    _target: i32,
) -> SlangcResult {
    not_implemented("slangc_setTarget")
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_compile(_request: *mut SlangcCompileRequest) -> SlangcResult {
    not_implemented("slangc_compile")
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getCompiledCode(
    _request: *mut SlangcCompileRequest,
    _entryPointIndex: i32,
    outCode: *mut *mut SlangcBlob,
) -> SlangcResult {
    if !outCode.is_null() {
        *outCode = std::ptr::null_mut();
    }
    not_implemented("slangc_getCompiledCode")
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getDiagnosticOutput(
    _request: *mut SlangcCompileRequest,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    not_implemented("slangc_getDiagnosticOutput")
}

/// Accepts anything silently; no request object can exist.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseCompileRequest(_request: *mut SlangcCompileRequest) {}
