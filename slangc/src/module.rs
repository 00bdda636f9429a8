//! Module loading and entry point exports

use std::sync::Arc;

use libc::{c_char, size_t};
use slangc_engine::{EntryPoint, Module};

use crate::blob::{self, SlangcBlob};
use crate::result::{self, SlangcResult};
use crate::session::SlangcSession;
use crate::{enums, handle_ref, into_handle, opt_str, release_handle};

pub struct SlangcModule {
    pub(crate) inner: Arc<Module>,
}

pub struct SlangcEntryPoint {
    pub(crate) inner: Arc<EntryPoint>,
}

/// Loads a module by name, resolving `<name>.wgsl` through the session's
/// search paths; `import` statements are resolved the same way,
/// recursively. Diagnostics are written whenever the compiler produced
/// any, on success and failure alike.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_loadModule(
    session: *const SlangcSession,
    moduleName: *const c_char,
    outModule: *mut *mut SlangcModule,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outModule.is_null() {
        return result::invalid_arg("output module pointer is null");
    }
    *outModule = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(session) = handle_ref(session) else {
        return result::invalid_arg("session is null");
    };
    let Some(name) = opt_str(moduleName) else {
        return result::invalid_arg("module name is null or not UTF-8");
    };
    match session.inner.load_module(name) {
        Ok((inner, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outModule = into_handle(SlangcModule { inner });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Loads a module from caller-supplied source text. `path` is used only
/// for diagnostics. `sourceSize` 0 means the text is null-terminated;
/// otherwise exactly `sourceSize` bytes are read.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_loadModuleFromSource(
    session: *const SlangcSession,
    moduleName: *const c_char,
    path: *const c_char,
    sourceText: *const c_char,
    sourceSize: size_t,
    outModule: *mut *mut SlangcModule,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outModule.is_null() {
        return result::invalid_arg("output module pointer is null");
    }
    *outModule = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(session) = handle_ref(session) else {
        return result::invalid_arg("session is null");
    };
    let Some(name) = opt_str(moduleName) else {
        return result::invalid_arg("module name is null or not UTF-8");
    };
    let path = opt_str(path).unwrap_or(name);
    if sourceText.is_null() {
        return result::invalid_arg("source text is null");
    }
    let source = if sourceSize == 0 {
        match opt_str(sourceText) {
            Some(text) => text,
            None => return result::invalid_arg("source text is not UTF-8"),
        }
    } else {
        let bytes = std::slice::from_raw_parts(sourceText as *const u8, sourceSize);
        match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => return result::invalid_arg("source text is not UTF-8"),
        }
    };
    match session.inner.load_module_from_source(name, path, source) {
        Ok((inner, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outModule = into_handle(SlangcModule { inner });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Releases a module handle. Null is a no-op; composites holding the
/// module keep the underlying object alive.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseModule(module: *mut SlangcModule) {
    release_handle(module);
}

/// Checked entry point lookup: the function must exist among the module's
/// own entry points and be declared for the requested stage. Not-found and
/// stage-mismatch produce distinct diagnostic texts.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_findEntryPoint(
    module: *const SlangcModule,
    entryPointName: *const c_char,
    stage: i32,
    outEntryPoint: *mut *mut SlangcEntryPoint,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outEntryPoint.is_null() {
        return result::invalid_arg("output entry point pointer is null");
    }
    *outEntryPoint = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(module) = handle_ref(module) else {
        return result::invalid_arg("module is null");
    };
    let Some(name) = opt_str(entryPointName) else {
        return result::invalid_arg("entry point name is null or not UTF-8");
    };
    match module
        .inner
        .find_entry_point(name, enums::stage_from_raw(stage))
    {
        Ok(inner) => {
            *outEntryPoint = into_handle(SlangcEntryPoint { inner });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Releases an entry point handle. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseEntryPoint(entryPoint: *mut SlangcEntryPoint) {
    release_handle(entryPoint);
}
