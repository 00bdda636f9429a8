//! Handle-returning adapters over the primary result-code convention
//!
//! Each `*Direct` function forwards to its primary counterpart and returns
//! the created handle, or null on failure. Details come from the
//! thread-local error state: `slangc_hasError` is true after a failing
//! call, `slangc_getLastError` carries the message, and both conventions
//! report equivalent information.

use libc::{c_char, size_t};

use crate::blob::SlangcBlob;
use crate::component::{
    SlangcComponentType, slangc_createCompositeComponentType,
    slangc_createEntryPointComponentType, slangc_createModuleComponentType,
    slangc_getEntryPointCode, slangc_linkComponentType,
};
use crate::module::{
    SlangcEntryPoint, SlangcModule, slangc_findEntryPoint, slangc_loadModule,
    slangc_loadModuleFromSource,
};
use crate::session::{
    SlangcGlobalSession, SlangcGlobalSessionDesc, SlangcSession, SlangcSessionDesc,
    slangc_createGlobalSession, slangc_createGlobalSessionWithDesc, slangc_createSession,
    slangc_createSessionWithProfile,
};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createGlobalSessionDirect() -> *mut SlangcGlobalSession {
    let mut out = std::ptr::null_mut();
    slangc_createGlobalSession(&mut out);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createGlobalSessionWithDescDirect(
    desc: *const SlangcGlobalSessionDesc,
) -> *mut SlangcGlobalSession {
    let mut out = std::ptr::null_mut();
    slangc_createGlobalSessionWithDesc(desc, &mut out);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createSessionDirect(
    globalSession: *const SlangcGlobalSession,
    desc: *const SlangcSessionDesc,
) -> *mut SlangcSession {
    let mut out = std::ptr::null_mut();
    slangc_createSession(globalSession, desc, &mut out);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createSessionWithProfileDirect(
    globalSession: *const SlangcGlobalSession,
    profile: u32,
    desc: *const SlangcSessionDesc,
) -> *mut SlangcSession {
    let mut out = std::ptr::null_mut();
    slangc_createSessionWithProfile(globalSession, profile, desc, &mut out);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_loadModuleDirect(
    session: *const SlangcSession,
    moduleName: *const c_char,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcModule {
    let mut out = std::ptr::null_mut();
    slangc_loadModule(session, moduleName, &mut out, outDiagnostics);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_loadModuleFromSourceDirect(
    session: *const SlangcSession,
    moduleName: *const c_char,
    path: *const c_char,
    sourceText: *const c_char,
    sourceSize: size_t,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcModule {
    let mut out = std::ptr::null_mut();
    slangc_loadModuleFromSource(
        session,
        moduleName,
        path,
        sourceText,
        sourceSize,
        &mut out,
        outDiagnostics,
    );
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_findEntryPointDirect(
    module: *const SlangcModule,
    entryPointName: *const c_char,
    stage: i32,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcEntryPoint {
    let mut out = std::ptr::null_mut();
    slangc_findEntryPoint(module, entryPointName, stage, &mut out, outDiagnostics);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createModuleComponentTypeDirect(
    session: *const SlangcSession,
    module: *const SlangcModule,
    entryPoint: *const SlangcEntryPoint,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcComponentType {
    let mut out = std::ptr::null_mut();
    slangc_createModuleComponentType(session, module, entryPoint, &mut out, outDiagnostics);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createEntryPointComponentTypeDirect(
    entryPoint: *const SlangcEntryPoint,
) -> *mut SlangcComponentType {
    let mut out = std::ptr::null_mut();
    slangc_createEntryPointComponentType(entryPoint, &mut out);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createCompositeComponentTypeDirect(
    session: *const SlangcSession,
    componentTypes: *const *const SlangcComponentType,
    componentTypeCount: i32,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcComponentType {
    let mut out = std::ptr::null_mut();
    slangc_createCompositeComponentType(
        session,
        componentTypes,
        componentTypeCount,
        &mut out,
        outDiagnostics,
    );
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_linkComponentTypeDirect(
    componentType: *const SlangcComponentType,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcComponentType {
    let mut out = std::ptr::null_mut();
    slangc_linkComponentType(componentType, &mut out, outDiagnostics);
    out
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getEntryPointCodeDirect(
    componentType: *const SlangcComponentType,
    entryPointIndex: i32,
    targetIndex: i32,
    outDiagnostics: *mut *mut SlangcBlob,
) -> *mut SlangcBlob {
    let mut out = std::ptr::null_mut();
    slangc_getEntryPointCode(
        componentType,
        entryPointIndex,
        targetIndex,
        &mut out,
        outDiagnostics,
    );
    out
}
