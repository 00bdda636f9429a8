//! Global session and session exports

use std::path::PathBuf;
use std::sync::Arc;

use libc::c_char;
use slangc_engine::{
    GlobalSession, GlobalSessionDesc, GlobalSessionFlags, MacroDef, ProfileId, Session,
    SessionDesc, TargetDesc,
};

use crate::result::{self, SLANGC_FAIL, SlangcResult};
use crate::{enums, handle_ref, into_handle, is_shut_down, opt_str, release_handle};

pub struct SlangcGlobalSession {
    pub(crate) inner: Arc<GlobalSession>,
}

pub struct SlangcSession {
    pub(crate) inner: Arc<Session>,
}

/// Flat global-session configuration.
#[repr(C)]
pub struct SlangcGlobalSessionDesc {
    pub apiVersion: u32,
    pub searchPaths: *const *const c_char,
    pub searchPathCount: i32,
    pub enableGLSL: bool,
}

/// Flat session configuration. All arrays are borrowed for the duration of
/// the call and never retained.
#[repr(C)]
pub struct SlangcSessionDesc {
    pub targets: *const i32,
    pub targetCount: i32,
    pub searchPaths: *const *const c_char,
    pub searchPathCount: i32,
    pub preprocessorMacros: *const *const c_char,
    pub preprocessorMacroCount: i32,
    pub matrixLayoutMode: i32,
}

/// Collects a C string array into owned Rust strings. Fails on a null
/// array with a positive count, a null element, or non-UTF-8 text.
unsafe fn collect_strings(
    ptr: *const *const c_char,
    count: i32,
    what: &str,
) -> Result<Vec<String>, SlangcResult> {
    if count <= 0 {
        return Ok(Vec::new());
    }
    if ptr.is_null() {
        return Err(result::invalid_arg(&format!("{what} array is null")));
    }
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        match opt_str(*ptr.add(i)) {
            Some(text) => out.push(text.to_string()),
            None => {
                return Err(result::invalid_arg(&format!(
                    "{what} entry {i} is null or not UTF-8"
                )));
            }
        }
    }
    Ok(out)
}

unsafe fn engine_session_desc(
    desc: *const SlangcSessionDesc,
    default_profile: Option<ProfileId>,
) -> Result<SessionDesc, SlangcResult> {
    let Some(desc) = handle_ref(desc) else {
        // A null descriptor means defaults.
        return Ok(SessionDesc {
            default_profile,
            ..SessionDesc::default()
        });
    };

    let mut targets = Vec::new();
    if desc.targetCount > 0 {
        if desc.targets.is_null() {
            return Err(result::invalid_arg("target array is null"));
        }
        for i in 0..desc.targetCount as usize {
            targets.push(TargetDesc::new(enums::target_from_raw(
                *desc.targets.add(i),
            )));
        }
    }

    let search_paths = collect_strings(desc.searchPaths, desc.searchPathCount, "search path")?
        .into_iter()
        .map(PathBuf::from)
        .collect();
    let macros = collect_strings(
        desc.preprocessorMacros,
        desc.preprocessorMacroCount,
        "preprocessor macro",
    )?
    .iter()
    .map(|text| MacroDef::parse(text))
    .collect();

    Ok(SessionDesc {
        targets,
        search_paths,
        macros,
        matrix_layout: enums::matrix_layout_from_raw(desc.matrixLayoutMode),
        default_profile,
    })
}

unsafe fn create_global_session(
    desc: GlobalSessionDesc,
    outGlobalSession: *mut *mut SlangcGlobalSession,
) -> SlangcResult {
    if outGlobalSession.is_null() {
        return result::invalid_arg("output global session pointer is null");
    }
    *outGlobalSession = std::ptr::null_mut();
    if is_shut_down() {
        return result::failure(SLANGC_FAIL, "the compiler has been shut down");
    }
    match GlobalSession::with_desc(desc) {
        Ok(inner) => {
            *outGlobalSession = into_handle(SlangcGlobalSession { inner });
            result::success()
        }
        Err(err) => result::engine_failure(&err),
    }
}

/// Creates a global session with default settings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createGlobalSession(
    outGlobalSession: *mut *mut SlangcGlobalSession,
) -> SlangcResult {
    create_global_session(GlobalSessionDesc::default(), outGlobalSession)
}

/// Creates a global session from an explicit descriptor.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createGlobalSessionWithDesc(
    desc: *const SlangcGlobalSessionDesc,
    outGlobalSession: *mut *mut SlangcGlobalSession,
) -> SlangcResult {
    let engine_desc = match handle_ref(desc) {
        None => GlobalSessionDesc::default(),
        Some(desc) => {
            let search_paths =
                match collect_strings(desc.searchPaths, desc.searchPathCount, "search path") {
                    Ok(paths) => paths.into_iter().map(PathBuf::from).collect(),
                    Err(code) => {
                        if !outGlobalSession.is_null() {
                            *outGlobalSession = std::ptr::null_mut();
                        }
                        return code;
                    }
                };
            let mut flags = GlobalSessionFlags::empty();
            if desc.enableGLSL {
                flags |= GlobalSessionFlags::ENABLE_GLSL;
            }
            GlobalSessionDesc {
                api_version: desc.apiVersion,
                search_paths,
                flags,
            }
        }
    };
    create_global_session(engine_desc, outGlobalSession)
}

/// Releases a global session handle. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseGlobalSession(globalSession: *mut SlangcGlobalSession) {
    release_handle(globalSession);
}

/// Resolves a profile name such as `vs_5_0`. Returns 0 when the name is
/// unknown or an argument is null; profile IDs are not owned resources.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_findProfile(
    globalSession: *const SlangcGlobalSession,
    name: *const c_char,
) -> u32 {
    let (Some(global), Some(name)) = (handle_ref(globalSession), opt_str(name)) else {
        return 0;
    };
    global
        .inner
        .find_profile(name)
        .map_or(0, |profile| profile.raw())
}

unsafe fn create_session(
    globalSession: *const SlangcGlobalSession,
    desc: *const SlangcSessionDesc,
    default_profile: Option<ProfileId>,
    outSession: *mut *mut SlangcSession,
) -> SlangcResult {
    if outSession.is_null() {
        return result::invalid_arg("output session pointer is null");
    }
    *outSession = std::ptr::null_mut();
    let Some(global) = handle_ref(globalSession) else {
        return result::invalid_arg("global session is null");
    };
    let engine_desc = match engine_session_desc(desc, default_profile) {
        Ok(desc) => desc,
        Err(code) => return code,
    };
    match global.inner.create_session(engine_desc) {
        Ok(inner) => {
            *outSession = into_handle(SlangcSession { inner });
            result::success()
        }
        Err(err) => result::engine_failure(&err),
    }
}

/// Creates a compilation session. A null descriptor means defaults; a
/// descriptor with zero targets gets one default SPIR-V target.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createSession(
    globalSession: *const SlangcGlobalSession,
    desc: *const SlangcSessionDesc,
    outSession: *mut *mut SlangcSession,
) -> SlangcResult {
    create_session(globalSession, desc, None, outSession)
}

/// Creates a compilation session seeded with a default profile obtained
/// from [`slangc_findProfile`]. Profile 0 is rejected.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createSessionWithProfile(
    globalSession: *const SlangcGlobalSession,
    profile: u32,
    desc: *const SlangcSessionDesc,
    outSession: *mut *mut SlangcSession,
) -> SlangcResult {
    if profile == 0 {
        if !outSession.is_null() {
            *outSession = std::ptr::null_mut();
        }
        return result::invalid_arg("profile 0 is the not-found sentinel");
    }
    create_session(
        globalSession,
        desc,
        Some(ProfileId::from_raw(profile)),
        outSession,
    )
}

/// Releases a session handle. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseSession(session: *mut SlangcSession) {
    release_handle(session);
}
