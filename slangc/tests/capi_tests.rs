//! Integration tests driving the raw C ABI end to end

#![allow(unsafe_op_in_unsafe_fn)]

use std::ffi::CStr;
use std::ptr;

use slangc::*;

/// Helper to copy a blob's bytes out.
unsafe fn get_blob_data(blob: *mut SlangcBlob) -> Vec<u8> {
    if blob.is_null() {
        return Vec::new();
    }
    let data = slangc_getBlobData(blob);
    let size = slangc_getBlobSize(blob);
    std::slice::from_raw_parts(data as *const u8, size).to_vec()
}

/// Helper to read a diagnostics blob as text.
unsafe fn get_diagnostic_text(blob: *mut SlangcBlob) -> String {
    String::from_utf8_lossy(&get_blob_data(blob)).to_string()
}

// Two entry points so index-space and stage-check behavior are observable.
const SIMPLE_SHADER: &[u8] = b"
@vertex
fn simpleVertex(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(pos, 1.0);
}

@fragment
fn simpleFragment() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.0, 0.0, 1.0);
}
\0";

const BAD_SHADER: &[u8] = b"
@fragment
fn broken( -> f32 {
\0";

/// Builds a default global session + single-SPIR-V session pair.
unsafe fn make_session() -> (*mut SlangcGlobalSession, *mut SlangcSession) {
    let mut global: *mut SlangcGlobalSession = ptr::null_mut();
    assert_eq!(slangc_createGlobalSession(&mut global), SLANGC_OK);
    assert!(!global.is_null());

    let targets = [SLANGC_TARGET_SPIRV];
    let desc = SlangcSessionDesc {
        targets: targets.as_ptr(),
        targetCount: 1,
        searchPaths: ptr::null(),
        searchPathCount: 0,
        preprocessorMacros: ptr::null(),
        preprocessorMacroCount: 0,
        matrixLayoutMode: SLANGC_MATRIX_LAYOUT_COLUMN_MAJOR,
    };
    let mut session: *mut SlangcSession = ptr::null_mut();
    assert_eq!(slangc_createSession(global, &desc, &mut session), SLANGC_OK);
    assert!(!session.is_null());
    (global, session)
}

unsafe fn load_simple_module(session: *mut SlangcSession) -> *mut SlangcModule {
    let mut module: *mut SlangcModule = ptr::null_mut();
    let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
    let result = slangc_loadModuleFromSource(
        session,
        c"SimpleShader".as_ptr(),
        c"simple.wgsl".as_ptr(),
        SIMPLE_SHADER.as_ptr() as *const _,
        SIMPLE_SHADER.len() - 1, // exclude null terminator from length
        &mut module,
        &mut diagnostics,
    );
    if result != SLANGC_OK {
        let text = get_diagnostic_text(diagnostics);
        slangc_releaseBlob(diagnostics);
        panic!("module load failed: {}", text);
    }
    assert!(
        diagnostics.is_null(),
        "clean source should produce no diagnostics: {}",
        get_diagnostic_text(diagnostics)
    );
    module
}

#[test]
fn test_simple_shader_scenario() {
    unsafe {
        let (global, session) = make_session();
        let module = load_simple_module(session);

        let mut entry_point: *mut SlangcEntryPoint = ptr::null_mut();
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        let result = slangc_findEntryPoint(
            module,
            c"simpleFragment".as_ptr(),
            SLANGC_STAGE_FRAGMENT,
            &mut entry_point,
            &mut diagnostics,
        );
        assert_eq!(result, SLANGC_OK, "{}", get_diagnostic_text(diagnostics));
        assert!(!entry_point.is_null());

        let mut component: *mut SlangcComponentType = ptr::null_mut();
        let result = slangc_createModuleComponentType(
            session,
            module,
            entry_point,
            &mut component,
            &mut diagnostics,
        );
        assert_eq!(result, SLANGC_OK, "{}", get_diagnostic_text(diagnostics));

        let mut code: *mut SlangcBlob = ptr::null_mut();
        let result = slangc_getEntryPointCode(component, 0, 0, &mut code, &mut diagnostics);
        assert_eq!(result, SLANGC_OK, "{}", get_diagnostic_text(diagnostics));

        let bytecode = get_blob_data(code);
        assert!(!bytecode.is_empty(), "compiled code should not be empty");
        assert_eq!(
            &bytecode[0..4],
            &[0x03, 0x02, 0x23, 0x07],
            "code should start with the SPIR-V magic"
        );
        if !diagnostics.is_null() {
            let text = get_diagnostic_text(diagnostics);
            assert!(!text.contains("error"), "unexpected diagnostics: {}", text);
        }

        slangc_releaseBlob(code);
        slangc_releaseBlob(diagnostics);
        slangc_releaseComponentType(component);
        slangc_releaseEntryPoint(entry_point);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_zero_target_session_defaults_to_spirv() {
    unsafe {
        let mut global: *mut SlangcGlobalSession = ptr::null_mut();
        assert_eq!(slangc_createGlobalSession(&mut global), SLANGC_OK);

        // Null descriptor: all defaults, zero targets.
        let mut session: *mut SlangcSession = ptr::null_mut();
        assert_eq!(
            slangc_createSession(global, ptr::null(), &mut session),
            SLANGC_OK
        );

        let module = load_simple_module(session);
        let mut entry_point: *mut SlangcEntryPoint = ptr::null_mut();
        let result = slangc_findEntryPoint(
            module,
            c"simpleVertex".as_ptr(),
            SLANGC_STAGE_VERTEX,
            &mut entry_point,
            ptr::null_mut(),
        );
        assert_eq!(result, SLANGC_OK);

        let mut component: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createEntryPointComponentType(entry_point, &mut component),
            SLANGC_OK
        );

        // Target index 0 must exist and produce SPIR-V.
        let mut code: *mut SlangcBlob = ptr::null_mut();
        let result = slangc_getEntryPointCode(component, 0, 0, &mut code, ptr::null_mut());
        assert_eq!(result, SLANGC_OK);
        let bytecode = get_blob_data(code);
        assert_eq!(&bytecode[0..4], &[0x03, 0x02, 0x23, 0x07]);

        slangc_releaseBlob(code);
        slangc_releaseComponentType(component);
        slangc_releaseEntryPoint(entry_point);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_composite_and_link() {
    unsafe {
        let (global, session) = make_session();
        let module = load_simple_module(session);

        let mut fragment: *mut SlangcEntryPoint = ptr::null_mut();
        assert_eq!(
            slangc_findEntryPoint(
                module,
                c"simpleFragment".as_ptr(),
                SLANGC_STAGE_FRAGMENT,
                &mut fragment,
                ptr::null_mut(),
            ),
            SLANGC_OK
        );

        let mut module_ct: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createModuleComponentType(
                session,
                module,
                ptr::null(),
                &mut module_ct,
                ptr::null_mut(),
            ),
            SLANGC_OK
        );
        let mut entry_ct: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createEntryPointComponentType(fragment, &mut entry_ct),
            SLANGC_OK
        );

        let parts = [
            module_ct as *const SlangcComponentType,
            entry_ct as *const SlangcComponentType,
        ];
        let mut composite: *mut SlangcComponentType = ptr::null_mut();
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_createCompositeComponentType(
                session,
                parts.as_ptr(),
                2,
                &mut composite,
                &mut diagnostics,
            ),
            SLANGC_OK
        );
        slangc_releaseBlob(diagnostics);
        assert_eq!(
            slangc_getComponentTypeKind(composite),
            SLANGC_COMPONENT_TYPE_COMPOSITE
        );

        let mut linked: *mut SlangcComponentType = ptr::null_mut();
        diagnostics = ptr::null_mut();
        assert_eq!(
            slangc_linkComponentType(composite, &mut linked, &mut diagnostics),
            SLANGC_OK,
            "{}",
            get_diagnostic_text(diagnostics)
        );
        slangc_releaseBlob(diagnostics);

        // Constituents can be released; the composite keeps them alive.
        slangc_releaseComponentType(module_ct);
        slangc_releaseComponentType(entry_ct);
        slangc_releaseEntryPoint(fragment);
        slangc_releaseModule(module);

        let mut code: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_getEntryPointCode(linked, 0, 0, &mut code, ptr::null_mut()),
            SLANGC_OK
        );
        let bytecode = get_blob_data(code);
        assert_eq!(&bytecode[0..4], &[0x03, 0x02, 0x23, 0x07]);

        slangc_releaseBlob(code);
        slangc_releaseComponentType(linked);
        slangc_releaseComponentType(composite);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_out_of_range_indices_fail_cleanly() {
    unsafe {
        let (global, session) = make_session();
        let module = load_simple_module(session);

        let mut fragment: *mut SlangcEntryPoint = ptr::null_mut();
        assert_eq!(
            slangc_findEntryPoint(
                module,
                c"simpleFragment".as_ptr(),
                SLANGC_STAGE_FRAGMENT,
                &mut fragment,
                ptr::null_mut(),
            ),
            SLANGC_OK
        );
        let mut component: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createEntryPointComponentType(fragment, &mut component),
            SLANGC_OK
        );

        let mut code: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_getEntryPointCode(component, 7, 0, &mut code, ptr::null_mut()),
            SLANGC_E_INVALID_ARG
        );
        assert!(code.is_null());
        assert_eq!(
            slangc_getEntryPointCode(component, 0, 7, &mut code, ptr::null_mut()),
            SLANGC_E_INVALID_ARG
        );
        assert!(code.is_null());
        assert_eq!(
            slangc_getEntryPointCode(component, -1, 0, &mut code, ptr::null_mut()),
            SLANGC_E_INVALID_ARG
        );

        slangc_releaseComponentType(component);
        slangc_releaseEntryPoint(fragment);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_invalid_source_produces_diagnostics() {
    unsafe {
        let (global, session) = make_session();

        let mut module: *mut SlangcModule = ptr::null_mut();
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        let result = slangc_loadModuleFromSource(
            session,
            c"Broken".as_ptr(),
            c"broken.wgsl".as_ptr(),
            BAD_SHADER.as_ptr() as *const _,
            BAD_SHADER.len() - 1,
            &mut module,
            &mut diagnostics,
        );

        assert_ne!(result, SLANGC_OK, "bad source should fail to load");
        assert!(module.is_null(), "no module handle on failure");
        assert!(!diagnostics.is_null(), "failure should carry diagnostics");
        let text = get_diagnostic_text(diagnostics);
        assert!(!text.is_empty(), "diagnostic text should not be empty");

        slangc_releaseBlob(diagnostics);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_entry_point_stage_mismatch() {
    unsafe {
        let (global, session) = make_session();
        let module = load_simple_module(session);

        let mut entry_point: *mut SlangcEntryPoint = ptr::null_mut();
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();

        // Wrong stage for a declared function.
        let result = slangc_findEntryPoint(
            module,
            c"simpleFragment".as_ptr(),
            SLANGC_STAGE_VERTEX,
            &mut entry_point,
            &mut diagnostics,
        );
        assert_ne!(result, SLANGC_OK);
        assert!(entry_point.is_null());
        let text = get_diagnostic_text(diagnostics);
        assert!(text.contains("stage"), "diagnostic should name the stage: {}", text);
        slangc_releaseBlob(diagnostics);

        // Unknown function.
        diagnostics = ptr::null_mut();
        let result = slangc_findEntryPoint(
            module,
            c"missing".as_ptr(),
            SLANGC_STAGE_FRAGMENT,
            &mut entry_point,
            &mut diagnostics,
        );
        assert_ne!(result, SLANGC_OK);
        assert!(entry_point.is_null());
        slangc_releaseBlob(diagnostics);

        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_component_payload_accessors_check_the_kind() {
    unsafe {
        let (global, session) = make_session();
        let module = load_simple_module(session);

        let mut fragment: *mut SlangcEntryPoint = ptr::null_mut();
        assert_eq!(
            slangc_findEntryPoint(
                module,
                c"simpleFragment".as_ptr(),
                SLANGC_STAGE_FRAGMENT,
                &mut fragment,
                ptr::null_mut(),
            ),
            SLANGC_OK
        );
        let mut entry_ct: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createEntryPointComponentType(fragment, &mut entry_ct),
            SLANGC_OK
        );

        assert_eq!(
            slangc_getComponentTypeKind(entry_ct),
            SLANGC_COMPONENT_TYPE_ENTRY_POINT
        );
        // Null handle reports the documented module-kind fallback.
        assert_eq!(
            slangc_getComponentTypeKind(ptr::null()),
            SLANGC_COMPONENT_TYPE_MODULE
        );

        // Matching accessor mints a fresh handle the caller releases.
        let payload = slangc_getComponentTypeEntryPoint(entry_ct);
        assert!(!payload.is_null());
        assert!(!slangc_hasError());
        slangc_releaseEntryPoint(payload);

        // Mismatched accessor: null plus error state.
        let wrong = slangc_getComponentTypeModule(entry_ct);
        assert!(wrong.is_null());
        assert!(slangc_hasError());
        let message = CStr::from_ptr(slangc_getLastError()).to_string_lossy();
        assert!(message.contains("not a module"), "{}", message);
        slangc_clearError();
        assert!(!slangc_hasError());

        slangc_releaseComponentType(entry_ct);
        slangc_releaseEntryPoint(fragment);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_direct_convention_reports_through_error_state() {
    unsafe {
        let global = slangc_createGlobalSessionDirect();
        assert!(!global.is_null());
        let session = slangc_createSessionDirect(global, ptr::null());
        assert!(!session.is_null());
        assert!(!slangc_hasError());

        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        let module = slangc_loadModuleFromSourceDirect(
            session,
            c"Broken".as_ptr(),
            c"broken.wgsl".as_ptr(),
            BAD_SHADER.as_ptr() as *const _,
            BAD_SHADER.len() - 1,
            &mut diagnostics,
        );
        assert!(module.is_null());
        assert!(slangc_hasError());
        assert!(!slangc_getLastError().is_null());
        slangc_releaseBlob(diagnostics);
        slangc_clearError();

        let module = slangc_loadModuleFromSourceDirect(
            session,
            c"SimpleShader".as_ptr(),
            c"simple.wgsl".as_ptr(),
            SIMPLE_SHADER.as_ptr() as *const _,
            SIMPLE_SHADER.len() - 1,
            ptr::null_mut(),
        );
        assert!(!module.is_null());
        assert!(!slangc_hasError());

        let entry_point = slangc_findEntryPointDirect(
            module,
            c"simpleVertex".as_ptr(),
            SLANGC_STAGE_VERTEX,
            ptr::null_mut(),
        );
        assert!(!entry_point.is_null());
        let component = slangc_createEntryPointComponentTypeDirect(entry_point);
        assert!(!component.is_null());
        let code = slangc_getEntryPointCodeDirect(component, 0, 0, ptr::null_mut());
        assert!(!code.is_null());
        let bytecode = get_blob_data(code);
        assert_eq!(&bytecode[0..4], &[0x03, 0x02, 0x23, 0x07]);

        slangc_releaseBlob(code);
        slangc_releaseComponentType(component);
        slangc_releaseEntryPoint(entry_point);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_release_functions_accept_null() {
    unsafe {
        slangc_releaseGlobalSession(ptr::null_mut());
        slangc_releaseSession(ptr::null_mut());
        slangc_releaseModule(ptr::null_mut());
        slangc_releaseEntryPoint(ptr::null_mut());
        slangc_releaseComponentType(ptr::null_mut());
        slangc_releaseBlob(ptr::null_mut());
        slangc_releaseCompileRequest(ptr::null_mut());
    }
}

#[test]
fn test_null_arguments_are_invalid_not_fatal() {
    unsafe {
        let mut session: *mut SlangcSession = ptr::null_mut();
        assert_eq!(
            slangc_createSession(ptr::null(), ptr::null(), &mut session),
            SLANGC_E_INVALID_ARG
        );
        assert!(session.is_null());

        let mut module: *mut SlangcModule = ptr::null_mut();
        assert_eq!(
            slangc_loadModule(ptr::null(), c"x".as_ptr(), &mut module, ptr::null_mut()),
            SLANGC_E_INVALID_ARG
        );
        assert!(module.is_null());

        assert_eq!(slangc_findProfile(ptr::null(), c"vs_5_0".as_ptr()), 0);
    }
}

#[test]
fn test_find_profile() {
    unsafe {
        let mut global: *mut SlangcGlobalSession = ptr::null_mut();
        assert_eq!(slangc_createGlobalSession(&mut global), SLANGC_OK);

        let profile = slangc_findProfile(global, c"vs_5_0".as_ptr());
        assert_ne!(profile, 0, "vs_5_0 should resolve");
        assert_eq!(
            slangc_findProfile(global, c"vs_5_0".as_ptr()),
            profile,
            "lookup should be deterministic"
        );
        assert_eq!(slangc_findProfile(global, c"bogus_9_9".as_ptr()), 0);

        // Sessions can be seeded with a resolved profile; 0 is rejected.
        let mut session: *mut SlangcSession = ptr::null_mut();
        assert_eq!(
            slangc_createSessionWithProfile(global, profile, ptr::null(), &mut session),
            SLANGC_OK
        );
        assert!(!session.is_null());
        slangc_releaseSession(session);

        let mut rejected: *mut SlangcSession = ptr::null_mut();
        assert_eq!(
            slangc_createSessionWithProfile(global, 0, ptr::null(), &mut rejected),
            SLANGC_E_INVALID_ARG
        );
        assert!(rejected.is_null());

        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_preprocessor_macros_and_warnings() {
    unsafe {
        let mut global: *mut SlangcGlobalSession = ptr::null_mut();
        assert_eq!(slangc_createGlobalSession(&mut global), SLANGC_OK);

        let macros = [c"BRIGHTNESS=0.5".as_ptr(), c"BRIGHTNESS=0.9".as_ptr()];
        let desc = SlangcSessionDesc {
            targets: ptr::null(),
            targetCount: 0,
            searchPaths: ptr::null(),
            searchPathCount: 0,
            preprocessorMacros: macros.as_ptr(),
            preprocessorMacroCount: 2,
            matrixLayoutMode: SLANGC_MATRIX_LAYOUT_COLUMN_MAJOR,
        };
        let mut session: *mut SlangcSession = ptr::null_mut();
        assert_eq!(slangc_createSession(global, &desc, &mut session), SLANGC_OK);

        let source = b"
@fragment
fn shade() -> @location(0) vec4<f32> {
    return vec4<f32>(BRIGHTNESS, 0.0, 0.0, 1.0);
}
\0";
        let mut module: *mut SlangcModule = ptr::null_mut();
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        let result = slangc_loadModuleFromSource(
            session,
            c"Shade".as_ptr(),
            c"shade.wgsl".as_ptr(),
            source.as_ptr() as *const _,
            source.len() - 1,
            &mut module,
            &mut diagnostics,
        );
        assert_eq!(result, SLANGC_OK, "{}", get_diagnostic_text(diagnostics));

        // The redefinition warning arrives as advisory diagnostics on success.
        assert!(!diagnostics.is_null());
        let text = get_diagnostic_text(diagnostics);
        assert!(text.contains("BRIGHTNESS"), "warning should name the macro: {}", text);

        slangc_releaseBlob(diagnostics);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_legacy_compile_request_is_not_implemented() {
    unsafe {
        let (global, session) = make_session();

        let mut request: *mut SlangcCompileRequest = ptr::null_mut();
        assert_eq!(
            slangc_createCompileRequest(session, &mut request),
            SLANGC_E_NOT_IMPLEMENTED
        );
        assert!(request.is_null(), "no request object may be produced");

        assert_eq!(
            slangc_addTranslationUnit(
                ptr::null_mut(),
                SLANGC_SOURCE_LANGUAGE_WGSL,
                c"x.wgsl".as_ptr(),
                c"fn f() {}".as_ptr(),
            ),
            -1
        );
        assert_eq!(
            slangc_addEntryPoint(ptr::null_mut(), 0, c"f".as_ptr(), SLANGC_STAGE_COMPUTE),
            -1
        );
        assert_eq!(
            slangc_setTarget(ptr::null_mut(), SLANGC_TARGET_SPIRV),
            SLANGC_E_NOT_IMPLEMENTED
        );
        assert_eq!(slangc_compile(ptr::null_mut()), SLANGC_E_NOT_IMPLEMENTED);

        let mut code: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_getCompiledCode(ptr::null_mut(), 0, &mut code),
            SLANGC_E_NOT_IMPLEMENTED
        );
        assert!(code.is_null());
        let mut diagnostics: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_getDiagnosticOutput(ptr::null_mut(), &mut diagnostics),
            SLANGC_E_NOT_IMPLEMENTED
        );
        assert!(diagnostics.is_null());

        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_wgsl_target_emits_text() {
    unsafe {
        let mut global: *mut SlangcGlobalSession = ptr::null_mut();
        assert_eq!(slangc_createGlobalSession(&mut global), SLANGC_OK);

        let targets = [SLANGC_TARGET_WGSL];
        let desc = SlangcSessionDesc {
            targets: targets.as_ptr(),
            targetCount: 1,
            searchPaths: ptr::null(),
            searchPathCount: 0,
            preprocessorMacros: ptr::null(),
            preprocessorMacroCount: 0,
            matrixLayoutMode: SLANGC_MATRIX_LAYOUT_COLUMN_MAJOR,
        };
        let mut session: *mut SlangcSession = ptr::null_mut();
        assert_eq!(slangc_createSession(global, &desc, &mut session), SLANGC_OK);

        let module = load_simple_module(session);
        let mut fragment: *mut SlangcEntryPoint = ptr::null_mut();
        assert_eq!(
            slangc_findEntryPoint(
                module,
                c"simpleFragment".as_ptr(),
                SLANGC_STAGE_FRAGMENT,
                &mut fragment,
                ptr::null_mut(),
            ),
            SLANGC_OK
        );
        let mut component: *mut SlangcComponentType = ptr::null_mut();
        assert_eq!(
            slangc_createEntryPointComponentType(fragment, &mut component),
            SLANGC_OK
        );

        let mut code: *mut SlangcBlob = ptr::null_mut();
        assert_eq!(
            slangc_getEntryPointCode(component, 0, 0, &mut code, ptr::null_mut()),
            SLANGC_OK
        );
        let text = String::from_utf8(get_blob_data(code)).expect("WGSL output is UTF-8");
        assert!(text.contains("simpleFragment"));

        slangc_releaseBlob(code);
        slangc_releaseComponentType(component);
        slangc_releaseEntryPoint(fragment);
        slangc_releaseModule(module);
        slangc_releaseSession(session);
        slangc_releaseGlobalSession(global);
    }
}

#[test]
fn test_version_string_is_static() {
    unsafe {
        let version = slangc_getVersionString();
        assert!(!version.is_null());
        let text = CStr::from_ptr(version).to_string_lossy();
        assert!(text.starts_with("slangc "), "{}", text);
        assert_eq!(version, slangc_getVersionString());
    }
}
