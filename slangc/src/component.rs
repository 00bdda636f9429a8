//! Component type exports: composition, linking, code generation

use std::sync::Arc;

use slangc_engine::{Component, ComponentKind};

use crate::blob::{self, SlangcBlob, blob_from_bytes};
use crate::module::{SlangcEntryPoint, SlangcModule};
use crate::result::{self, SlangcResult};
use crate::session::SlangcSession;
use crate::{enums, handle_ref, into_handle, release_handle};

/// A composable unit of linkable program content. The kind tag is
/// authoritative; payload accessors check it and never reinterpret.
pub struct SlangcComponentType {
    pub(crate) inner: Component,
}

fn kind_to_raw(kind: ComponentKind) -> i32 {
    match kind {
        ComponentKind::Module => enums::SLANGC_COMPONENT_TYPE_MODULE,
        ComponentKind::EntryPoint => enums::SLANGC_COMPONENT_TYPE_ENTRY_POINT,
        ComponentKind::Composite => enums::SLANGC_COMPONENT_TYPE_COMPOSITE,
    }
}

/// Builds a component type from a module plus, when supplied, exactly one
/// of its entry points.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createModuleComponentType(
    session: *const SlangcSession,
    module: *const SlangcModule,
    entryPoint: *const SlangcEntryPoint,
    outComponentType: *mut *mut SlangcComponentType,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outComponentType.is_null() {
        return result::invalid_arg("output component type pointer is null");
    }
    *outComponentType = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(session) = handle_ref(session) else {
        return result::invalid_arg("session is null");
    };
    let Some(module) = handle_ref(module) else {
        return result::invalid_arg("module is null");
    };

    let mut parts = vec![Component::Module(Arc::clone(&module.inner))];
    if let Some(entry_point) = handle_ref(entryPoint) {
        parts.push(Component::EntryPoint(Arc::clone(&entry_point.inner)));
    }
    match session.inner.create_composite(&parts) {
        Ok((composite, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outComponentType = into_handle(SlangcComponentType {
                inner: Component::Composite(composite),
            });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Wraps a single entry point as a component type.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createEntryPointComponentType(
    entryPoint: *const SlangcEntryPoint,
    outComponentType: *mut *mut SlangcComponentType,
) -> SlangcResult {
    if outComponentType.is_null() {
        return result::invalid_arg("output component type pointer is null");
    }
    *outComponentType = std::ptr::null_mut();
    let Some(entry_point) = handle_ref(entryPoint) else {
        return result::invalid_arg("entry point is null");
    };
    *outComponentType = into_handle(SlangcComponentType {
        inner: Component::EntryPoint(Arc::clone(&entry_point.inner)),
    });
    result::success()
}

/// Builds a composite from an ordered component list. Order fixes the
/// flattened entry-point index space: a module contributes no entry
/// points, an entry point one, a composite its own flattened list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_createCompositeComponentType(
    session: *const SlangcSession,
    componentTypes: *const *const SlangcComponentType,
    componentTypeCount: i32,
    outComposite: *mut *mut SlangcComponentType,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outComposite.is_null() {
        return result::invalid_arg("output composite pointer is null");
    }
    *outComposite = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(session) = handle_ref(session) else {
        return result::invalid_arg("session is null");
    };
    if componentTypeCount <= 0 {
        return result::invalid_arg("a composite needs at least one component");
    }
    if componentTypes.is_null() {
        return result::invalid_arg("component type array is null");
    }

    let mut parts = Vec::with_capacity(componentTypeCount as usize);
    for i in 0..componentTypeCount as usize {
        match handle_ref(*componentTypes.add(i)) {
            Some(component) => parts.push(component.inner.clone()),
            None => return result::invalid_arg(&format!("component type entry {i} is null")),
        }
    }
    match session.inner.create_composite(&parts) {
        Ok((composite, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outComposite = into_handle(SlangcComponentType {
                inner: Component::Composite(composite),
            });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Resolves a component's graph into a fully linked composite, written as
/// a new handle; the input handle stays valid and separately owned.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_linkComponentType(
    componentType: *const SlangcComponentType,
    outLinked: *mut *mut SlangcComponentType,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outLinked.is_null() {
        return result::invalid_arg("output component type pointer is null");
    }
    *outLinked = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(component) = handle_ref(componentType) else {
        return result::invalid_arg("component type is null");
    };
    match component.inner.link() {
        Ok((linked, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outLinked = into_handle(SlangcComponentType {
                inner: Component::Composite(linked),
            });
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// The kind tag of a component type. A null handle reports the module
/// kind, the documented fallback.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getComponentTypeKind(
    componentType: *const SlangcComponentType,
) -> i32 {
    match handle_ref(componentType) {
        Some(component) => kind_to_raw(component.inner.kind()),
        None => enums::SLANGC_COMPONENT_TYPE_MODULE,
    }
}

/// The module payload of a module component type, as a new handle the
/// caller releases. Null plus error state on a kind mismatch.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getComponentTypeModule(
    componentType: *const SlangcComponentType,
) -> *mut SlangcModule {
    let Some(component) = handle_ref(componentType) else {
        result::invalid_arg("component type is null");
        return std::ptr::null_mut();
    };
    match &component.inner {
        Component::Module(module) => {
            result::success();
            into_handle(SlangcModule {
                inner: Arc::clone(module),
            })
        }
        other => {
            result::invalid_arg(&format!(
                "component type holds {:?}, not a module",
                other.kind()
            ));
            std::ptr::null_mut()
        }
    }
}

/// The entry point payload of an entry-point component type, as a new
/// handle the caller releases. Null plus error state on a kind mismatch.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getComponentTypeEntryPoint(
    componentType: *const SlangcComponentType,
) -> *mut SlangcEntryPoint {
    let Some(component) = handle_ref(componentType) else {
        result::invalid_arg("component type is null");
        return std::ptr::null_mut();
    };
    match &component.inner {
        Component::EntryPoint(entry_point) => {
            result::success();
            into_handle(SlangcEntryPoint {
                inner: Arc::clone(entry_point),
            })
        }
        other => {
            result::invalid_arg(&format!(
                "component type holds {:?}, not an entry point",
                other.kind()
            ));
            std::ptr::null_mut()
        }
    }
}

/// Compiled code for one entry point on one session target. Both indices
/// are zero-based and validated before any backend work; out-of-range is
/// an invalid-argument failure, distinct from codegen failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_getEntryPointCode(
    componentType: *const SlangcComponentType,
    entryPointIndex: i32,
    targetIndex: i32,
    outCode: *mut *mut SlangcBlob,
    outDiagnostics: *mut *mut SlangcBlob,
) -> SlangcResult {
    if outCode.is_null() {
        return result::invalid_arg("output code pointer is null");
    }
    *outCode = std::ptr::null_mut();
    if !outDiagnostics.is_null() {
        *outDiagnostics = std::ptr::null_mut();
    }
    let Some(component) = handle_ref(componentType) else {
        return result::invalid_arg("component type is null");
    };
    if entryPointIndex < 0 {
        return result::invalid_arg("entry point index is negative");
    }
    if targetIndex < 0 {
        return result::invalid_arg("target index is negative");
    }
    match component
        .inner
        .entry_point_code(entryPointIndex as usize, targetIndex as usize)
    {
        Ok((code, diags)) => {
            blob::write_diagnostics(outDiagnostics, &diags);
            *outCode = blob_from_bytes(code);
            result::success()
        }
        Err(err) => {
            blob::write_error_diagnostics(outDiagnostics, &err);
            result::engine_failure(&err)
        }
    }
}

/// Releases a component type handle. Null is a no-op; constituents
/// survive through the engine's shared ownership.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn slangc_releaseComponentType(componentType: *mut SlangcComponentType) {
    release_handle(componentType);
}
