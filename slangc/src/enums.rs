//! Public enumerations as `int32_t` constant sets
//!
//! Values cross the ABI as raw integers and are converted through total
//! tables: every raw value maps to some engine value (unknown input falls
//! to the `UNKNOWN`/`NONE` sentinel), and every engine value maps back to
//! exactly one raw constant.

use slangc_engine::{CompileTarget, MatrixLayoutMode, SourceLanguage, Stage};

pub const SLANGC_SOURCE_LANGUAGE_UNKNOWN: i32 = 0;
pub const SLANGC_SOURCE_LANGUAGE_SLANG: i32 = 1;
pub const SLANGC_SOURCE_LANGUAGE_HLSL: i32 = 2;
pub const SLANGC_SOURCE_LANGUAGE_GLSL: i32 = 3;
pub const SLANGC_SOURCE_LANGUAGE_C: i32 = 4;
pub const SLANGC_SOURCE_LANGUAGE_CPP: i32 = 5;
pub const SLANGC_SOURCE_LANGUAGE_WGSL: i32 = 6;

pub const SLANGC_TARGET_UNKNOWN: i32 = 0;
pub const SLANGC_TARGET_NONE: i32 = 1;
pub const SLANGC_TARGET_HLSL: i32 = 2;
pub const SLANGC_TARGET_GLSL: i32 = 3;
pub const SLANGC_TARGET_SPIRV: i32 = 4;
pub const SLANGC_TARGET_SPIRV_ASM: i32 = 5;
pub const SLANGC_TARGET_DXBC: i32 = 6;
pub const SLANGC_TARGET_DXBC_ASM: i32 = 7;
pub const SLANGC_TARGET_DXIL: i32 = 8;
pub const SLANGC_TARGET_DXIL_ASM: i32 = 9;
pub const SLANGC_TARGET_C_SOURCE: i32 = 10;
pub const SLANGC_TARGET_CPP_SOURCE: i32 = 11;
pub const SLANGC_TARGET_CUDA_SOURCE: i32 = 12;
pub const SLANGC_TARGET_PTX: i32 = 13;
pub const SLANGC_TARGET_CUBIN: i32 = 14;
pub const SLANGC_TARGET_METAL: i32 = 15;
pub const SLANGC_TARGET_METAL_LIB: i32 = 16;
pub const SLANGC_TARGET_HOST_CALLABLE: i32 = 17;
pub const SLANGC_TARGET_SHADER_SHARED_LIBRARY: i32 = 18;
pub const SLANGC_TARGET_SHADER_HOST_CALLABLE: i32 = 19;
pub const SLANGC_TARGET_WGSL: i32 = 20;

pub const SLANGC_STAGE_NONE: i32 = 0;
pub const SLANGC_STAGE_VERTEX: i32 = 1;
pub const SLANGC_STAGE_HULL: i32 = 2;
pub const SLANGC_STAGE_DOMAIN: i32 = 3;
pub const SLANGC_STAGE_GEOMETRY: i32 = 4;
pub const SLANGC_STAGE_FRAGMENT: i32 = 5;
pub const SLANGC_STAGE_COMPUTE: i32 = 6;
pub const SLANGC_STAGE_RAY_GENERATION: i32 = 7;
pub const SLANGC_STAGE_INTERSECTION: i32 = 8;
pub const SLANGC_STAGE_ANY_HIT: i32 = 9;
pub const SLANGC_STAGE_CLOSEST_HIT: i32 = 10;
pub const SLANGC_STAGE_MISS: i32 = 11;
pub const SLANGC_STAGE_CALLABLE: i32 = 12;
pub const SLANGC_STAGE_MESH: i32 = 13;
pub const SLANGC_STAGE_AMPLIFICATION: i32 = 14;

pub const SLANGC_MATRIX_LAYOUT_ROW_MAJOR: i32 = 0;
pub const SLANGC_MATRIX_LAYOUT_COLUMN_MAJOR: i32 = 1;

pub const SLANGC_COMPONENT_TYPE_MODULE: i32 = 0;
pub const SLANGC_COMPONENT_TYPE_ENTRY_POINT: i32 = 1;
pub const SLANGC_COMPONENT_TYPE_COMPOSITE: i32 = 2;

pub(crate) fn source_language_from_raw(raw: i32) -> SourceLanguage {
    match raw {
        SLANGC_SOURCE_LANGUAGE_SLANG => SourceLanguage::Slang,
        SLANGC_SOURCE_LANGUAGE_HLSL => SourceLanguage::Hlsl,
        SLANGC_SOURCE_LANGUAGE_GLSL => SourceLanguage::Glsl,
        SLANGC_SOURCE_LANGUAGE_C => SourceLanguage::C,
        SLANGC_SOURCE_LANGUAGE_CPP => SourceLanguage::Cpp,
        SLANGC_SOURCE_LANGUAGE_WGSL => SourceLanguage::Wgsl,
        _ => SourceLanguage::Unknown,
    }
}

pub(crate) fn source_language_to_raw(language: SourceLanguage) -> i32 {
    match language {
        SourceLanguage::Unknown => SLANGC_SOURCE_LANGUAGE_UNKNOWN,
        SourceLanguage::Slang => SLANGC_SOURCE_LANGUAGE_SLANG,
        SourceLanguage::Hlsl => SLANGC_SOURCE_LANGUAGE_HLSL,
        SourceLanguage::Glsl => SLANGC_SOURCE_LANGUAGE_GLSL,
        SourceLanguage::C => SLANGC_SOURCE_LANGUAGE_C,
        SourceLanguage::Cpp => SLANGC_SOURCE_LANGUAGE_CPP,
        SourceLanguage::Wgsl => SLANGC_SOURCE_LANGUAGE_WGSL,
    }
}

pub(crate) fn target_from_raw(raw: i32) -> CompileTarget {
    match raw {
        SLANGC_TARGET_NONE => CompileTarget::None,
        SLANGC_TARGET_HLSL => CompileTarget::Hlsl,
        SLANGC_TARGET_GLSL => CompileTarget::Glsl,
        SLANGC_TARGET_SPIRV => CompileTarget::Spirv,
        SLANGC_TARGET_SPIRV_ASM => CompileTarget::SpirvAsm,
        SLANGC_TARGET_DXBC => CompileTarget::Dxbc,
        SLANGC_TARGET_DXBC_ASM => CompileTarget::DxbcAsm,
        SLANGC_TARGET_DXIL => CompileTarget::Dxil,
        SLANGC_TARGET_DXIL_ASM => CompileTarget::DxilAsm,
        SLANGC_TARGET_C_SOURCE => CompileTarget::CSource,
        SLANGC_TARGET_CPP_SOURCE => CompileTarget::CppSource,
        SLANGC_TARGET_CUDA_SOURCE => CompileTarget::CudaSource,
        SLANGC_TARGET_PTX => CompileTarget::Ptx,
        SLANGC_TARGET_CUBIN => CompileTarget::Cubin,
        SLANGC_TARGET_METAL => CompileTarget::Metal,
        SLANGC_TARGET_METAL_LIB => CompileTarget::MetalLib,
        SLANGC_TARGET_HOST_CALLABLE => CompileTarget::HostCallable,
        SLANGC_TARGET_SHADER_SHARED_LIBRARY => CompileTarget::ShaderSharedLibrary,
        SLANGC_TARGET_SHADER_HOST_CALLABLE => CompileTarget::ShaderHostCallable,
        SLANGC_TARGET_WGSL => CompileTarget::Wgsl,
        _ => CompileTarget::Unknown,
    }
}

pub(crate) fn target_to_raw(target: CompileTarget) -> i32 {
    match target {
        CompileTarget::Unknown => SLANGC_TARGET_UNKNOWN,
        CompileTarget::None => SLANGC_TARGET_NONE,
        CompileTarget::Hlsl => SLANGC_TARGET_HLSL,
        CompileTarget::Glsl => SLANGC_TARGET_GLSL,
        CompileTarget::Spirv => SLANGC_TARGET_SPIRV,
        CompileTarget::SpirvAsm => SLANGC_TARGET_SPIRV_ASM,
        CompileTarget::Dxbc => SLANGC_TARGET_DXBC,
        CompileTarget::DxbcAsm => SLANGC_TARGET_DXBC_ASM,
        CompileTarget::Dxil => SLANGC_TARGET_DXIL,
        CompileTarget::DxilAsm => SLANGC_TARGET_DXIL_ASM,
        CompileTarget::CSource => SLANGC_TARGET_C_SOURCE,
        CompileTarget::CppSource => SLANGC_TARGET_CPP_SOURCE,
        CompileTarget::CudaSource => SLANGC_TARGET_CUDA_SOURCE,
        CompileTarget::Ptx => SLANGC_TARGET_PTX,
        CompileTarget::Cubin => SLANGC_TARGET_CUBIN,
        CompileTarget::Metal => SLANGC_TARGET_METAL,
        CompileTarget::MetalLib => SLANGC_TARGET_METAL_LIB,
        CompileTarget::HostCallable => SLANGC_TARGET_HOST_CALLABLE,
        CompileTarget::ShaderSharedLibrary => SLANGC_TARGET_SHADER_SHARED_LIBRARY,
        CompileTarget::ShaderHostCallable => SLANGC_TARGET_SHADER_HOST_CALLABLE,
        CompileTarget::Wgsl => SLANGC_TARGET_WGSL,
    }
}

pub(crate) fn stage_from_raw(raw: i32) -> Stage {
    match raw {
        SLANGC_STAGE_VERTEX => Stage::Vertex,
        SLANGC_STAGE_HULL => Stage::Hull,
        SLANGC_STAGE_DOMAIN => Stage::Domain,
        SLANGC_STAGE_GEOMETRY => Stage::Geometry,
        SLANGC_STAGE_FRAGMENT => Stage::Fragment,
        SLANGC_STAGE_COMPUTE => Stage::Compute,
        SLANGC_STAGE_RAY_GENERATION => Stage::RayGeneration,
        SLANGC_STAGE_INTERSECTION => Stage::Intersection,
        SLANGC_STAGE_ANY_HIT => Stage::AnyHit,
        SLANGC_STAGE_CLOSEST_HIT => Stage::ClosestHit,
        SLANGC_STAGE_MISS => Stage::Miss,
        SLANGC_STAGE_CALLABLE => Stage::Callable,
        SLANGC_STAGE_MESH => Stage::Mesh,
        SLANGC_STAGE_AMPLIFICATION => Stage::Amplification,
        _ => Stage::None,
    }
}

pub(crate) fn stage_to_raw(stage: Stage) -> i32 {
    match stage {
        Stage::None => SLANGC_STAGE_NONE,
        Stage::Vertex => SLANGC_STAGE_VERTEX,
        Stage::Hull => SLANGC_STAGE_HULL,
        Stage::Domain => SLANGC_STAGE_DOMAIN,
        Stage::Geometry => SLANGC_STAGE_GEOMETRY,
        Stage::Fragment => SLANGC_STAGE_FRAGMENT,
        Stage::Compute => SLANGC_STAGE_COMPUTE,
        Stage::RayGeneration => SLANGC_STAGE_RAY_GENERATION,
        Stage::Intersection => SLANGC_STAGE_INTERSECTION,
        Stage::AnyHit => SLANGC_STAGE_ANY_HIT,
        Stage::ClosestHit => SLANGC_STAGE_CLOSEST_HIT,
        Stage::Miss => SLANGC_STAGE_MISS,
        Stage::Callable => SLANGC_STAGE_CALLABLE,
        Stage::Mesh => SLANGC_STAGE_MESH,
        Stage::Amplification => SLANGC_STAGE_AMPLIFICATION,
    }
}

pub(crate) fn matrix_layout_from_raw(raw: i32) -> MatrixLayoutMode {
    match raw {
        SLANGC_MATRIX_LAYOUT_ROW_MAJOR => MatrixLayoutMode::RowMajor,
        _ => MatrixLayoutMode::ColumnMajor,
    }
}
