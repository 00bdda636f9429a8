//! Compile targets, shader stages, source languages, and layout modes

use std::fmt;

/// Output format a session can generate code for.
///
/// The list is closed and versioned; formats without a backend in this build
/// stay in the enum and fail at code generation with a clear diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileTarget {
    Unknown,
    None,
    Hlsl,
    Glsl,
    Spirv,
    SpirvAsm,
    Dxbc,
    DxbcAsm,
    Dxil,
    DxilAsm,
    CSource,
    CppSource,
    CudaSource,
    Ptx,
    Cubin,
    Metal,
    MetalLib,
    HostCallable,
    ShaderSharedLibrary,
    ShaderHostCallable,
    Wgsl,
}

impl CompileTarget {
    /// Returns the lowercase target name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            CompileTarget::Unknown => "unknown",
            CompileTarget::None => "none",
            CompileTarget::Hlsl => "hlsl",
            CompileTarget::Glsl => "glsl",
            CompileTarget::Spirv => "spirv",
            CompileTarget::SpirvAsm => "spirv-asm",
            CompileTarget::Dxbc => "dxbc",
            CompileTarget::DxbcAsm => "dxbc-asm",
            CompileTarget::Dxil => "dxil",
            CompileTarget::DxilAsm => "dxil-asm",
            CompileTarget::CSource => "c",
            CompileTarget::CppSource => "cpp",
            CompileTarget::CudaSource => "cuda",
            CompileTarget::Ptx => "ptx",
            CompileTarget::Cubin => "cubin",
            CompileTarget::Metal => "metal",
            CompileTarget::MetalLib => "metallib",
            CompileTarget::HostCallable => "host-callable",
            CompileTarget::ShaderSharedLibrary => "shader-shared-library",
            CompileTarget::ShaderHostCallable => "shader-host-callable",
            CompileTarget::Wgsl => "wgsl",
        }
    }
}

impl fmt::Display for CompileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shader pipeline stage an entry point is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    None,
    Vertex,
    Hull,
    Domain,
    Geometry,
    Fragment,
    Compute,
    RayGeneration,
    Intersection,
    AnyHit,
    ClosestHit,
    Miss,
    Callable,
    Mesh,
    Amplification,
}

impl Stage {
    /// Returns the lowercase stage name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::None => "none",
            Stage::Vertex => "vertex",
            Stage::Hull => "hull",
            Stage::Domain => "domain",
            Stage::Geometry => "geometry",
            Stage::Fragment => "fragment",
            Stage::Compute => "compute",
            Stage::RayGeneration => "ray-generation",
            Stage::Intersection => "intersection",
            Stage::AnyHit => "any-hit",
            Stage::ClosestHit => "closest-hit",
            Stage::Miss => "miss",
            Stage::Callable => "callable",
            Stage::Mesh => "mesh",
            Stage::Amplification => "amplification",
        }
    }

    /// Maps the stage onto the front end's pipeline model, when it has one.
    pub(crate) fn to_naga(self) -> Option<naga::ShaderStage> {
        match self {
            Stage::Vertex => Some(naga::ShaderStage::Vertex),
            Stage::Fragment => Some(naga::ShaderStage::Fragment),
            Stage::Compute => Some(naga::ShaderStage::Compute),
            _ => None,
        }
    }

    pub(crate) fn from_naga(stage: naga::ShaderStage) -> Stage {
        match stage {
            naga::ShaderStage::Vertex => Stage::Vertex,
            naga::ShaderStage::Fragment => Stage::Fragment,
            naga::ShaderStage::Compute => Stage::Compute,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Language a translation unit is written in.
///
/// Only WGSL has a front end in this build; the other values exist so the
/// public enumeration translates 1:1 and are rejected when a front end is
/// actually required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceLanguage {
    #[default]
    Unknown,
    Slang,
    Hlsl,
    Glsl,
    C,
    Cpp,
    Wgsl,
}

/// Matrix storage convention recorded on a session.
///
/// The WGSL front end fixes column-major semantics; the session records the
/// caller's choice and reports it back through [`crate::Session::matrix_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixLayoutMode {
    RowMajor,
    #[default]
    ColumnMajor,
}
