//! Backend code generation for linked programs
//!
//! Dispatches one (entry point, target) pair to the matching naga backend.
//! Binary targets come back as raw bytes; textual targets as UTF-8 bytes
//! without a trailing NUL, ready for the byte-oriented public surface.

use crate::component::LinkedProgram;
use crate::error::{Diagnostics, Error, Result};
use crate::flags::GlobalSessionFlags;
use crate::module::EntryPoint;
use crate::session::{Session, TargetDesc};
use crate::target::CompileTarget;

pub(crate) fn generate(
    program: &LinkedProgram,
    entry_point: &EntryPoint,
    target: &TargetDesc,
    session: &Session,
) -> Result<(Vec<u8>, Diagnostics)> {
    let code = match target.format {
        CompileTarget::Spirv => spirv(program, entry_point)?,
        CompileTarget::Wgsl => wgsl(program)?,
        CompileTarget::Hlsl => hlsl(program)?,
        CompileTarget::Metal => msl(program)?,
        CompileTarget::Glsl => {
            if !session
                .global()
                .flags()
                .contains(GlobalSessionFlags::ENABLE_GLSL)
            {
                return Err(Error::Codegen {
                    diagnostics:
                        "error: GLSL output is disabled; create the global session with GLSL enabled"
                            .into(),
                });
            }
            glsl(program, entry_point)?
        }
        unsupported => return Err(Error::UnsupportedTarget(unsupported)),
    };

    log::debug!(
        "generated {} byte(s) of {} for entry point '{}'",
        code.len(),
        target.format,
        entry_point.name()
    );
    Ok((code, Diagnostics::default()))
}

/// The naga stage for an entry point, or a codegen error for stages the
/// backends have no representation of.
fn naga_stage(entry_point: &EntryPoint) -> Result<naga::ShaderStage> {
    entry_point.stage().to_naga().ok_or_else(|| Error::Codegen {
        diagnostics: format!(
            "error: stage {} has no representation in the selected backend",
            entry_point.stage()
        ),
    })
}

fn codegen_error(backend: &str, err: impl std::fmt::Display) -> Error {
    Error::Codegen {
        diagnostics: format!("error in {backend} backend:\n{err}"),
    }
}

fn spirv(program: &LinkedProgram, entry_point: &EntryPoint) -> Result<Vec<u8>> {
    let pipeline = naga::back::spv::PipelineOptions {
        shader_stage: naga_stage(entry_point)?,
        entry_point: entry_point.name().to_string(),
    };
    let words = naga::back::spv::write_vec(
        &program.ir,
        &program.info,
        &naga::back::spv::Options::default(),
        Some(&pipeline),
    )
    .map_err(|err| codegen_error("SPIR-V", err))?;
    Ok(words.iter().flat_map(|word| word.to_le_bytes()).collect())
}

fn wgsl(program: &LinkedProgram) -> Result<Vec<u8>> {
    let text = naga::back::wgsl::write_string(
        &program.ir,
        &program.info,
        naga::back::wgsl::WriterFlags::empty(),
    )
    .map_err(|err| codegen_error("WGSL", err))?;
    Ok(text.into_bytes())
}

fn hlsl(program: &LinkedProgram) -> Result<Vec<u8>> {
    let options = naga::back::hlsl::Options::default();
    let mut text = String::new();
    let mut writer = naga::back::hlsl::Writer::new(&mut text, &options);
    writer
        .write(&program.ir, &program.info, None)
        .map_err(|err| codegen_error("HLSL", err))?;
    Ok(text.into_bytes())
}

fn msl(program: &LinkedProgram) -> Result<Vec<u8>> {
    let (text, _translation) = naga::back::msl::write_string(
        &program.ir,
        &program.info,
        &naga::back::msl::Options::default(),
        &naga::back::msl::PipelineOptions::default(),
    )
    .map_err(|err| codegen_error("MSL", err))?;
    Ok(text.into_bytes())
}

fn glsl(program: &LinkedProgram, entry_point: &EntryPoint) -> Result<Vec<u8>> {
    let options = naga::back::glsl::Options::default();
    let pipeline = naga::back::glsl::PipelineOptions {
        shader_stage: naga_stage(entry_point)?,
        entry_point: entry_point.name().to_string(),
        multiview: None,
    };
    let mut text = String::new();
    let mut writer = naga::back::glsl::Writer::new(
        &mut text,
        &program.ir,
        &program.info,
        &options,
        &pipeline,
        naga::proc::BoundsCheckPolicies::default(),
    )
    .map_err(|err| codegen_error("GLSL", err))?;
    writer.write().map_err(|err| codegen_error("GLSL", err))?;
    Ok(text.into_bytes())
}
