//! Shader compilation engine behind the `slangc` C API
//!
//! This crate holds the safe core: sessions, module loading with `import`
//! resolution, composable component types, lazy linking, and per-target
//! code generation. The flat C surface in the `slangc` crate is a thin
//! translation layer over these types.
//!
//! # Example
//!
//! ```
//! use slangc_engine::{Component, GlobalSession, SessionDesc, Stage};
//!
//! let source = r#"
//!     @fragment
//!     fn solidColor() -> @location(0) vec4<f32> {
//!         return vec4<f32>(0.0, 1.0, 0.0, 1.0);
//!     }
//! "#;
//!
//! let global = GlobalSession::new().unwrap();
//! let session = global.create_session(SessionDesc::default()).unwrap();
//! let (module, _) = session
//!     .load_module_from_source("Solid", "solid.wgsl", source)
//!     .unwrap();
//! let entry = module.find_entry_point("solidColor", Stage::Fragment).unwrap();
//!
//! // Default session target is SPIR-V; index 0 selects it.
//! let component = Component::EntryPoint(entry);
//! let (code, _) = component.entry_point_code(0, 0).unwrap();
//! assert_eq!(&code[0..4], &[0x03, 0x02, 0x23, 0x07]);
//! ```

mod codegen;
mod component;
mod error;
mod flags;
mod module;
mod preprocess;
mod profile;
mod session;
mod target;

pub use component::{Component, ComponentKind, Composite};
pub use error::{Diagnostics, Error, Result, clear_internal_error, last_internal_error};
pub use flags::GlobalSessionFlags;
pub use module::{EntryPoint, Module};
pub use preprocess::MacroDef;
pub use profile::ProfileId;
pub use session::{
    API_VERSION, GlobalSession, GlobalSessionDesc, Session, SessionDesc, TargetDesc,
};
pub use target::{CompileTarget, MatrixLayoutMode, SourceLanguage, Stage};
