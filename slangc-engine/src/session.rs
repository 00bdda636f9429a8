//! Global sessions and compilation sessions

use std::path::PathBuf;
use std::sync::Arc;

use crate::component::{Component, Composite};
use crate::error::{self, Diagnostics, Error, Result};
use crate::flags::GlobalSessionFlags;
use crate::module::{self, Module};
use crate::preprocess::MacroDef;
use crate::profile::{self, ProfileId};
use crate::target::{CompileTarget, MatrixLayoutMode};

/// Version of the engine API accepted by [`GlobalSession::with_desc`].
pub const API_VERSION: u32 = 1;

/// Configuration for creating a [`GlobalSession`].
#[derive(Debug, Clone)]
pub struct GlobalSessionDesc {
    /// Requested API version; must not exceed [`API_VERSION`].
    pub api_version: u32,
    /// Extra directories consulted after each session's own search paths.
    pub search_paths: Vec<PathBuf>,
    pub flags: GlobalSessionFlags,
}

impl Default for GlobalSessionDesc {
    fn default() -> Self {
        GlobalSessionDesc {
            api_version: API_VERSION,
            search_paths: Vec::new(),
            flags: GlobalSessionFlags::empty(),
        }
    }
}

/// Process-scoped factory for compilation sessions and profile lookups.
///
/// A global session must outlive every session created from it; sessions
/// hold an `Arc` back to their global session, so the engine enforces this
/// structurally even when the C surface cannot.
///
/// Creating sessions from the same global session on multiple threads is
/// safe; the global session itself is immutable after construction.
#[derive(Debug)]
pub struct GlobalSession {
    desc: GlobalSessionDesc,
}

impl GlobalSession {
    /// Creates a global session with default settings.
    pub fn new() -> Result<Arc<Self>> {
        Self::with_desc(GlobalSessionDesc::default())
    }

    /// Creates a global session from an explicit descriptor.
    pub fn with_desc(desc: GlobalSessionDesc) -> Result<Arc<Self>> {
        error::record(if desc.api_version > API_VERSION {
            Err(Error::InvalidArgument(format!(
                "requested API version {} exceeds supported version {}",
                desc.api_version, API_VERSION
            )))
        } else {
            Ok(Arc::new(GlobalSession { desc }))
        })
    }

    pub fn flags(&self) -> GlobalSessionFlags {
        self.desc.flags
    }

    pub(crate) fn search_paths(&self) -> &[PathBuf] {
        &self.desc.search_paths
    }

    /// Resolves a profile name such as `vs_5_0` to its opaque ID.
    ///
    /// A profile ID is not an owned resource; there is nothing to release.
    pub fn find_profile(&self, name: &str) -> Option<ProfileId> {
        profile::find(name)
    }

    /// Creates a compilation session bound to this global session.
    ///
    /// A descriptor with no targets gets exactly one default SPIR-V target;
    /// a session with zero targets could never produce code, so the dead end
    /// is closed off here instead of surfacing later.
    pub fn create_session(self: &Arc<Self>, desc: SessionDesc) -> Result<Arc<Session>> {
        error::record(self.create_session_inner(desc))
    }

    fn create_session_inner(self: &Arc<Self>, desc: SessionDesc) -> Result<Arc<Session>> {
        let mut targets = desc.targets;
        if targets.is_empty() {
            targets.push(TargetDesc::new(CompileTarget::Spirv));
        }
        log::debug!(
            "creating session: {} target(s), {} search path(s), {} macro(s)",
            targets.len(),
            desc.search_paths.len(),
            desc.macros.len()
        );
        Ok(Arc::new(Session {
            global: Arc::clone(self),
            targets,
            search_paths: desc.search_paths,
            macros: desc.macros,
            matrix_layout: desc.matrix_layout,
            default_profile: desc.default_profile,
        }))
    }
}

/// One output format a session can generate code for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDesc {
    pub format: CompileTarget,
    /// Optional capability profile constraining this target.
    pub profile: Option<ProfileId>,
}

impl TargetDesc {
    pub fn new(format: CompileTarget) -> Self {
        TargetDesc {
            format,
            profile: None,
        }
    }
}

/// Configuration for creating a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionDesc {
    pub targets: Vec<TargetDesc>,
    pub search_paths: Vec<PathBuf>,
    pub macros: Vec<MacroDef>,
    pub matrix_layout: MatrixLayoutMode,
    /// Profile applied to targets that do not carry their own.
    pub default_profile: Option<ProfileId>,
}

/// A compilation environment: selected targets, search paths, preprocessor
/// macros, and matrix layout convention. Sessions load modules and compose
/// component types.
///
/// A session is immutable after creation and safe to share across threads;
/// the engine adds no locking of its own beyond the lazily linked program
/// cache inside composites.
#[derive(Debug)]
pub struct Session {
    global: Arc<GlobalSession>,
    targets: Vec<TargetDesc>,
    search_paths: Vec<PathBuf>,
    macros: Vec<MacroDef>,
    matrix_layout: MatrixLayoutMode,
    default_profile: Option<ProfileId>,
}

impl Session {
    pub fn global(&self) -> &Arc<GlobalSession> {
        &self.global
    }

    /// The ordered target list. Never empty.
    pub fn targets(&self) -> &[TargetDesc] {
        &self.targets
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub(crate) fn macros(&self) -> &[MacroDef] {
        &self.macros
    }

    pub fn matrix_layout(&self) -> MatrixLayoutMode {
        self.matrix_layout
    }

    pub fn default_profile(&self) -> Option<ProfileId> {
        self.default_profile
    }

    /// Loads a module by name, resolving `<name>.wgsl` through this
    /// session's search paths and then the global session's. `import`
    /// statements inside the module are resolved the same way, recursively.
    ///
    /// Diagnostics may be non-empty even on success (warnings); on failure
    /// the returned error carries the compiler output instead.
    pub fn load_module(self: &Arc<Self>, name: &str) -> Result<(Arc<Module>, Diagnostics)> {
        error::record(module::load_by_name(self, name))
    }

    /// Loads a module directly from source text. `path` is used only for
    /// diagnostic messages; the supplied text is what gets parsed.
    pub fn load_module_from_source(
        self: &Arc<Self>,
        name: &str,
        path: &str,
        source: &str,
    ) -> Result<(Arc<Module>, Diagnostics)> {
        error::record(module::load_from_source(self, name, path, source))
    }

    /// Builds a composite component type from an ordered list of
    /// constituents. Order is significant: it fixes the flattened
    /// entry-point index space used by code generation.
    pub fn create_composite(
        self: &Arc<Self>,
        parts: &[Component],
    ) -> Result<(Arc<Composite>, Diagnostics)> {
        error::record(Composite::compose(self, parts))
    }
}
