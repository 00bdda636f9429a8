//! Component types: composable units of linkable program content
//!
//! A component type is a closed sum over a module, an entry point, or a
//! composite of other component types. Composites own their constituents
//! through shared references, so a caller releasing its own handle to a
//! constituent never invalidates a composite built from it.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::codegen;
use crate::error::{self, Diagnostics, Error, Result};
use crate::module::{self, EntryPoint, Module};
use crate::session::Session;

/// Discriminant of a [`Component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Module,
    EntryPoint,
    Composite,
}

/// A composable unit of linkable program content.
#[derive(Clone)]
pub enum Component {
    Module(Arc<Module>),
    EntryPoint(Arc<EntryPoint>),
    Composite(Arc<Composite>),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Module(_) => ComponentKind::Module,
            Component::EntryPoint(_) => ComponentKind::EntryPoint,
            Component::Composite(_) => ComponentKind::Composite,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        match self {
            Component::Module(m) => m.session(),
            Component::EntryPoint(ep) => ep.module().session(),
            Component::Composite(c) => c.session(),
        }
    }

    /// Entry points contributed to a composition, flattened depth-first. A
    /// bare module contributes none; entry points come from entry-point
    /// components and nested composites, in the order they were introduced.
    fn collect_entry_points(&self, out: &mut Vec<Arc<EntryPoint>>) {
        match self {
            Component::Module(_) => {}
            Component::EntryPoint(ep) => out.push(Arc::clone(ep)),
            Component::Composite(c) => out.extend(c.entry_points.iter().cloned()),
        }
    }

    fn collect_modules(&self, seen: &mut Vec<String>, out: &mut Vec<Arc<Module>>) {
        match self {
            Component::Module(m) => collect_module(m, seen, out),
            Component::EntryPoint(ep) => collect_module(ep.module(), seen, out),
            Component::Composite(c) => {
                for m in &c.modules {
                    collect_module(m, seen, out);
                }
            }
        }
    }

    /// Resolves this component's graph into a fully linked composite.
    ///
    /// Produces a new composite; this component stays valid and separately
    /// owned.
    pub fn link(&self) -> Result<(Arc<Composite>, Diagnostics)> {
        error::record(self.link_inner())
    }

    fn link_inner(&self) -> Result<(Arc<Composite>, Diagnostics)> {
        let (composite, mut diags) = match self {
            Component::Composite(c) => (Arc::clone(c), Diagnostics::default()),
            other => Composite::compose(other.session(), std::slice::from_ref(other))?,
        };
        let program = composite.build_linked()?;
        let linked = Arc::new(Composite {
            session: Arc::clone(&composite.session),
            parts: composite.parts.clone(),
            modules: composite.modules.clone(),
            entry_points: composite.entry_points.clone(),
            linked: Mutex::new(Some(program)),
        });
        diags.push(format!(
            "note: linked program with {} entry point(s) across {} module(s)",
            linked.entry_points.len(),
            linked.modules.len()
        ));
        Ok((linked, diags))
    }

    /// Terminal operation: backend code for one entry point on one session
    /// target. Both indices are zero-based and validated before any backend
    /// work happens.
    pub fn entry_point_code(
        &self,
        entry_point_index: usize,
        target_index: usize,
    ) -> Result<(Vec<u8>, Diagnostics)> {
        error::record(self.entry_point_code_inner(entry_point_index, target_index))
    }

    fn entry_point_code_inner(
        &self,
        entry_point_index: usize,
        target_index: usize,
    ) -> Result<(Vec<u8>, Diagnostics)> {
        let composite = match self {
            Component::Composite(c) => Arc::clone(c),
            other => Composite::compose(other.session(), std::slice::from_ref(other))?.0,
        };
        composite.entry_point_code(entry_point_index, target_index)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component::{:?}", self.kind())
    }
}

fn collect_module(module: &Arc<Module>, seen: &mut Vec<String>, out: &mut Vec<Arc<Module>>) {
    if seen.iter().any(|n| n == module.name()) {
        return;
    }
    for import in module.imports() {
        collect_module(import, seen, out);
    }
    seen.push(module.name().to_string());
    out.push(Arc::clone(module));
}

/// A component type built by combining other component types; the linkable
/// unit code generation operates on.
pub struct Composite {
    session: Arc<Session>,
    parts: Vec<Component>,
    /// Transitive module set in dependency-first constituent order, one
    /// entry per module name.
    modules: Vec<Arc<Module>>,
    /// Flattened depth-first entry point list; fixes the index space for
    /// [`Composite::entry_point_code`].
    entry_points: Vec<Arc<EntryPoint>>,
    linked: Mutex<Option<Arc<LinkedProgram>>>,
}

pub(crate) struct LinkedProgram {
    pub source: String,
    pub ir: naga::Module,
    pub info: naga::valid::ModuleInfo,
}

impl Composite {
    pub(crate) fn compose(
        session: &Arc<Session>,
        parts: &[Component],
    ) -> Result<(Arc<Composite>, Diagnostics)> {
        if parts.is_empty() {
            return Err(Error::InvalidArgument(
                "a composite needs at least one component".into(),
            ));
        }
        for part in parts {
            if !Arc::ptr_eq(part.session(), session) {
                return Err(Error::InvalidArgument(
                    "all components of a composite must come from the same session".into(),
                ));
            }
        }

        let mut entry_points = Vec::new();
        let mut modules = Vec::new();
        let mut seen = Vec::new();
        for part in parts {
            part.collect_entry_points(&mut entry_points);
            part.collect_modules(&mut seen, &mut modules);
        }

        let mut diags = Diagnostics::default();
        for (i, ep) in entry_points.iter().enumerate() {
            if entry_points[..i].iter().any(|e| e.name() == ep.name()) {
                diags.push(format!(
                    "warning: entry point '{}' appears more than once in the composition",
                    ep.name()
                ));
            }
        }

        log::debug!(
            "composed component type: {} part(s), {} module(s), {} entry point(s)",
            parts.len(),
            modules.len(),
            entry_points.len()
        );
        Ok((
            Arc::new(Composite {
                session: Arc::clone(session),
                parts: parts.to_vec(),
                modules,
                entry_points,
                linked: Mutex::new(None),
            }),
            diags,
        ))
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// The flattened entry point list, in composition order.
    pub fn entry_points(&self) -> &[Arc<EntryPoint>] {
        &self.entry_points
    }

    pub(crate) fn entry_point_code(
        &self,
        entry_point_index: usize,
        target_index: usize,
    ) -> Result<(Vec<u8>, Diagnostics)> {
        // Index validation happens before any backend work so an
        // out-of-range index is reported as such, never as a codegen error.
        if entry_point_index >= self.entry_points.len() {
            return Err(Error::IndexOutOfRange {
                what: "entry point",
                index: entry_point_index,
                count: self.entry_points.len(),
            });
        }
        let targets = self.session.targets();
        if target_index >= targets.len() {
            return Err(Error::IndexOutOfRange {
                what: "target",
                index: target_index,
                count: targets.len(),
            });
        }

        let program = self.ensure_linked()?;
        codegen::generate(
            &program,
            &self.entry_points[entry_point_index],
            &targets[target_index],
            &self.session,
        )
    }

    /// Returns the linked program, linking a self-contained composite on
    /// first use.
    fn ensure_linked(&self) -> Result<Arc<LinkedProgram>> {
        let mut slot = self.linked.lock().expect("linked-program lock poisoned");
        if let Some(program) = slot.as_ref() {
            return Ok(Arc::clone(program));
        }
        let program = self.build_linked()?;
        *slot = Some(Arc::clone(&program));
        Ok(program)
    }

    fn build_linked(&self) -> Result<Arc<LinkedProgram>> {
        let mut merged = String::new();
        let mut seen = Vec::new();
        for m in &self.modules {
            module::append_unit(m, &mut seen, &mut merged);
        }

        let (ir, info) = module::check_source(&merged, "linked program")
            .map_err(|diagnostics| Error::Link { diagnostics })?;

        for ep in &self.entry_points {
            let present = ir
                .entry_points
                .iter()
                .any(|candidate| candidate.name == ep.name());
            if !present {
                return Err(Error::Link {
                    diagnostics: format!(
                        "error: entry point '{}' is not defined by any module in the composition",
                        ep.name()
                    ),
                });
            }
        }

        log::debug!(
            "linked program: {} byte(s) of merged source, {} module(s)",
            merged.len(),
            self.modules.len()
        );
        Ok(Arc::new(LinkedProgram {
            source: merged,
            ir,
            info,
        }))
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("parts", &self.parts.len())
            .field("modules", &self.modules.len())
            .field("entry_points", &self.entry_points.len())
            .finish()
    }
}
