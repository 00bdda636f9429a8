//! Module loading and entry point resolution

use std::fmt;
use std::sync::Arc;

use crate::error::{Diagnostics, Error, Result};
use crate::preprocess::{self, Preprocessed};
use crate::session::Session;
use crate::target::Stage;

/// A parsed and semantically checked compilation unit.
///
/// Modules are produced by a [`Session`] either by name (resolved through
/// the search paths) or from caller-supplied source text. A module keeps its
/// resolved imports alive, so releasing an imported module elsewhere never
/// invalidates this one.
pub struct Module {
    session: Arc<Session>,
    name: String,
    path: String,
    /// Preprocessed source of this module alone, imports stripped.
    source: String,
    imports: Vec<Arc<Module>>,
    /// Entry points declared in this module's own source.
    entry_points: Vec<(String, Stage)>,
    /// Entry points visible in the checked unit, imports included.
    all_entry_points: Vec<(String, Stage)>,
}

impl Module {
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path the module was loaded from, or the logical path supplied with
    /// inline source. Used only in diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn imports(&self) -> &[Arc<Module>] {
        &self.imports
    }

    /// Name and stage of every entry point declared by this module itself.
    pub fn entry_points(&self) -> &[(String, Stage)] {
        &self.entry_points
    }

    pub(crate) fn all_entry_points(&self) -> &[(String, Stage)] {
        &self.all_entry_points
    }

    /// Checked entry point lookup: the named function must exist among this
    /// module's own entry points and be declared for the requested stage.
    ///
    /// A miss and a stage mismatch produce distinct diagnostics so the
    /// caller can tell them apart from the text alone.
    pub fn find_entry_point(self: &Arc<Self>, name: &str, stage: Stage) -> Result<Arc<EntryPoint>> {
        crate::error::record(self.find_entry_point_inner(name, stage))
    }

    fn find_entry_point_inner(self: &Arc<Self>, name: &str, stage: Stage) -> Result<Arc<EntryPoint>> {
        match self.entry_points.iter().find(|(n, _)| n == name) {
            None => Err(Error::NotFound {
                what: "entry point",
                name: format!("'{}' in module '{}'", name, self.name),
            }),
            Some((_, declared)) if *declared != stage => Err(Error::Compile {
                diagnostics: format!(
                    "error: entry point '{}' in module '{}' is declared for stage {}, not {}",
                    name, self.name, declared, stage
                ),
            }),
            Some((_, declared)) => Ok(Arc::new(EntryPoint {
                module: Arc::clone(self),
                name: name.to_string(),
                stage: *declared,
            })),
        }
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("imports", &self.imports.len())
            .field("entry_points", &self.entry_points)
            .finish()
    }
}

/// A stage-checked entry point located inside a [`Module`]. Holds its module
/// alive.
#[derive(Debug)]
pub struct EntryPoint {
    module: Arc<Module>,
    name: String,
    stage: Stage,
}

impl EntryPoint {
    pub fn module(&self) -> &Arc<Module> {
        &self.module
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }
}

/// One in-flight load graph. Deduplicates shared imports within a single
/// load and detects cycles; deliberately not kept across calls, since the
/// engine does no caching.
struct Loader<'a> {
    session: &'a Arc<Session>,
    loaded: Vec<Arc<Module>>,
    in_progress: Vec<String>,
}

pub(crate) fn load_by_name(
    session: &Arc<Session>,
    name: &str,
) -> Result<(Arc<Module>, Diagnostics)> {
    let mut diags = Diagnostics::default();
    let mut loader = Loader {
        session,
        loaded: Vec::new(),
        in_progress: Vec::new(),
    };
    let module = loader.by_name(name, &mut diags)?;
    Ok((module, diags))
}

pub(crate) fn load_from_source(
    session: &Arc<Session>,
    name: &str,
    path: &str,
    source: &str,
) -> Result<(Arc<Module>, Diagnostics)> {
    let mut diags = Diagnostics::default();
    let mut loader = Loader {
        session,
        loaded: Vec::new(),
        in_progress: Vec::new(),
    };
    let module = loader.from_text(name, path, source, &mut diags)?;
    Ok((module, diags))
}

impl Loader<'_> {
    fn by_name(&mut self, name: &str, diags: &mut Diagnostics) -> Result<Arc<Module>> {
        if let Some(existing) = self.loaded.iter().find(|m| m.name() == name) {
            return Ok(Arc::clone(existing));
        }
        if self.in_progress.iter().any(|n| n == name) {
            let mut chain = self.in_progress.join(" -> ");
            chain.push_str(" -> ");
            chain.push_str(name);
            diags.push(format!("error: cyclic import: {chain}"));
            return Err(Error::Compile {
                diagnostics: diags.to_text(),
            });
        }

        let file_name = format!("{name}.wgsl");
        let session_paths = self.session.search_paths().iter();
        let global_paths = self.session.global().search_paths().iter();
        let Some(path) = session_paths
            .chain(global_paths)
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
        else {
            diags.push(format!(
                "error: no module named '{name}' found on the search paths (looked for '{file_name}')"
            ));
            return Err(Error::Compile {
                diagnostics: diags.to_text(),
            });
        };

        let source = std::fs::read_to_string(&path)?;
        let path_text = path.display().to_string();
        self.from_text(name, &path_text, &source, diags)
    }

    fn from_text(
        &mut self,
        name: &str,
        path: &str,
        source: &str,
        diags: &mut Diagnostics,
    ) -> Result<Arc<Module>> {
        let Preprocessed {
            source,
            imports,
            warnings,
        } = preprocess::preprocess(source, self.session.macros());
        diags.extend(warnings);

        self.in_progress.push(name.to_string());
        let mut resolved = Vec::with_capacity(imports.len());
        for import in &imports {
            match self.by_name(import, diags) {
                Ok(module) => resolved.push(module),
                Err(err) => {
                    self.in_progress.pop();
                    return Err(err);
                }
            }
        }
        self.in_progress.pop();

        // The checked unit is the module's own source with every transitive
        // import prepended exactly once, dependencies first.
        let mut merged = String::new();
        let mut seen = Vec::new();
        for import in &resolved {
            append_unit(import, &mut seen, &mut merged);
        }
        merged.push_str(&source);

        let label = format!("{name} ({path})");
        let ir = match check_source(&merged, &label) {
            Ok((ir, _info)) => ir,
            Err(text) => {
                diags.push(text);
                return Err(Error::Compile {
                    diagnostics: diags.to_text(),
                });
            }
        };

        let all_entry_points: Vec<(String, Stage)> = ir
            .entry_points
            .iter()
            .map(|ep| (ep.name.clone(), Stage::from_naga(ep.stage)))
            .collect();
        let entry_points = all_entry_points
            .iter()
            .filter(|(n, _)| {
                !resolved
                    .iter()
                    .any(|dep| dep.all_entry_points().iter().any(|(dn, _)| dn == n))
            })
            .cloned()
            .collect();

        let module = Arc::new(Module {
            session: Arc::clone(self.session),
            name: name.to_string(),
            path: path.to_string(),
            source,
            imports: resolved,
            entry_points,
            all_entry_points,
        });
        log::debug!(
            "loaded module '{}' from {} ({} entry point(s), {} import(s))",
            module.name,
            module.path,
            module.entry_points.len(),
            module.imports.len()
        );
        self.loaded.push(Arc::clone(&module));
        Ok(module)
    }
}

/// Appends each module unit of `module`'s import graph exactly once,
/// dependencies before dependents.
pub(crate) fn append_unit(module: &Arc<Module>, seen: &mut Vec<String>, out: &mut String) {
    if seen.iter().any(|n| n == module.name()) {
        return;
    }
    for import in module.imports() {
        append_unit(import, seen, out);
    }
    seen.push(module.name().to_string());
    out.push_str(module.source());
    out.push('\n');
}

/// Parses and validates one source text, returning the checked IR or the
/// rendered diagnostic text.
pub(crate) fn check_source(
    source: &str,
    label: &str,
) -> std::result::Result<(naga::Module, naga::valid::ModuleInfo), String> {
    let ir = naga::front::wgsl::parse_str(source).map_err(|err| {
        format!("error in {label}:\n{}", err.emit_to_string(source))
    })?;
    let info = validate(&ir, source, label)?;
    Ok((ir, info))
}

/// Validates checked IR, returning the analysis or rendered diagnostics.
pub(crate) fn validate(
    ir: &naga::Module,
    source: &str,
    label: &str,
) -> std::result::Result<naga::valid::ModuleInfo, String> {
    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    )
    .validate(ir)
    .map_err(|err| {
        let rendered = naga::error::ShaderError {
            source: source.to_string(),
            label: Some(label.to_string()),
            inner: Box::new(err),
        };
        format!("error in {label}:\n{rendered}")
    })
}
