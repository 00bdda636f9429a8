//! Source preprocessing
//!
//! Runs before the front end sees a translation unit: session macros are
//! substituted as whole identifiers, and `import name;` lines are stripped
//! and collected so the loader can resolve them through the search paths.
//! Stripped lines are replaced with blank lines so diagnostic line numbers
//! still point into the caller's source.

/// A preprocessor macro definition supplied through the session descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDef {
    pub name: String,
    pub value: String,
}

impl MacroDef {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        MacroDef {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses the flat `NAME=VALUE` form used on the C surface. A bare
    /// `NAME` defines the macro to `1`.
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((name, value)) => MacroDef::new(name.trim(), value.trim()),
            None => MacroDef::new(text.trim(), "1"),
        }
    }
}

pub(crate) struct Preprocessed {
    pub source: String,
    pub imports: Vec<String>,
    pub warnings: Vec<String>,
}

pub(crate) fn preprocess(source: &str, macros: &[MacroDef]) -> Preprocessed {
    let mut warnings = Vec::new();
    for (i, m) in macros.iter().enumerate() {
        if macros[..i].iter().any(|earlier| earlier.name == m.name) {
            warnings.push(format!("warning: macro '{}' is defined more than once", m.name));
        }
    }

    let mut imports: Vec<String> = Vec::new();
    let mut stripped = String::with_capacity(source.len());
    for line in source.lines() {
        if let Some(name) = import_target(line) {
            if imports.iter().any(|i| i == name) {
                warnings.push(format!("warning: duplicate import of module '{name}'"));
            } else {
                imports.push(name.to_string());
            }
        } else {
            stripped.push_str(line);
        }
        stripped.push('\n');
    }

    Preprocessed {
        source: substitute(&stripped, macros),
        imports,
        warnings,
    }
}

/// Returns the module name when `line` is a well-formed `import name;`
/// statement. Malformed import lines are left in place for the parser to
/// report at the right location.
fn import_target(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix("import ")?.strip_suffix(';')?.trim();
    is_identifier(name).then_some(name)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whole-identifier macro substitution. WGSL has no string literals, so a
/// plain identifier scan is sufficient.
fn substitute(source: &str, macros: &[MacroDef]) -> String {
    if macros.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len());
    let mut chars = source.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_ascii_alphabetic() || c == '_' {
            let mut end = start;
            while let Some(&(i, ident_char)) = chars.peek() {
                if ident_char.is_ascii_alphanumeric() || ident_char == '_' {
                    end = i + ident_char.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            let ident = &source[start..end];
            match macros.iter().find(|m| m.name == ident) {
                Some(m) => out.push_str(&m.value),
                None => out.push_str(ident),
            }
        } else {
            out.push(c);
            chars.next();
        }
    }
    out
}
