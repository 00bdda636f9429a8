//! Error types for engine operations

use std::cell::RefCell;

use thiserror::Error;

use crate::target::CompileTarget;

/// Error type for engine operations
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied value was null, out of range, or ill-formed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup by name (profile, module, entry point) found nothing
    #[error("{what} not found: {name}")]
    NotFound {
        /// What kind of thing was looked up
        what: &'static str,
        /// The name that missed
        name: String,
    },

    /// Parsing or semantic checking failed
    #[error("compilation failed:\n{diagnostics}")]
    Compile {
        /// Human-readable compiler output, suitable for direct display
        diagnostics: String,
    },

    /// Resolving a composite into a linked program failed
    #[error("link failed:\n{diagnostics}")]
    Link {
        /// Human-readable linker output
        diagnostics: String,
    },

    /// Backend code generation failed
    #[error("code generation failed:\n{diagnostics}")]
    Codegen {
        /// Human-readable backend output
        diagnostics: String,
    },

    /// The requested target has no backend in this build
    #[error("target {0} is not supported by this build")]
    UnsupportedTarget(CompileTarget),

    /// A caller-supplied index fell outside the valid range
    #[error("{what} index {index} is out of range ({count} available)")]
    IndexOutOfRange {
        /// Which index space was violated
        what: &'static str,
        /// The offending index
        index: usize,
        /// Number of valid entries
        count: usize,
    },

    /// An I/O error while resolving a module through the search paths
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Diagnostic text carried by this error, when the failing stage
    /// produced any.
    pub fn diagnostics(&self) -> Option<&str> {
        match self {
            Error::Compile { diagnostics }
            | Error::Link { diagnostics }
            | Error::Codegen { diagnostics } => Some(diagnostics),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Advisory messages produced alongside a result.
///
/// Diagnostics are independent of success or failure: a successful load may
/// carry warnings, and a failed one carries the error text inside the
/// returned [`Error`] instead.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub(crate) fn extend<I, S>(&mut self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for message in messages {
            self.messages.push(message.into());
        }
    }

    /// Returns true if no messages were produced.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Individual messages in emission order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All messages joined into one displayable block.
    pub fn to_text(&self) -> String {
        self.messages.join("\n")
    }
}

thread_local! {
    static LAST_INTERNAL: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Records the outcome of a fallible public operation in the calling
/// thread's internal-error slot. The slot is overwritten on every call so a
/// stale message is never misattributed to a later operation.
pub(crate) fn record<T>(result: Result<T>) -> Result<T> {
    LAST_INTERNAL.with(|slot| {
        *slot.borrow_mut() = result.as_ref().err().map(|e| e.to_string());
    });
    result
}

/// The last internal error message recorded on the calling thread, if the
/// most recent fallible operation on this thread failed.
pub fn last_internal_error() -> Option<String> {
    LAST_INTERNAL.with(|slot| slot.borrow().clone())
}

/// Clears the calling thread's internal-error slot.
pub fn clear_internal_error() {
    LAST_INTERNAL.with(|slot| slot.borrow_mut().take());
}
