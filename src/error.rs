//! Typed errors surfaced by the rendering pipeline and its I/O plumbing.
//!
//! Callers at the crate boundary match on these variants; the binary wraps
//! them with `anyhow` context for reporting.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for mdp.
#[derive(Debug, Error)]
pub enum Error {
    /// Input document or custom template could not be read.
    #[error("Failed to read {}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Custom template content is malformed.
    #[error("Invalid template {}: {issue}", path.display())]
    Template {
        /// Template file path.
        path: PathBuf,
        /// What is wrong with the template.
        issue: TemplateIssue,
    },

    /// Composed document could not be written.
    #[error("Failed to write {}", path.display())]
    Write {
        /// Destination that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Host OS has no native "open with default application" facility.
    #[error("Previewing is not supported on this platform")]
    UnsupportedPlatform,

    /// The OS launcher could not be started or reported failure.
    #[error("Failed to open {} in default viewer", path.display())]
    Launch {
        /// File handed to the launcher.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Placeholder slots recognised in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Title,
    Body,
}

impl Placeholder {
    /// Name used inside `{{ }}` delimiters.
    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}

/// Reason a template failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateIssue {
    #[error("unclosed placeholder on line {line}")]
    Unclosed { line: usize },

    #[error("unknown placeholder `{name}` on line {line}")]
    UnknownPlaceholder { name: String, line: usize },

    #[error("missing required placeholder {0}")]
    MissingPlaceholder(Placeholder),
}
