//! Error types for the generator

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Failure while generating the companion file for one input.
///
/// Fields that cannot be extracted (unknown source, unsupported type,
/// private field) are not errors; they are left out of the model.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The input file could not be read
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid Rust source
    #[error("failed to parse {}:{line}:{column}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: syn::Error,
    },

    /// The input path does not name a `.rs` file
    #[error("{} is not a Rust source file (expected a .rs extension)", path.display())]
    InvalidInput { path: PathBuf },

    /// The generated file could not be written
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering the generated code failed
    #[error("failed to render generated code")]
    Render(#[from] std::fmt::Error),
}

impl CodegenError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a parse error, locating it by the span of the offending token
    pub(crate) fn parse(path: &Path, source: syn::Error) -> Self {
        let start = source.span().start();
        Self::Parse {
            path: path.to_path_buf(),
            line: start.line,
            column: start.column + 1,
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
