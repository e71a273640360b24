//! Error type for generated request extractors

use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for extraction
pub type ExtractResult<T> = Result<T, ExtractError>;

/// A request value that could not be converted to its field type.
///
/// The context is the `source:key` pair from the field annotation, so the
/// error reads `query:limit: invalid digit found in string`.
#[derive(Error, Debug)]
#[error("{context}: {source}")]
pub struct ExtractError {
    context: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl ExtractError {
    /// Wrap a conversion failure with the `source:key` it was read from
    pub fn new<E>(context: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }

    /// The `source:key` pair, e.g. `header:X-Page`
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Consume the error and return the underlying conversion failure
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
