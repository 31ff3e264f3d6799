//! Error types for declaration generation.

use thiserror::Error;

/// Error type for declaration generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Dump decoding error.
    #[error("dump parse error: {0}")]
    Parse(#[from] metaforge_schema::ParseError),

    /// Dump validation error.
    #[error("schema error: {0}")]
    Schema(#[from] metaforge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A type tag, container, or map descriptor inconsistent with the closed
    /// type system. Fatal for the affected property only.
    #[error("malformed schema at tag `{tag}`: {reason}")]
    MalformedSchema {
        /// The offending type tag.
        tag: &'static str,
        /// What is inconsistent.
        reason: String,
    },

    /// A default value whose shape matches no synthesis rule for the
    /// property's static type. The property is declared without an
    /// initializer.
    #[error("unsupported default literal for `{tag}` property: {reason}")]
    UnsupportedDefault {
        /// The property's type tag.
        tag: &'static str,
        /// Why the value cannot be synthesized.
        reason: String,
    },
}

impl CodegenError {
    /// Creates a malformed schema error for the given tag.
    pub fn malformed(tag: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            tag,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported default literal error for the given tag.
    pub fn unsupported(tag: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedDefault {
            tag,
            reason: reason.into(),
        }
    }
}
