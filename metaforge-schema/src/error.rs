//! Error types for dump decoding and validation.

use thiserror::Error;

/// Error type for dump decoding operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A hash field does not hold a valid hexadecimal value.
    #[error("invalid hash '{value}' in {context}")]
    InvalidHash {
        /// Where the value appeared (class, field).
        context: String,
        /// The offending value.
        value: String,
    },

    /// A property type tag outside the closed enumeration.
    #[error("unknown type tag '{value}' in {context}")]
    UnknownTypeTag {
        /// Where the tag appeared.
        context: String,
        /// The offending tag.
        value: String,
    },

    /// Two properties of one class decoded to the same hash.
    #[error("duplicate property '{property}' in class '{class}'")]
    DuplicateProperty {
        /// Owning class hash (hex).
        class: String,
        /// Duplicated property hash (hex).
        property: String,
    },
}

impl ParseError {
    /// Creates an invalid hash error.
    pub fn invalid_hash(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHash {
            context: context.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown type tag error.
    pub fn unknown_tag(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownTypeTag {
            context: context.into(),
            value: value.into(),
        }
    }
}

/// Error type for structural dump validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type tag requires a referenced class but none is present.
    #[error("property {property:08x} of class {class:08x}: tag `{tag}` requires otherClass")]
    MissingOtherClass {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
        /// The tag that requires the reference.
        tag: &'static str,
    },

    /// A container-like tag without a container descriptor.
    #[error("property {property:08x} of class {class:08x}: tag `{tag}` requires a container descriptor")]
    MissingContainer {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
        /// The tag that requires the descriptor.
        tag: &'static str,
    },

    /// A map tag without a map descriptor.
    #[error("property {property:08x} of class {class:08x}: Map requires a map descriptor")]
    MissingMap {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
    },

    /// A map key type that is not primitive.
    #[error("property {property:08x} of class {class:08x}: map key tag `{tag}` is not primitive")]
    NonPrimitiveMapKey {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
        /// The offending key tag.
        tag: &'static str,
    },

    /// A tag that cannot appear in the given position.
    #[error("property {property:08x} of class {class:08x}: tag `{tag}` is invalid here")]
    InvalidTag {
        /// Owning class hash.
        class: u32,
        /// Property hash.
        property: u32,
        /// The offending tag.
        tag: &'static str,
    },
}
