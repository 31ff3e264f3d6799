//! C# rendering of the declaration tree.
//!
//! The core produces a language-agnostic forest; this module is the C#
//! pretty-printer for it. Everything language-specific lives here, driven by
//! the constant tables below.

pub mod classes;
pub mod types;

pub use classes::ClassEmitter;

use crate::error::CodegenError;
use crate::generator::Forest;
use std::io::Write;
use std::path::Path;

/// Namespace containing the generated class declarations.
pub const CLASSES_NAMESPACE: &str = "Meta.Classes";

/// Namespaces the generated declarations depend on.
pub const REQUIRED_NAMESPACES: [&str; 4] = [
    "System.Numerics",
    "System.Collections.Generic",
    "Meta",
    "Meta.Attributes",
];

/// Target-language names of the wrapper and root types.
pub mod wrappers {
    /// Universal root base interface.
    pub const ROOT: &str = "IMetaClass";
    /// 32-bit name hash wrapper.
    pub const HASH: &str = "MetaHash";
    /// 32-bit object link wrapper.
    pub const OBJECT_LINK: &str = "MetaObjectLink";
    /// 64-bit archive chunk link wrapper.
    pub const WAD_CHUNK_LINK: &str = "MetaWadEntryLink";
    /// Bit-packed boolean wrapper.
    pub const BIT_BOOL: &str = "MetaBitBool";
    /// Optionally-present value wrapper.
    pub const OPTIONAL: &str = "MetaOptional";
    /// Ordered collection wrapper.
    pub const CONTAINER: &str = "MetaContainer";
    /// Unordered collection wrapper.
    pub const UNORDERED_CONTAINER: &str = "MetaUnorderedContainer";
    /// Owned nested instance wrapper.
    pub const EMBEDDED: &str = "MetaEmbedded";
    /// Ordered key-value mapping.
    pub const MAP: &str = "Dictionary";
}

/// Renders a forest to C# source text.
#[must_use]
pub fn emit_forest(forest: &Forest) -> String {
    ClassEmitter::new(forest).emit()
}

/// Renders a forest to C# source text and writes it to a file.
///
/// # Errors
/// Returns `CodegenError::Io` if the file cannot be written.
pub fn write_forest(path: &Path, forest: &Forest) -> Result<(), CodegenError> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(emit_forest(forest).as_bytes())?;
    Ok(())
}
