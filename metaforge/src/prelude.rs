//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use metaforge::prelude::*;
//! ```

// Schema types
pub use metaforge_schema::{
    ClassFlags, MetaClass, MetaDump, MetaProperty, ParseError, PropertyKind, SchemaError,
    ValueTree, parse_dump, validate_dump,
};

// Codegen types
pub use metaforge_codegen::{
    ClassDecl, CodegenError, DeclKind, Diagnostic, Forest, GeneratedClass, Generator, InitExpr,
    NameTable, NameTables, Primitive, PropertyDecl, TypeExpr,
};

// Hashing
pub use metaforge_hash::hash_lower;
