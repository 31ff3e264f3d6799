//! # Metaforge
//!
//! Statically typed class generation from property-bag reflection dumps.
//!
//! Metaforge reconstructs a runtime property-bag type system (classes
//! identified by 32-bit hashes, typed properties, inheritance, default
//! values) as a forest of statically typed class declarations.
//!
//! ## Quick Start
//!
//! ```ignore
//! use metaforge::prelude::*;
//!
//! let dump = parse_dump(&std::fs::read_to_string("meta.json")?)?;
//! let names = NameTables::from_names(class_names, property_names);
//! let forest = Generator::new(&dump, &names).generate();
//! let source = metaforge::codegen::csharp::emit_forest(&forest);
//! ```
//!
//! ## Crate Organization
//!
//! - [`hash`] - Case-insensitive FNV1a hashing
//! - [`schema`] - Dump model, JSON decoding, validation
//! - [`codegen`] - Name resolution, type mapping, declaration generation,
//!   C# emission

pub mod prelude;

/// Case-insensitive FNV1a hashing.
pub mod hash {
    pub use metaforge_hash::*;
}

/// Dump model, decoding, and validation.
pub mod schema {
    pub use metaforge_schema::*;
}

/// Declaration generation from decoded dumps.
pub mod codegen {
    pub use metaforge_codegen::*;
}
