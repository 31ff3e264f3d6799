//! # Metaforge Schema
//!
//! Reflection dump model and decoder.
//!
//! This crate provides:
//! - The typed, read-only model of a property-bag reflection dump
//! - JSON dump decoding with hash-key conversion
//! - Structural validation against the closed type system

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::parse_dump;
pub use types::{
    ClassFlags, ContainerDef, MapDef, MetaClass, MetaDump, MetaProperty, PropertyKind, ValueTree,
};
pub use validation::validate_dump;
