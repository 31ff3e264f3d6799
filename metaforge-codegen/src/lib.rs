//! # Metaforge Codegen
//!
//! Class declaration generation from reflection dumps.
//!
//! This crate provides:
//! - Hash-to-name resolution with deterministic fallbacks
//! - Recursive type mapping over the closed property tag set
//! - Default-value synthesis into type-correct initializers
//! - A language-agnostic declaration tree and a C# pretty-printer

pub mod builder;
pub mod csharp;
pub mod decl;
pub mod defaults;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod names;

pub use builder::Diagnostic;
pub use decl::{ClassDecl, DeclKind, InitExpr, Primitive, PropertyDecl, TypeExpr};
pub use error::CodegenError;
pub use generator::{Forest, GeneratedClass, Generator};
pub use names::{NameTable, NameTables};

/// Generates the declaration forest for a decoded dump.
#[must_use]
pub fn generate(dump: &metaforge_schema::MetaDump, names: &NameTables) -> Forest {
    Generator::new(dump, names).generate()
}

/// Generates C# class declarations from a JSON dump string and literal name
/// lists.
///
/// # Arguments
/// * `json` - reflection dump content
/// * `classes` - known class names, hashed to build the class table
/// * `properties` - known property names, hashed to build the property table
///
/// # Returns
/// Generated C# code as a string.
///
/// # Errors
/// Returns `CodegenError` if the dump cannot be decoded. Per-property
/// failures degrade into diagnostics instead; inspect [`generate`]'s forest
/// for them.
pub fn generate_csharp<C, P, S, T>(
    json: &str,
    classes: C,
    properties: P,
) -> Result<String, CodegenError>
where
    C: IntoIterator<Item = S>,
    P: IntoIterator<Item = T>,
    S: Into<String>,
    T: Into<String>,
{
    let dump = metaforge_schema::parse_dump(json)?;
    let names = NameTables::from_names(classes, properties);
    let forest = generate(&dump, &names);
    Ok(csharp::emit_forest(&forest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = r#"{
        "version": "1",
        "classes": {
            "45cd899f": {
                "base": "",
                "secondaryBases": [],
                "is": { "secondaryBase": false, "interface": false },
                "properties": {
                    "a1f805da": { "type": "F32" }
                },
                "defaults": { "a1f805da": 1.5 }
            }
        }
    }"#;

    #[test]
    fn test_generate_csharp_end_to_end() {
        let output =
            generate_csharp(DUMP, ["VfxSystemDefinitionData"], ["skinScale"]).expect("generation");
        assert!(output.contains("public class VfxSystemDefinitionData : IMetaClass"));
        assert!(output.contains("public float SkinScale { get; set; } = 1.5f;"));
    }

    #[test]
    fn test_generate_csharp_rejects_bad_dump() {
        let result = generate_csharp("{ not json", Vec::<String>::new(), Vec::<String>::new());
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }

    #[test]
    fn test_write_forest_to_file() {
        let dump = metaforge_schema::parse_dump(DUMP).expect("Failed to parse");
        let names = NameTables::from_names(["VfxSystemDefinitionData"], ["skinScale"]);
        let forest = generate(&dump, &names);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("MetaClasses.cs");
        csharp::write_forest(&path, &forest).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, csharp::emit_forest(&forest));
    }
}
