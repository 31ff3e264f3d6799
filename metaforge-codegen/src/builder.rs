//! Per-class declaration building.
//!
//! Composes the type mapper, default synthesizer, and name tables into one
//! [`ClassDecl`] per schema class. Failures are property-local: a malformed
//! property is skipped, an unsupported default loses only its initializer,
//! and sibling properties and classes are unaffected.

use crate::decl::{ClassDecl, DeclKind, PropertyDecl, ROOT_CLASS};
use crate::defaults::synthesize;
use crate::error::CodegenError;
use crate::mapper::map_type;
use crate::names::NameTables;
use metaforge_schema::{MetaClass, MetaProperty, PropertyKind};
use std::fmt;

/// A property-local failure recorded while building the forest.
#[derive(Debug)]
pub struct Diagnostic {
    /// Hash of the class being built.
    pub class_hash: u32,
    /// Hash of the affected property, if the failure was property-scoped.
    pub property_hash: Option<u32>,
    /// The underlying error.
    pub error: CodegenError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property_hash {
            Some(property) => write!(
                f,
                "class {:08x} property {:08x}: {}",
                self.class_hash, property, self.error
            ),
            None => write!(f, "class {:08x}: {}", self.class_hash, self.error),
        }
    }
}

/// Builds the declaration for a single class.
///
/// Never fails: failures degrade to diagnostics and the affected property is
/// dropped (malformed type) or declared without an initializer (unsupported
/// default).
#[must_use]
pub fn build_class(
    hash: u32,
    class: &MetaClass,
    names: &NameTables,
) -> (ClassDecl, Vec<Diagnostic>) {
    let name = names.class_name(hash);
    let mut diagnostics = Vec::new();

    let (kind, is_abstract) = if class.is.secondary_base {
        (DeclKind::Interface, false)
    } else {
        // An interface-like class that is never used as a secondary base is
        // declared concrete but abstract.
        (DeclKind::Class, class.is.interface)
    };

    let mut properties = Vec::with_capacity(class.properties.len());
    for (&property_hash, property) in &class.properties {
        match build_property(hash, &name, property_hash, property, class, names) {
            Ok((decl, diagnostic)) => {
                properties.push(decl);
                diagnostics.extend(diagnostic);
            }
            Err(error) => diagnostics.push(Diagnostic {
                class_hash: hash,
                property_hash: Some(property_hash),
                error,
            }),
        }
    }

    let decl = ClassDecl {
        hash,
        name,
        source_name: names.classes.get(hash).map(str::to_string),
        kind,
        is_abstract,
        bases: resolve_bases(class, names),
        properties,
    };
    (decl, diagnostics)
}

/// Resolves the ordered base-reference list.
fn resolve_bases(class: &MetaClass, names: &NameTables) -> Vec<String> {
    match (class.base, class.secondary_bases.as_slice()) {
        // A class carrying both a primary base and secondary bases keeps only
        // the primary base. Preserved for output compatibility; likely a
        // workaround for one known schema anomaly rather than a general rule.
        (Some(base), _) => vec![names.class_name(base)],
        (None, []) => vec![ROOT_CLASS.to_string()],
        (None, secondary) => secondary.iter().map(|&h| names.class_name(h)).collect(),
    }
}

fn build_property(
    class_hash: u32,
    class_name: &str,
    property_hash: u32,
    property: &MetaProperty,
    class: &MetaClass,
    names: &NameTables,
) -> Result<(PropertyDecl, Option<Diagnostic>), CodegenError> {
    let ty = map_type(property, names)?;

    let mut name = stylize_property_name(&names.property_name(property_hash));
    if name == class_name {
        // A member may not share its enclosing type's name.
        name = format!("m{name}");
    }

    let (init, diagnostic) = match class.default_of(property_hash) {
        None => (None, None),
        Some(value) => match synthesize(property, &ty, value) {
            Ok(init) => (Some(init), None),
            Err(error) => (
                None,
                Some(Diagnostic {
                    class_hash,
                    property_hash: Some(property_hash),
                    error,
                }),
            ),
        },
    };

    let decl = PropertyDecl {
        hash: property_hash,
        name,
        source_name: names.properties.get(property_hash).map(str::to_string),
        kind: property.kind,
        other_class: property.other_class.map(|h| names.class_name(h)),
        item_kind: property
            .map
            .map(|m| m.key)
            .or_else(|| property.container.map(|c| c.kind))
            .unwrap_or(PropertyKind::None),
        value_kind: property.map.map_or(PropertyKind::None, |m| m.value),
        ty,
        init,
    };
    Ok((decl, diagnostic))
}

/// Stylizes a raw property name into a member name: strips a leading `m`
/// before an uppercase letter, otherwise capitalizes a leading lowercase
/// letter unless a digit follows it.
fn stylize_property_name(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let second = chars.next();

    if first == 'm' && second.is_some_and(char::is_uppercase) {
        name[1..].to_string()
    } else if first.is_lowercase() && !second.is_some_and(|c| c.is_ascii_digit()) {
        let mut stylized = String::with_capacity(name.len());
        stylized.extend(first.to_uppercase());
        stylized.push_str(&name[first.len_utf8()..]);
        stylized
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{InitExpr, Primitive, TypeExpr};
    use metaforge_schema::parse_dump;

    fn single_class(body: &str) -> (u32, MetaClass) {
        let json = format!(
            r#"{{ "version": "1", "classes": {{ "00000001": {body} }} }}"#
        );
        let dump = parse_dump(&json).expect("Failed to parse");
        (1, dump.classes[&1].clone())
    }

    #[test]
    fn test_stylize_strips_member_prefix() {
        assert_eq!(stylize_property_name("mName"), "Name");
        assert_eq!(stylize_property_name("mResistFraction"), "ResistFraction");
    }

    #[test]
    fn test_stylize_capitalizes_lowercase() {
        assert_eq!(stylize_property_name("position"), "Position");
        assert_eq!(stylize_property_name("x"), "X");
    }

    #[test]
    fn test_stylize_leaves_others_unchanged() {
        // Fallback names keep their decimal form.
        assert_eq!(stylize_property_name("m2712847316"), "m2712847316");
        assert_eq!(stylize_property_name("Position"), "Position");
        assert_eq!(stylize_property_name("m"), "m");
        assert_eq!(stylize_property_name("x2"), "x2");
    }

    #[test]
    fn test_kind_modifier_asymmetry() {
        let cases = [
            (false, false, DeclKind::Class, false),
            (false, true, DeclKind::Class, true),
            (true, false, DeclKind::Interface, false),
            (true, true, DeclKind::Interface, false),
        ];
        for (secondary_base, interface, kind, is_abstract) in cases {
            let (hash, class) = single_class(&format!(
                r#"{{ "is": {{ "secondaryBase": {secondary_base}, "interface": {interface} }},
                     "properties": {{}} }}"#
            ));
            let (decl, diagnostics) = build_class(hash, &class, &NameTables::default());
            assert!(diagnostics.is_empty());
            assert_eq!(decl.kind, kind, "secondaryBase={secondary_base} interface={interface}");
            assert_eq!(decl.is_abstract, is_abstract);
        }
    }

    #[test]
    fn test_base_precedence_primary_wins() {
        let (hash, class) = single_class(
            r#"{ "base": "000000aa", "secondaryBases": ["000000bb", "000000cc"],
                 "is": { "secondaryBase": false, "interface": false },
                 "properties": {} }"#,
        );
        let (decl, _) = build_class(hash, &class, &NameTables::default());
        assert_eq!(decl.bases, vec!["Classaa".to_string()]);
    }

    #[test]
    fn test_base_precedence_secondary_in_order() {
        let (hash, class) = single_class(
            r#"{ "base": "", "secondaryBases": ["000000bb", "000000cc"],
                 "is": { "secondaryBase": false, "interface": false },
                 "properties": {} }"#,
        );
        let (decl, _) = build_class(hash, &class, &NameTables::default());
        assert_eq!(decl.bases, vec!["Classbb".to_string(), "Classcc".to_string()]);
    }

    #[test]
    fn test_base_precedence_root_fallback() {
        let (hash, class) = single_class(
            r#"{ "is": { "secondaryBase": false, "interface": false }, "properties": {} }"#,
        );
        let (decl, _) = build_class(hash, &class, &NameTables::default());
        assert_eq!(decl.bases, vec![ROOT_CLASS.to_string()]);
    }

    #[test]
    fn test_property_name_collision_with_class() {
        let names = NameTables::from_names(["Mesh"], ["mesh"]);
        let hash = metaforge_hash::hash_lower("Mesh");
        let json = format!(
            r#"{{ "version": "1", "classes": {{ "{hash:08x}": {{
                "is": {{ "secondaryBase": false, "interface": false }},
                "properties": {{ "{:08x}": {{ "type": "String" }} }}
            }} }} }}"#,
            metaforge_hash::hash_lower("mesh")
        );
        let dump = parse_dump(&json).unwrap();
        let (decl, _) = build_class(hash, &dump.classes[&hash], &names);
        assert_eq!(decl.name, "Mesh");
        assert_eq!(decl.properties[0].name, "mMesh");
    }

    #[test]
    fn test_malformed_property_skipped_sibling_survives() {
        let (hash, class) = single_class(
            r#"{ "is": { "secondaryBase": false, "interface": false },
                 "properties": {
                     "000000aa": { "type": "Struct" },
                     "000000bb": { "type": "Bool" }
                 } }"#,
        );
        let (decl, diagnostics) = build_class(hash, &class, &NameTables::default());
        assert_eq!(decl.properties.len(), 1);
        assert_eq!(decl.properties[0].hash, 0xbb);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].property_hash, Some(0xaa));
        assert!(matches!(
            diagnostics[0].error,
            CodegenError::MalformedSchema { .. }
        ));
    }

    #[test]
    fn test_unsupported_default_drops_initializer_only() {
        let (hash, class) = single_class(
            r#"{ "is": { "secondaryBase": false, "interface": false },
                 "properties": { "000000aa": { "type": "Bool" } },
                 "defaults": { "000000aa": "yes" } }"#,
        );
        let (decl, diagnostics) = build_class(hash, &class, &NameTables::default());
        assert_eq!(decl.properties.len(), 1);
        assert!(decl.properties[0].init.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics[0].error,
            CodegenError::UnsupportedDefault { .. }
        ));
    }

    #[test]
    fn test_partial_defaults_map() {
        let (hash, class) = single_class(
            r#"{ "is": { "secondaryBase": false, "interface": false },
                 "properties": {
                     "000000aa": { "type": "F32" },
                     "000000bb": { "type": "F32" }
                 },
                 "defaults": { "000000aa": 2.0 } }"#,
        );
        let (decl, diagnostics) = build_class(hash, &class, &NameTables::default());
        assert!(diagnostics.is_empty());
        assert_eq!(decl.properties[0].init, Some(InitExpr::Float(2.0)));
        assert!(decl.properties[1].init.is_none());
    }

    #[test]
    fn test_attributes_carry_origin() {
        let names = NameTables::from_names(["VfxSystemDefinitionData"], ["skinScale"]);
        let json = r#"{ "version": "1", "classes": { "45cd899f": {
            "is": { "secondaryBase": false, "interface": false },
            "properties": {
                "a1f805da": { "type": "F32" },
                "000000aa": { "type": "Container", "container": { "type": "I32" } }
            }
        } } }"#;
        let dump = parse_dump(json).unwrap();
        let (decl, _) = build_class(0x45cd899f, &dump.classes[&0x45cd899f], &names);
        assert_eq!(decl.source_name.as_deref(), Some("VfxSystemDefinitionData"));

        let skin = &decl.properties[0];
        assert_eq!(skin.hash, 0xa1f805da);
        assert_eq!(skin.source_name.as_deref(), Some("skinScale"));
        assert_eq!(skin.kind, PropertyKind::F32);
        assert_eq!(skin.item_kind, PropertyKind::None);

        let container = &decl.properties[1];
        assert!(container.source_name.is_none());
        assert_eq!(container.name, "m170");
        assert_eq!(container.item_kind, PropertyKind::I32);
        assert_eq!(container.value_kind, PropertyKind::None);
        assert_eq!(
            container.ty,
            TypeExpr::Container(Box::new(TypeExpr::Primitive(Primitive::I32)))
        );
    }
}
