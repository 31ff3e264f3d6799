//! Property type mapping.
//!
//! Pure recursive mapping from a property's type descriptor to a [`TypeExpr`].
//! The tag set is closed: anything outside it, or a required descriptor that
//! is absent, is a malformed-schema error naming the offending tag.

use crate::decl::{Primitive, TypeExpr};
use crate::error::CodegenError;
use crate::names::NameTables;
use metaforge_schema::{MetaProperty, PropertyKind};

/// Maps a property descriptor to its target type expression.
///
/// # Errors
/// Returns `CodegenError::MalformedSchema` if the descriptor is structurally
/// inconsistent with the closed type system.
pub fn map_type(prop: &MetaProperty, names: &NameTables) -> Result<TypeExpr, CodegenError> {
    match prop.kind {
        PropertyKind::Struct => Ok(TypeExpr::Class(referenced_class(prop, prop.kind, names)?)),
        PropertyKind::Embedded => {
            Ok(TypeExpr::Embedded(referenced_class(prop, prop.kind, names)?))
        }
        PropertyKind::Container => {
            let element = element_type(prop, names)?;
            Ok(TypeExpr::Container(Box::new(element)))
        }
        PropertyKind::UnorderedContainer => {
            let element = element_type(prop, names)?;
            Ok(TypeExpr::UnorderedContainer(Box::new(element)))
        }
        PropertyKind::Optional => {
            let inner = element_type(prop, names)?;
            Ok(TypeExpr::Optional(Box::new(inner)))
        }
        PropertyKind::Map => {
            let map = prop
                .map
                .ok_or_else(|| CodegenError::malformed(prop.kind.name(), "missing map descriptor"))?;
            let key = Primitive::from_kind(map.key).ok_or_else(|| {
                CodegenError::malformed(map.key.name(), "map key type must be primitive")
            })?;
            let value = nested_type(prop, map.value, names)?;
            Ok(TypeExpr::Map(key, Box::new(value)))
        }
        kind => Ok(TypeExpr::Primitive(map_primitive(kind)?)),
    }
}

/// Maps the element type of a Container/UnorderedContainer/Optional property.
pub(crate) fn element_type(
    prop: &MetaProperty,
    names: &NameTables,
) -> Result<TypeExpr, CodegenError> {
    let container = prop
        .container
        .ok_or_else(|| CodegenError::malformed(prop.kind.name(), "missing container descriptor"))?;
    nested_type(prop, container.kind, names)
}

/// Maps a nested element tag: Struct, Embedded, or a primitive.
fn nested_type(
    prop: &MetaProperty,
    kind: PropertyKind,
    names: &NameTables,
) -> Result<TypeExpr, CodegenError> {
    match kind {
        PropertyKind::Struct => Ok(TypeExpr::Class(referenced_class(prop, kind, names)?)),
        PropertyKind::Embedded => Ok(TypeExpr::Embedded(referenced_class(prop, kind, names)?)),
        kind => Ok(TypeExpr::Primitive(map_primitive(kind)?)),
    }
}

/// Maps a primitive tag, rejecting compositional tags and `None`.
pub(crate) fn map_primitive(kind: PropertyKind) -> Result<Primitive, CodegenError> {
    Primitive::from_kind(kind)
        .ok_or_else(|| CodegenError::malformed(kind.name(), "not a primitive type tag"))
}

/// Resolves the class referenced by a Struct/Embedded position.
fn referenced_class(
    prop: &MetaProperty,
    tag: PropertyKind,
    names: &NameTables,
) -> Result<String, CodegenError> {
    let hash = prop
        .other_class
        .ok_or_else(|| CodegenError::malformed(tag.name(), "missing otherClass reference"))?;
    Ok(names.class_name(hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaforge_schema::{ContainerDef, MapDef};

    fn prop(kind: PropertyKind) -> MetaProperty {
        MetaProperty {
            kind,
            other_class: None,
            container: None,
            map: None,
        }
    }

    fn names() -> NameTables {
        NameTables::from_names(["VfxSystemDefinitionData"], Vec::<String>::new())
    }

    #[test]
    fn test_primitive_mapping() {
        let ty = map_type(&prop(PropertyKind::F32), &names()).unwrap();
        assert_eq!(ty, TypeExpr::Primitive(Primitive::F32));

        let ty = map_type(&prop(PropertyKind::WadChunkLink), &names()).unwrap();
        assert_eq!(ty, TypeExpr::Primitive(Primitive::WadChunkLink));
    }

    #[test]
    fn test_struct_resolves_other_class() {
        let mut p = prop(PropertyKind::Struct);
        p.other_class = Some(0x45cd899f);
        let ty = map_type(&p, &names()).unwrap();
        assert_eq!(ty, TypeExpr::Class("VfxSystemDefinitionData".to_string()));
    }

    #[test]
    fn test_struct_falls_back_on_unresolved_hash() {
        let mut p = prop(PropertyKind::Struct);
        p.other_class = Some(0xdeadbeef);
        let ty = map_type(&p, &names()).unwrap();
        assert_eq!(ty, TypeExpr::Class("Classdeadbeef".to_string()));
    }

    #[test]
    fn test_container_of_embedded() {
        let mut p = prop(PropertyKind::Container);
        p.other_class = Some(0x45cd899f);
        p.container = Some(ContainerDef {
            kind: PropertyKind::Embedded,
        });
        let ty = map_type(&p, &names()).unwrap();
        assert_eq!(
            ty,
            TypeExpr::Container(Box::new(TypeExpr::Embedded(
                "VfxSystemDefinitionData".to_string()
            )))
        );
    }

    #[test]
    fn test_optional_of_primitive() {
        let mut p = prop(PropertyKind::Optional);
        p.container = Some(ContainerDef {
            kind: PropertyKind::U16,
        });
        let ty = map_type(&p, &names()).unwrap();
        assert_eq!(
            ty,
            TypeExpr::Optional(Box::new(TypeExpr::Primitive(Primitive::U16)))
        );
    }

    #[test]
    fn test_map_of_hash_to_struct() {
        let mut p = prop(PropertyKind::Map);
        p.other_class = Some(0x45cd899f);
        p.map = Some(MapDef {
            key: PropertyKind::Hash,
            value: PropertyKind::Struct,
        });
        let ty = map_type(&p, &names()).unwrap();
        assert_eq!(
            ty,
            TypeExpr::Map(
                Primitive::Hash,
                Box::new(TypeExpr::Class("VfxSystemDefinitionData".to_string()))
            )
        );
    }

    #[test]
    fn test_missing_container_descriptor() {
        let err = map_type(&prop(PropertyKind::Optional), &names()).unwrap_err();
        match err {
            CodegenError::MalformedSchema { tag, .. } => assert_eq!(tag, "Optional"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_map_descriptor() {
        let err = map_type(&prop(PropertyKind::Map), &names()).unwrap_err();
        assert!(matches!(err, CodegenError::MalformedSchema { tag: "Map", .. }));
    }

    #[test]
    fn test_non_primitive_map_key() {
        let mut p = prop(PropertyKind::Map);
        p.map = Some(MapDef {
            key: PropertyKind::Struct,
            value: PropertyKind::I32,
        });
        let err = map_type(&p, &names()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::MalformedSchema { tag: "Struct", .. }
        ));
    }

    #[test]
    fn test_none_tag_is_malformed() {
        let err = map_type(&prop(PropertyKind::None), &names()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::MalformedSchema { tag: "None", .. }
        ));
    }

    #[test]
    fn test_struct_without_other_class() {
        let err = map_type(&prop(PropertyKind::Embedded), &names()).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::MalformedSchema {
                tag: "Embedded",
                ..
            }
        ));
    }
}
