//! Dump validation utilities.
//!
//! Whole-dump structural checks against the closed type system. The generator
//! performs the same checks per property so a single bad entry only degrades
//! locally; this module is for callers that want to reject a dump up front.

use crate::error::SchemaError;
use crate::types::{MetaClass, MetaDump, MetaProperty, PropertyKind};

/// Validates a decoded dump for structural consistency.
///
/// # Errors
/// Returns the first `SchemaError` found: a tag outside its allowed position,
/// or a missing `otherClass`/`container`/`map` descriptor.
pub fn validate_dump(dump: &MetaDump) -> Result<(), SchemaError> {
    for (&class_hash, class) in &dump.classes {
        validate_class(class_hash, class)?;
    }
    Ok(())
}

fn validate_class(class_hash: u32, class: &MetaClass) -> Result<(), SchemaError> {
    for (&property_hash, property) in &class.properties {
        validate_property(class_hash, property_hash, property)?;
    }
    Ok(())
}

fn validate_property(
    class: u32,
    property: u32,
    prop: &MetaProperty,
) -> Result<(), SchemaError> {
    match prop.kind {
        PropertyKind::None => Err(SchemaError::InvalidTag {
            class,
            property,
            tag: PropertyKind::None.name(),
        }),
        PropertyKind::Struct | PropertyKind::Embedded => {
            require_other_class(class, property, prop, prop.kind)
        }
        PropertyKind::Container | PropertyKind::UnorderedContainer | PropertyKind::Optional => {
            let container = prop.container.ok_or(SchemaError::MissingContainer {
                class,
                property,
                tag: prop.kind.name(),
            })?;
            validate_element(class, property, prop, container.kind)
        }
        PropertyKind::Map => {
            let map = prop.map.ok_or(SchemaError::MissingMap { class, property })?;
            if !map.key.is_primitive() {
                return Err(SchemaError::NonPrimitiveMapKey {
                    class,
                    property,
                    tag: map.key.name(),
                });
            }
            validate_element(class, property, prop, map.value)
        }
        _ => Ok(()),
    }
}

/// Checks a nested element tag: Struct, Embedded, or a primitive.
fn validate_element(
    class: u32,
    property: u32,
    prop: &MetaProperty,
    element: PropertyKind,
) -> Result<(), SchemaError> {
    if element.requires_other_class() {
        require_other_class(class, property, prop, element)
    } else if element.is_primitive() {
        Ok(())
    } else {
        Err(SchemaError::InvalidTag {
            class,
            property,
            tag: element.name(),
        })
    }
}

fn require_other_class(
    class: u32,
    property: u32,
    prop: &MetaProperty,
    tag: PropertyKind,
) -> Result<(), SchemaError> {
    if prop.other_class.is_some() {
        Ok(())
    } else {
        Err(SchemaError::MissingOtherClass {
            class,
            property,
            tag: tag.name(),
        })
    }
}
