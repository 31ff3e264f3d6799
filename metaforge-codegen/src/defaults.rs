//! Default value synthesis.
//!
//! Pure recursive conversion of a dynamically-typed default value into a
//! literal-construction expression consistent with the property's mapped
//! static type. Keyed on `(type tag, value shape)`; a pair outside the rule
//! table is an unsupported-default error, which callers degrade to a
//! declaration without an initializer.

use crate::decl::{InitExpr, Primitive, TypeExpr};
use crate::error::CodegenError;
use metaforge_schema::{MetaProperty, PropertyKind, ValueTree};

/// Synthesizes an initializer for a property from its dump default value.
///
/// `ty` must be the expression produced by mapping `prop`; referenced class
/// names are taken from it rather than re-resolved.
///
/// # Errors
/// Returns `CodegenError::UnsupportedDefault` when the value's shape matches
/// no rule for the property's type, and `CodegenError::MalformedSchema` when
/// the descriptor itself is inconsistent.
pub fn synthesize(
    prop: &MetaProperty,
    ty: &TypeExpr,
    value: &ValueTree,
) -> Result<InitExpr, CodegenError> {
    match prop.kind {
        PropertyKind::Struct => match value {
            ValueTree::Null => Ok(InitExpr::Null),
            other => Err(unsupported(prop.kind, other)),
        },
        PropertyKind::Embedded => match value {
            // The object's contents are ignored: an embedded default is
            // always a default-constructed nested instance.
            ValueTree::Object(_) => embedded_construct(prop.kind, ty),
            other => Err(unsupported(prop.kind, other)),
        },
        PropertyKind::Optional => synthesize_optional(prop, ty, value),
        PropertyKind::Container | PropertyKind::UnorderedContainer => match value {
            ValueTree::Object(_) | ValueTree::Array(_) => Ok(InitExpr::Construct {
                ty: ty.clone(),
                args: Vec::new(),
            }),
            other => Err(unsupported(prop.kind, other)),
        },
        PropertyKind::Map => Err(unsupported(prop.kind, value)),
        PropertyKind::None => Err(CodegenError::malformed(
            PropertyKind::None.name(),
            "not a valid property type",
        )),
        kind => scalar(kind, value),
    }
}

/// Optional synthesis: `(inner-or-default, present)`.
///
/// A null value yields an absent optional whose payload is the inner type's
/// default; anything else recursively synthesizes the payload against the
/// element tag.
fn synthesize_optional(
    prop: &MetaProperty,
    ty: &TypeExpr,
    value: &ValueTree,
) -> Result<InitExpr, CodegenError> {
    let TypeExpr::Optional(inner) = ty else {
        return Err(CodegenError::malformed(
            prop.kind.name(),
            "type expression is not optional",
        ));
    };
    let element = prop
        .container
        .ok_or_else(|| CodegenError::malformed(prop.kind.name(), "missing container descriptor"))?
        .kind;

    let payload = match value {
        ValueTree::Null => None,
        present => Some(Box::new(synthesize_element(element, inner, present)?)),
    };

    Ok(InitExpr::Optional {
        inner: (**inner).clone(),
        value: payload,
    })
}

/// Synthesizes a nested element literal against its tag.
fn synthesize_element(
    element: PropertyKind,
    ty: &TypeExpr,
    value: &ValueTree,
) -> Result<InitExpr, CodegenError> {
    match element {
        PropertyKind::Struct => match value {
            ValueTree::Null => Ok(InitExpr::Null),
            other => Err(unsupported(element, other)),
        },
        PropertyKind::Embedded => match value {
            ValueTree::Object(_) => embedded_construct(element, ty),
            other => Err(unsupported(element, other)),
        },
        kind => scalar(kind, value),
    }
}

/// Synthesizes a primitive literal keyed on `(tag, value shape)`.
fn scalar(kind: PropertyKind, value: &ValueTree) -> Result<InitExpr, CodegenError> {
    match (kind, value) {
        (PropertyKind::Bool, ValueTree::Bool(b)) => Ok(InitExpr::Bool(*b)),
        (PropertyKind::BitBool, ValueTree::Bool(b)) => Ok(InitExpr::Construct {
            ty: TypeExpr::Primitive(Primitive::BitBool),
            args: vec![InitExpr::Bool(*b)],
        }),
        (PropertyKind::Hash, ValueTree::String(s)) => Ok(InitExpr::Construct {
            ty: TypeExpr::Primitive(Primitive::Hash),
            args: vec![InitExpr::UInt(parse_hex_u32(kind, s)?)],
        }),
        (PropertyKind::ObjectLink, ValueTree::String(s)) => Ok(InitExpr::Construct {
            ty: TypeExpr::Primitive(Primitive::ObjectLink),
            args: vec![InitExpr::UInt(parse_hex_u32(kind, s)?)],
        }),
        (PropertyKind::WadChunkLink, ValueTree::String(s)) => Ok(InitExpr::Construct {
            ty: TypeExpr::Primitive(Primitive::WadChunkLink),
            args: vec![InitExpr::ULong(parse_hex_u64(kind, s)?)],
        }),
        (PropertyKind::F32, ValueTree::Number(n)) => n
            .as_f64()
            .map(|f| InitExpr::Float(f as f32))
            .ok_or_else(|| unsupported(kind, value)),
        (
            PropertyKind::I8
            | PropertyKind::U8
            | PropertyKind::I16
            | PropertyKind::U16
            | PropertyKind::I32
            | PropertyKind::U32
            | PropertyKind::I64
            | PropertyKind::U64,
            ValueTree::Number(n),
        ) => n
            .as_i64()
            .map(InitExpr::Int)
            .ok_or_else(|| CodegenError::unsupported(kind.name(), format!("integer {n} out of range"))),
        (PropertyKind::String, ValueTree::String(s)) => Ok(InitExpr::Str(s.clone())),
        (PropertyKind::Vector2, ValueTree::Array(elements)) => {
            vector_construct(kind, Primitive::Vector2, 2, elements)
        }
        (PropertyKind::Vector3, ValueTree::Array(elements)) => {
            vector_construct(kind, Primitive::Vector3, 3, elements)
        }
        (PropertyKind::Vector4, ValueTree::Array(elements)) => {
            vector_construct(kind, Primitive::Vector4, 4, elements)
        }
        (PropertyKind::Color, ValueTree::Array(elements)) => {
            vector_construct(kind, Primitive::Color, 4, elements)
        }
        (PropertyKind::Matrix44, ValueTree::Array(rows)) => matrix_construct(kind, rows),
        (kind, value) => Err(unsupported(kind, value)),
    }
}

/// Positional float construct for vectors and colors.
fn vector_construct(
    kind: PropertyKind,
    target: Primitive,
    arity: usize,
    elements: &[ValueTree],
) -> Result<InitExpr, CodegenError> {
    if elements.len() != arity {
        return Err(CodegenError::unsupported(
            kind.name(),
            format!("expected {arity} components, got {}", elements.len()),
        ));
    }
    let args = elements
        .iter()
        .map(|element| float_component(kind, element))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InitExpr::Construct {
        ty: TypeExpr::Primitive(target),
        args,
    })
}

/// Positional construct flattening 4 rows of 4 floats, row-major.
fn matrix_construct(kind: PropertyKind, rows: &[ValueTree]) -> Result<InitExpr, CodegenError> {
    if rows.len() != 4 {
        return Err(CodegenError::unsupported(
            kind.name(),
            format!("expected 4 rows, got {}", rows.len()),
        ));
    }
    let mut args = Vec::with_capacity(16);
    for row in rows {
        let ValueTree::Array(cells) = row else {
            return Err(unsupported(kind, row));
        };
        if cells.len() != 4 {
            return Err(CodegenError::unsupported(
                kind.name(),
                format!("expected 4 columns, got {}", cells.len()),
            ));
        }
        for cell in cells {
            args.push(float_component(kind, cell)?);
        }
    }
    Ok(InitExpr::Construct {
        ty: TypeExpr::Primitive(Primitive::Matrix44),
        args,
    })
}

fn float_component(kind: PropertyKind, value: &ValueTree) -> Result<InitExpr, CodegenError> {
    value
        .as_f64()
        .map(|f| InitExpr::Float(f as f32))
        .ok_or_else(|| unsupported(kind, value))
}

/// Always default-constructs the nested instance, regardless of the value's
/// contents.
fn embedded_construct(tag: PropertyKind, ty: &TypeExpr) -> Result<InitExpr, CodegenError> {
    let TypeExpr::Embedded(class) = ty else {
        return Err(CodegenError::malformed(
            tag.name(),
            "type expression is not embedded",
        ));
    };
    Ok(InitExpr::Construct {
        ty: ty.clone(),
        args: vec![InitExpr::Construct {
            ty: TypeExpr::Class(class.clone()),
            args: Vec::new(),
        }],
    })
}

fn parse_hex_u32(kind: PropertyKind, value: &str) -> Result<u32, CodegenError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u32::from_str_radix(digits, 16).map_err(|_| {
        CodegenError::unsupported(kind.name(), format!("'{value}' is not a 32-bit hex hash"))
    })
}

fn parse_hex_u64(kind: PropertyKind, value: &str) -> Result<u64, CodegenError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u64::from_str_radix(digits, 16).map_err(|_| {
        CodegenError::unsupported(kind.name(), format!("'{value}' is not a 64-bit hex hash"))
    })
}

fn unsupported(kind: PropertyKind, value: &ValueTree) -> CodegenError {
    CodegenError::unsupported(kind.name(), format!("no rule for {} value", shape(value)))
}

fn shape(value: &ValueTree) -> &'static str {
    match value {
        ValueTree::Null => "null",
        ValueTree::Bool(_) => "boolean",
        ValueTree::Number(_) => "number",
        ValueTree::String(_) => "string",
        ValueTree::Array(_) => "array",
        ValueTree::Object(_) => "object",
    }
}
