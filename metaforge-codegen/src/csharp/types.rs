//! C# type and initializer expression rendering.

use super::wrappers;
use crate::decl::{InitExpr, Primitive, TypeExpr};

/// Renders a type expression as C# type syntax.
#[must_use]
pub fn type_name(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Primitive(primitive) => primitive_name(*primitive).to_string(),
        TypeExpr::Class(name) => name.clone(),
        TypeExpr::Embedded(name) => format!("{}<{name}>", wrappers::EMBEDDED),
        TypeExpr::Container(element) => {
            format!("{}<{}>", wrappers::CONTAINER, type_name(element))
        }
        TypeExpr::UnorderedContainer(element) => {
            format!("{}<{}>", wrappers::UNORDERED_CONTAINER, type_name(element))
        }
        TypeExpr::Optional(inner) => format!("{}<{}>", wrappers::OPTIONAL, type_name(inner)),
        TypeExpr::Map(key, value) => format!(
            "{}<{}, {}>",
            wrappers::MAP,
            primitive_name(*key),
            type_name(value)
        ),
    }
}

/// Returns the fixed C# representation of a primitive tag.
#[must_use]
pub const fn primitive_name(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Bool => "bool",
        Primitive::I8 => "sbyte",
        Primitive::U8 => "byte",
        Primitive::I16 => "short",
        Primitive::U16 => "ushort",
        Primitive::I32 => "int",
        Primitive::U32 => "uint",
        Primitive::I64 => "long",
        Primitive::U64 => "ulong",
        Primitive::F32 => "float",
        Primitive::Vector2 => "Vector2",
        Primitive::Vector3 => "Vector3",
        Primitive::Vector4 => "Vector4",
        Primitive::Matrix44 => "Matrix4x4",
        Primitive::Color => "Color",
        Primitive::String => "string",
        Primitive::Hash => wrappers::HASH,
        Primitive::WadChunkLink => wrappers::WAD_CHUNK_LINK,
        Primitive::ObjectLink => wrappers::OBJECT_LINK,
        Primitive::BitBool => wrappers::BIT_BOOL,
    }
}

/// Renders an initializer expression as C# expression syntax.
#[must_use]
pub fn init_expr(init: &InitExpr) -> String {
    match init {
        InitExpr::Bool(true) => "true".to_string(),
        InitExpr::Bool(false) => "false".to_string(),
        InitExpr::Int(value) => value.to_string(),
        InitExpr::UInt(value) => format!("{value}U"),
        InitExpr::ULong(value) => format!("{value}UL"),
        InitExpr::Float(value) => float_literal(*value),
        InitExpr::Str(value) => string_literal(value),
        InitExpr::Null => "null".to_string(),
        InitExpr::Construct { ty, args } => {
            let args: Vec<String> = args.iter().map(init_expr).collect();
            format!("new {}({})", type_name(ty), args.join(", "))
        }
        InitExpr::Optional { inner, value } => {
            let inner_name = type_name(inner);
            let payload = match value {
                Some(expr) => init_expr(expr),
                None => format!("default({inner_name})"),
            };
            let present = value.is_some();
            format!(
                "new {}<{inner_name}>({payload}, {present})",
                wrappers::OPTIONAL
            )
        }
    }
}

/// Renders a 32-bit float literal.
///
/// The shortest decimal representation that re-parses to exactly the same
/// 32-bit value, with an explicit `f` suffix; never locale-dependent.
#[must_use]
pub fn float_literal(value: f32) -> String {
    format!("{value}f")
}

/// Renders a quoted, escaped C# string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => {
                literal.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
