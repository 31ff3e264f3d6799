//! Reflection dump decoder.
//!
//! This module decodes the textual dump document (JSON: a version field and a
//! mapping from hex-string class hashes to class records) into the typed model
//! of [`crate::types`]. Hash keys and hash-valued fields are converted to
//! `u32` here so the rest of the pipeline never re-parses hex strings.

use crate::error::ParseError;
use crate::types::{
    ClassFlags, ContainerDef, MapDef, MetaClass, MetaDump, MetaProperty, PropertyKind, ValueTree,
};
use indexmap::IndexMap;
use serde::Deserialize;

/// Parses a reflection dump from a JSON string.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a hash field is not valid
/// hexadecimal, or a type tag falls outside the closed enumeration.
pub fn parse_dump(json: &str) -> Result<MetaDump, ParseError> {
    let raw: RawDump = serde_json::from_str(json)?;
    let mut classes = IndexMap::with_capacity(raw.classes.len());

    for (key, class) in raw.classes {
        let hash = parse_hash(&key, || format!("class key '{key}'"))?;
        classes.insert(hash, convert_class(&key, class)?);
    }

    Ok(MetaDump {
        version: raw.version,
        classes,
    })
}

/// Parses a hash from its hexadecimal string form.
///
/// Accepts an optional `0x` prefix, matching the dumps in the wild.
pub fn parse_hash<C: FnOnce() -> String>(value: &str, context: C) -> Result<u32, ParseError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u32::from_str_radix(digits, 16).map_err(|_| ParseError::invalid_hash(context(), value))
}

fn convert_class(key: &str, raw: RawClass) -> Result<MetaClass, ParseError> {
    let base = match raw.base.as_deref() {
        None | Some("") => None,
        Some(value) => Some(parse_hash(value, || format!("base of class '{key}'"))?),
    };

    let secondary_bases = raw
        .secondary_bases
        .iter()
        .map(|value| parse_hash(value, || format!("secondary base of class '{key}'")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut properties = IndexMap::with_capacity(raw.properties.len());
    for (prop_key, prop) in raw.properties {
        let hash = parse_hash(&prop_key, || {
            format!("property key '{prop_key}' of class '{key}'")
        })?;
        let property = convert_property(key, &prop_key, prop)?;
        if properties.insert(hash, property).is_some() {
            return Err(ParseError::DuplicateProperty {
                class: key.to_string(),
                property: prop_key,
            });
        }
    }

    let defaults = match raw.defaults {
        None => None,
        Some(map) => {
            let mut defaults = IndexMap::with_capacity(map.len());
            for (prop_key, value) in map {
                let hash = parse_hash(&prop_key, || {
                    format!("default key '{prop_key}' of class '{key}'")
                })?;
                defaults.insert(hash, value);
            }
            Some(defaults)
        }
    };

    Ok(MetaClass {
        base,
        secondary_bases,
        is: ClassFlags {
            secondary_base: raw.is.secondary_base,
            interface: raw.is.interface,
        },
        properties,
        defaults,
    })
}

fn convert_property(
    class_key: &str,
    prop_key: &str,
    raw: RawProperty,
) -> Result<MetaProperty, ParseError> {
    let context = || format!("property '{prop_key}' of class '{class_key}'");

    let other_class = match raw.other_class.as_deref() {
        None | Some("") => None,
        Some(value) => Some(parse_hash(value, || format!("otherClass of {}", context()))?),
    };

    let container = raw
        .container
        .map(|c| {
            convert_tag(&c.kind, || format!("container type of {}", context()))
                .map(|kind| ContainerDef { kind })
        })
        .transpose()?;

    let map = raw
        .map
        .map(|m| -> Result<MapDef, ParseError> {
            let key = convert_tag(&m.key, || format!("map key type of {}", context()))?;
            let value = convert_tag(&m.value, || format!("map value type of {}", context()))?;
            Ok(MapDef { key, value })
        })
        .transpose()?;

    Ok(MetaProperty {
        kind: convert_tag(&raw.kind, context)?,
        other_class,
        container,
        map,
    })
}

fn convert_tag<C: FnOnce() -> String>(raw: &RawTag, context: C) -> Result<PropertyKind, ParseError> {
    let kind = match raw {
        RawTag::Name(name) => PropertyKind::from_name(name),
        RawTag::Num(value) => {
            u8::try_from(*value).ok().and_then(PropertyKind::from_discriminant)
        }
    };
    kind.ok_or_else(|| {
        let value = match raw {
            RawTag::Name(name) => name.clone(),
            RawTag::Num(value) => value.to_string(),
        };
        ParseError::unknown_tag(context(), value)
    })
}

/* ------------------------------- raw document ------------------------------- */

#[derive(Debug, Deserialize)]
struct RawDump {
    #[serde(default)]
    version: String,
    #[serde(default)]
    classes: IndexMap<String, RawClass>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClass {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    secondary_bases: Vec<String>,
    #[serde(default)]
    is: RawFlags,
    #[serde(default)]
    properties: IndexMap<String, RawProperty>,
    #[serde(default)]
    defaults: Option<IndexMap<String, ValueTree>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFlags {
    #[serde(default)]
    secondary_base: bool,
    #[serde(default)]
    interface: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProperty {
    #[serde(rename = "type")]
    kind: RawTag,
    #[serde(default)]
    other_class: Option<String>,
    #[serde(default)]
    container: Option<RawContainer>,
    #[serde(default)]
    map: Option<RawMap>,
}

#[derive(Debug, Deserialize)]
struct RawContainer {
    #[serde(rename = "type")]
    kind: RawTag,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMap {
    #[serde(rename = "keyType")]
    key: RawTag,
    #[serde(rename = "valueType")]
    value: RawTag,
}

/// A type tag as it appears in the document: a name or a discriminant.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTag {
    Num(u64),
    Name(String),
}
