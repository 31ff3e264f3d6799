//! Dump model definitions.
//!
//! This module contains the data structures representing a decoded reflection
//! dump: classes keyed by hash, their typed properties, and default values.
//! The model is pure data; it is constructed once by the decoder and read-only
//! afterwards.

use indexmap::IndexMap;

/// Dynamically-typed default value, mirroring a generic JSON document value.
pub type ValueTree = serde_json::Value;

/// Complete reflection dump.
#[derive(Debug, Clone)]
pub struct MetaDump {
    /// Dump version string.
    pub version: String,
    /// Classes keyed by name hash, in dump order.
    pub classes: IndexMap<u32, MetaClass>,
}

impl MetaDump {
    /// Looks up a class by hash.
    #[must_use]
    pub fn get_class(&self, hash: u32) -> Option<&MetaClass> {
        self.classes.get(&hash)
    }
}

/// A single class record.
#[derive(Debug, Clone, Default)]
pub struct MetaClass {
    /// Primary base class hash, if any.
    pub base: Option<u32>,
    /// Secondary base hashes, in dump order.
    pub secondary_bases: Vec<u32>,
    /// Declaration flags.
    pub is: ClassFlags,
    /// Properties keyed by name hash; insertion order is declaration order.
    pub properties: IndexMap<u32, MetaProperty>,
    /// Default values keyed by property hash, if the dump carries any.
    pub defaults: Option<IndexMap<u32, ValueTree>>,
}

impl MetaClass {
    /// Returns the default value recorded for a property, if any.
    #[must_use]
    pub fn default_of(&self, property: u32) -> Option<&ValueTree> {
        self.defaults.as_ref().and_then(|d| d.get(&property))
    }
}

/// Class declaration flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    /// The class is used as a secondary base by other classes.
    pub secondary_base: bool,
    /// The class is interface-like (never instantiated directly).
    pub interface: bool,
}

/// A single property record.
#[derive(Debug, Clone)]
pub struct MetaProperty {
    /// Type tag.
    pub kind: PropertyKind,
    /// Referenced class hash, required by Struct/Embedded tags (including
    /// nested element and map value positions).
    pub other_class: Option<u32>,
    /// Element descriptor for Container/UnorderedContainer/Optional.
    pub container: Option<ContainerDef>,
    /// Key/value descriptor for Map.
    pub map: Option<MapDef>,
}

/// Element type of a container-like property.
#[derive(Debug, Clone, Copy)]
pub struct ContainerDef {
    /// Element type tag.
    pub kind: PropertyKind,
}

/// Key and value types of a map property.
#[derive(Debug, Clone, Copy)]
pub struct MapDef {
    /// Key type tag; must be primitive.
    pub key: PropertyKind,
    /// Value type tag.
    pub value: PropertyKind,
}

/// Closed set of property type tags.
///
/// Discriminant values follow the source type system's enumeration order, so
/// dumps carrying numeric tags decode without a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PropertyKind {
    /// Absent type; not valid as a declared property type.
    None = 0,
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit floating point.
    F32,
    /// Two-component float vector.
    Vector2,
    /// Three-component float vector.
    Vector3,
    /// Four-component float vector.
    Vector4,
    /// 4x4 float matrix.
    Matrix44,
    /// RGBA color.
    Color,
    /// Text.
    String,
    /// 32-bit name hash wrapper.
    Hash,
    /// 64-bit archive chunk link wrapper.
    WadChunkLink,
    /// Ordered homogeneous collection.
    Container,
    /// Unordered homogeneous collection.
    UnorderedContainer,
    /// Reference to another class.
    Struct,
    /// Owned by-value nested instance of another class.
    Embedded,
    /// 32-bit object link wrapper.
    ObjectLink,
    /// Optionally-present value with an explicit flag.
    Optional,
    /// Ordered key-value mapping.
    Map,
    /// Bit-packed boolean wrapper.
    BitBool,
}

impl PropertyKind {
    /// All tags, in discriminant order.
    pub const ALL: [Self; 27] = [
        Self::None,
        Self::Bool,
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
        Self::Matrix44,
        Self::Color,
        Self::String,
        Self::Hash,
        Self::WadChunkLink,
        Self::Container,
        Self::UnorderedContainer,
        Self::Struct,
        Self::Embedded,
        Self::ObjectLink,
        Self::Optional,
        Self::Map,
        Self::BitBool,
    ];

    /// Returns the canonical tag name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool => "Bool",
            Self::I8 => "I8",
            Self::U8 => "U8",
            Self::I16 => "I16",
            Self::U16 => "U16",
            Self::I32 => "I32",
            Self::U32 => "U32",
            Self::I64 => "I64",
            Self::U64 => "U64",
            Self::F32 => "F32",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
            Self::Matrix44 => "Matrix44",
            Self::Color => "Color",
            Self::String => "String",
            Self::Hash => "Hash",
            Self::WadChunkLink => "WadChunkLink",
            Self::Container => "Container",
            Self::UnorderedContainer => "UnorderedContainer",
            Self::Struct => "Struct",
            Self::Embedded => "Embedded",
            Self::ObjectLink => "ObjectLink",
            Self::Optional => "Optional",
            Self::Map => "Map",
            Self::BitBool => "BitBool",
        }
    }

    /// Parses a tag from its canonical name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Parses a tag from its numeric discriminant.
    #[must_use]
    pub fn from_discriminant(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Returns true for tags with a fixed target representation, i.e.
    /// everything except the compositional tags and `None`.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(
            self,
            Self::None
                | Self::Container
                | Self::UnorderedContainer
                | Self::Struct
                | Self::Embedded
                | Self::Optional
                | Self::Map
        )
    }

    /// Returns true for tags that reference another class directly.
    #[must_use]
    pub const fn requires_other_class(&self) -> bool {
        matches!(self, Self::Struct | Self::Embedded)
    }
}
