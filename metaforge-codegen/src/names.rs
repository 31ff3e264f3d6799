//! Hash-to-name resolution.
//!
//! Name tables map 32-bit identity hashes back to human names. A hash absent
//! from its table is not an error: resolution falls back to a deterministic
//! synthetic name so generation always proceeds.

use std::collections::HashMap;

/// Immutable hash-to-name table, built once per generation call.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: HashMap<u32, String>,
}

impl NameTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from a pre-built hash-to-name mapping.
    #[must_use]
    pub fn from_map(entries: HashMap<u32, String>) -> Self {
        Self { entries }
    }

    /// Builds a table by hashing each literal name with the case-insensitive
    /// FNV1a function.
    ///
    /// Two names hashing to the same value is a caller error; the later name
    /// wins.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(Into::into)
            .map(|name| (metaforge_hash::hash_lower(&name), name))
            .collect();
        Self { entries }
    }

    /// Looks up the stored name for a hash.
    #[must_use]
    pub fn get(&self, hash: u32) -> Option<&str> {
        self.entries.get(&hash).map(String::as_str)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two independent tables a generation call consumes.
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    /// Class name table.
    pub classes: NameTable,
    /// Property name table.
    pub properties: NameTable,
}

impl NameTables {
    /// Creates tables from literal class and property name lists.
    pub fn from_names<C, P, S, T>(classes: C, properties: P) -> Self
    where
        C: IntoIterator<Item = S>,
        P: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            classes: NameTable::from_names(classes),
            properties: NameTable::from_names(properties),
        }
    }

    /// Resolves a class hash to its name, falling back to `Class{hash:x}`.
    #[must_use]
    pub fn class_name(&self, hash: u32) -> String {
        match self.classes.get(hash) {
            Some(name) => name.to_string(),
            None => format!("Class{hash:x}"),
        }
    }

    /// Resolves a property hash to its name, falling back to `m{hash}`
    /// (decimal).
    #[must_use]
    pub fn property_name(&self, hash: u32) -> String {
        match self.properties.get(hash) {
            Some(name) => name.to_string(),
            None => format!("m{hash}"),
        }
    }
}
