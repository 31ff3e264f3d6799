//! # Metaforge Hash
//!
//! Case-insensitive FNV1a-32 hashing.
//!
//! Shipped property-bag data identifies classes and properties by the FNV1a
//! hash of their lower-cased names rather than by the names themselves. This
//! crate provides the hash function used to build and invert name tables.

/// FNV1a 32-bit offset basis.
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV1a 32-bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes the UTF-8 bytes of `name` with FNV1a-32.
///
/// The input is used as-is; callers wanting the canonical case-insensitive
/// identity should use [`hash_lower`].
#[must_use]
pub fn hash(name: &str) -> u32 {
    name.bytes().fold(FNV_OFFSET_BASIS, |h, b| {
        (h ^ u32::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Hashes the lower-cased form of `name` with FNV1a-32.
///
/// This is the canonical identity hash: two names differing only in case
/// produce the same value.
#[must_use]
pub fn hash_lower(name: &str) -> u32 {
    name.chars()
        .flat_map(char::to_lowercase)
        .fold(FNV_OFFSET_BASIS, |h, c| {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf)
                .bytes()
                .fold(h, |h, b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_offset_basis() {
        assert_eq!(hash(""), FNV_OFFSET_BASIS);
        assert_eq!(hash_lower(""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(hash_lower("a"), 0xe40c_292c);
        assert_eq!(hash_lower("IMetaClass"), 0x5ca6_e26b);
        assert_eq!(hash_lower("skinScale"), 0xa1f8_05da);
        assert_eq!(hash_lower("mResistFraction"), 0x20b1_6490);
        assert_eq!(hash_lower("VfxSystemDefinitionData"), 0x45cd_899f);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(hash_lower("Name"), hash_lower("name"));
        assert_eq!(hash_lower("TestClass"), hash_lower("testclass"));
        assert_ne!(hash("Name"), hash("name"));
    }

    #[test]
    fn test_lower_matches_prelowered_plain_hash() {
        assert_eq!(hash_lower("MixedCase"), hash("mixedcase"));
    }
}
