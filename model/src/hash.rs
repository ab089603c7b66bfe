//! Case-insensitive name tags used by property lists.

use crate::string::fold_ascii;

/// Computes the lookup tag for a name.
///
/// ASCII letters are folded before hashing, so names that compare equal
/// ignoring case share a tag. The tag is the first four bytes of the BLAKE3
/// digest of the folded code units (little-endian), read as a little-endian
/// `u32`.
#[must_use]
pub fn name_tag(units: &[u16]) -> u32 {
    let mut hasher = blake3::Hasher::new();
    for &unit in units {
        hasher.update(&fold_ascii(unit).to_le_bytes());
    }
    let digest = hasher.finalize();
    let bytes = digest.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
