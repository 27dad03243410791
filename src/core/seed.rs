/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 16_777_619;

/// Delimiter between the query parts fed into the seed hash
pub const SEED_DELIMITER: &str = "|";

/// Compute a 32-bit FNV-1a hash over a string's UTF-8 bytes
///
/// Per byte: XOR into the hash, then multiply by the FNV prime, all with
/// unsigned 32-bit wraparound. The empty string hashes to the offset
/// basis.
#[inline]
pub fn fnv1a(text: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the generator seed from the textual parts of a match query
///
/// Title, description and each skill are joined with [`SEED_DELIMITER`]
/// and hashed as one string. The seed therefore changes whenever any of
/// the three inputs changes, and only then: `top_k` and filters never
/// touch it.
pub fn derive_seed(title: &str, description: &str, skills: &[String]) -> u32 {
    let mut parts: Vec<&str> = Vec::with_capacity(2 + skills.len());
    parts.push(title);
    parts.push(description);
    for skill in skills {
        parts.push(skill);
    }
    fnv1a(&parts.join(SEED_DELIMITER))
}
