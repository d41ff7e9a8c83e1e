//! Seed hashing
//!
//! Classic 32-bit polynomial string hash: `h = (h << 5) - h + unit`,
//! folded over UTF-16 code units with two's-complement wraparound at
//! every step, absolute value taken at the end.

/// Hash a string into a non-negative 32-bit seed.
///
/// Deterministic pure function of the input. The fold runs over UTF-16
/// code units, so non-ASCII URLs hash per code unit, not per byte.
/// Intermediate values wrap at 32 bits and may go negative; the final
/// `unsigned_abs` maps `i32::MIN` to `2^31`, so the seed fits
/// `0..=2^31`.
pub fn hash_seed(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
