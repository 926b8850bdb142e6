//! Deterministic seed hash
//!
//! Maps a seed string to a reproducible float in [0, 1). Used only to pick
//! among a small fixed set of canned fallback sentences, so collision
//! resistance is not a goal; the only requirements are determinism across
//! runs and platforms, and that varying seeds do not collapse to a single
//! output. Never use this for anything security- or money-relevant.

/// Fixed odd 32-bit multiplier (Knuth's multiplicative constant)
const MIX: u32 = 0x9E37_79B1;

/// Hash a seed string to a float in [0, 1)
///
/// For each character the accumulator is XORed with the character's scalar
/// value, multiplied by [`MIX`] with 32-bit wraparound, then XORed with its
/// own right-shift by 16. The final accumulator is normalized by 2^32 - 1.
/// The empty string hashes to 0.0.
pub fn seed_hash(seed: &str) -> f64 {
    let mut acc: u32 = 0;
    for ch in seed.chars() {
        acc = (acc ^ ch as u32).wrapping_mul(MIX);
        acc ^= acc >> 16;
    }
    f64::from(acc) / f64::from(u32::MAX)
}
