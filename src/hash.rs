//! Lua-table-compatible hash codes.
//!
//! Each value category is hashed the way the host's table implementation
//! picks a bucket for it:
//!
//! | category | hash                                            | range          |
//! |----------|-------------------------------------------------|----------------|
//! | nil      | `0`                                             | `0`            |
//! | boolean  | `b & (LMAX - 1)`                                | `[0, 63]`      |
//! | number   | sum of the 32-bit words of the bits, `% 63`     | `[0, 62]`      |
//! | string   | length-seeded shift-xor over sampled bytes      | full `i32`     |
//! | other    | `address % 63`                                  | `[0, 62]`      |
//!
//! String hashes are not reduced. Callers that need a slot index apply
//! [`lmod`] themselves.

use crate::value::{Identity, Value};

/// Table size the bounded hashes are reduced for. Always a power of two.
pub const LMAX: u32 = 64;

/// Divisor of the modulo reductions: `(LMAX - 1) | 1`, odd so that the
/// low bits of addresses and float patterns still spread.
const HASH_MOD: u32 = (LMAX - 1) | 1;

/// Machine words a number's bit pattern is split into.
const NUM_WORDS: usize = size_of::<f64>() / size_of::<u32>();

/// Reduces `hash` into a power-of-two table of `size` slots.
///
/// Works for every hash code, including negative string hashes.
#[inline]
#[must_use]
pub const fn lmod(hash: i32, size: usize) -> usize {
    debug_assert!(size.is_power_of_two());
    (hash.cast_unsigned() as usize) & (size - 1)
}

/// Hash of a boolean: `0` or `1`, masked to the table size.
#[inline]
#[must_use]
pub fn hash_bool(b: bool) -> i32 {
    (u32::from(b) & (LMAX - 1)).cast_signed()
}

/// Hash of a number.
///
/// Both zeros hash to `0`. Any other value, NaN included, hashes through the
/// wrapping sum of its 32-bit words taken in native byte order.
#[must_use]
pub fn hash_num(n: f64) -> i32 {
    if n == 0.0 {
        return 0;
    }
    let bytes = n.to_ne_bytes();
    let mut words = [0_u32; NUM_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(size_of::<u32>())) {
        let mut raw = [0_u8; size_of::<u32>()];
        raw.copy_from_slice(chunk);
        *word = u32::from_ne_bytes(raw);
    }
    let acc = words[1..]
        .iter()
        .fold(words[0], |acc, &w| acc.wrapping_add(w));
    (acc % HASH_MOD).cast_signed()
}

/// Hash of a byte string.
///
/// Seeds with the length and folds in every `step`-th byte from the end,
/// `step = len / 32 + 1`, so long strings are sampled rather than scanned.
/// The result is the raw 32-bit state.
#[must_use]
pub fn hash_str(bytes: &[u8]) -> i32 {
    let len = bytes.len();
    // Seed truncates for strings over 4 GiB, as the host does.
    #[allow(clippy::cast_possible_truncation)]
    let mut h = len as u32;
    let step = (len >> 5) + 1;
    let mut i = len;
    while i >= step {
        h ^= (h << 5)
            .wrapping_add(h >> 2)
            .wrapping_add(u32::from(bytes[i - 1]));
        i -= step;
    }
    h.cast_signed()
}

/// Identity hash of a referenced value: `address % 63`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn hash_ptr(id: Identity) -> i32 {
    // Remainder is below 63, fits any integer width.
    (id.addr() % HASH_MOD as usize) as i32
}

/// Computes the hash code of `value`.
///
/// Total over all values; never fails and has no side effects. Equal
/// scalars always hash equal. `Other` values hash by identity, so the code
/// is stable only while the referenced object stays at the same address.
#[must_use]
pub fn hashcode(value: &Value<'_>) -> i32 {
    match *value {
        Value::Nil => 0,
        Value::Boolean(b) => hash_bool(b),
        Value::Number(n) => hash_num(n),
        Value::String(bytes) => hash_str(bytes),
        Value::Other(id) => hash_ptr(id),
    }
}
