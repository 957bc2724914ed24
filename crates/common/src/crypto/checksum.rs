//! Luhn mod 58 check symbols
//!
//! A single check symbol, drawn from the base-58 alphabet, is appended to the
//! encoded payload of every secret to catch transcription errors. The
//! algorithm is Luhn's, generalised to a 58-symbol radix:
//!
//! 1. Walk the input from the last symbol towards the front, alternating a
//!    multiplier of 2 and 1 (starting with 2).
//! 2. Fold each product into `product / 58 + product % 58` and sum.
//! 3. The check symbol index is `(58 - sum % 58) % 58`.
//!
//! The walk stops *before* index 0: the first symbol of the input never
//! contributes to the sum. Existing secrets depend on this, so it must stay.

/// The Bitcoin base-58 alphabet: no `0`, `O`, `I` or `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Radix of the checksum, one per alphabet symbol
const RADIX: usize = ALPHABET.len();

/// Lookup value for bytes outside the alphabet
const INVALID: u8 = 255;

/// Byte -> alphabet index, built at compile time
const LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < RADIX {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Position of `symbol` in the alphabet, or `None` if it is not a base-58 symbol.
#[inline]
pub fn symbol_index(symbol: u8) -> Option<u8> {
    match LOOKUP[symbol as usize] {
        INVALID => None,
        index => Some(index),
    }
}

/// Check whether every byte of `data` is a base-58 symbol.
#[inline]
pub fn is_alphabet(data: &[u8]) -> bool {
    data.iter().all(|&b| symbol_index(b).is_some())
}

/// Compute the check symbol for `data`.
///
/// Bytes outside the alphabet are not rejected here; they take the sentinel
/// value 255 and produce a meaningless (but in-range) symbol. Callers that
/// accept untrusted input go through [`validate_checksum`], which refuses them.
pub fn checksum_symbol(data: &[u8]) -> u8 {
    let mut factor = 2;
    let mut sum = 0usize;

    for &symbol in data.iter().skip(1).rev() {
        let product = factor * LOOKUP[symbol as usize] as usize;
        factor = if factor == 2 { 1 } else { 2 };
        sum += product / RADIX + product % RADIX;
    }

    let check = (RADIX - sum % RADIX) % RADIX;
    ALPHABET[check]
}

/// Return `s` followed by its check symbol.
pub fn append_checksum(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    out.push_str(s);
    out.push(checksum_symbol(s.as_bytes()) as char);
    out
}

/// Check that the last symbol of `s` is the check symbol of everything before it.
///
/// Empty input and input containing non-alphabet bytes are never valid.
pub fn validate_checksum(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some((&check, front)) = bytes.split_last() else {
        return false;
    };
    if !is_alphabet(bytes) {
        return false;
    }
    checksum_symbol(front) == check
}
