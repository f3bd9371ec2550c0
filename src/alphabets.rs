//! Predefined alphabets from spec §6.

use crate::alphabet::{Alphabet, SymbolRange};

/// All 256 byte values, `[0, 255]`.
pub fn binary_256() -> Alphabet<u8> {
    Alphabet::single(0, 255).expect("0..=255 is a valid range")
}

/// 7-bit ASCII, `[0, 127]`.
pub fn ascii_128() -> Alphabet<u8> {
    Alphabet::single(0, 127).expect("0..=127 is a valid range")
}

/// Printable Basic Multilingual Plane code points, excluding the surrogate
/// block: `[0x0020, 0xD7FF] ∪ [0xE000, 0xFFFF]`.
pub fn utf16_pack() -> Alphabet<u32> {
    Alphabet::new(vec![
        SymbolRange::new(0x0020, 0xD7FF).expect("valid range"),
        SymbolRange::new(0xE000, 0xFFFF).expect("valid range"),
    ])
    .expect("two disjoint ranges form a valid alphabet")
}

/// URI-safe unreserved alphanumerics: `['0','9'] ∪ ['A','Z'] ∪ ['a','z']`.
pub fn uri_pack() -> Alphabet<u8> {
    Alphabet::new(vec![
        SymbolRange::new(b'0', b'9').expect("valid range"),
        SymbolRange::new(b'A', b'Z').expect("valid range"),
        SymbolRange::new(b'a', b'z').expect("valid range"),
    ])
    .expect("three disjoint ranges form a valid alphabet")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_spec() {
        assert_eq!(binary_256().length(), 256);
        assert_eq!(ascii_128().length(), 128);
        assert_eq!(utf16_pack().length(), (0xD7FF - 0x0020 + 1) + (0xFFFF - 0xE000 + 1));
        assert_eq!(uri_pack().length(), 10 + 26 + 26);
    }
}
