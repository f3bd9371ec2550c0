//! Ready-made codecs from spec §6: a handful of sensible defaults callers
//! can reach for without assembling alphabets themselves.

use crate::alphabets::{ascii_128, binary_256, uri_pack, utf16_pack};
use crate::codec::Codec;

/// Binary input packed onto the full byte alphabet.
pub fn binary_codec() -> Codec<u8, u8> {
    Codec::new(binary_256(), binary_256()).expect("BINARY_256 <-> BINARY_256 is always valid")
}

/// ASCII text packed onto the ASCII alphabet itself.
///
/// `ASCII_128`'s own C = log2_floor(128) = 7 exactly matches
/// log2_ceil(128), the bit_depth forced by spec §4.E's `max_code = L_in - 1`
/// baseline. There is no headroom beyond that baseline: the moment the LZW
/// dictionary emits a code it actually assigned (any input with a repeated
/// two-symbol sequence), `max_code` exceeds 127 and encoding fails with
/// `Error::CapacityExceeded`. This codec is only useful for short inputs with
/// no repeated bigrams; see `tests::ascii_codec_repeats_exceed_capacity`.
pub fn ascii_codec() -> Codec<u8, u8> {
    Codec::new(ascii_128(), ascii_128()).expect("ASCII_128 <-> ASCII_128 is always valid")
}

/// ASCII text packed onto the UTF-16-safe code point alphabet, which has
/// ample headroom (C = 15) for ordinary repetitive text.
pub fn utf16_codec() -> Codec<u8, u32> {
    Codec::new(ascii_128(), utf16_pack()).expect("ASCII_128 <-> UTF16_PACK is always valid")
}

/// ASCII text packed onto the URI-safe alphanumeric alphabet.
///
/// URI_PACK's C = 5 is narrower than log2_ceil(128) = 7, so per the same
/// baseline reasoning as [`ascii_codec`], every non-empty encode on this
/// pairing raises `Error::CapacityExceeded` regardless of content. It is
/// kept as a predefined codec per spec §6 and documented as capacity-limited
/// rather than omitted.
pub fn uri_codec() -> Codec<u8, u8> {
    Codec::new(ascii_128(), uri_pack()).expect("ASCII_128 <-> URI_PACK is always valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn binary_codec_round_trips_arbitrary_bytes() {
        let codec = binary_codec();
        let input: Vec<u8> = (0..=255).collect();
        let packed = codec.encode_slice(&input).unwrap();
        assert_eq!(codec.decode_slice(&packed).unwrap(), input);
    }

    #[test]
    fn ascii_codec_round_trips_text_without_repeated_bigrams() {
        let codec = ascii_codec();
        let input = b"ABCDEFG".to_vec();
        let packed = codec.encode_slice(&input).unwrap();
        assert_eq!(codec.decode_slice(&packed).unwrap(), input);
    }

    #[test]
    fn ascii_codec_repeats_exceed_capacity() {
        let codec = ascii_codec();
        let err = codec.encode_slice(b"AAA").unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }));
    }

    #[test]
    fn utf16_codec_round_trips_repetitive_text() {
        let codec = utf16_codec();
        let input = b"TOBEORNOTTOBEORTOBEORNOT".to_vec();
        let packed = codec.encode_slice(&input).unwrap();
        assert_eq!(codec.decode_slice(&packed).unwrap(), input);
    }

    #[test]
    fn uri_codec_always_exceeds_capacity_for_ascii_input() {
        let codec = uri_codec();
        let err = codec.encode_slice(&[b'A']).unwrap_err();
        assert!(matches!(err, Error::CapacityExceeded { .. }));
    }
}
