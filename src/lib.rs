//! # LZW codec library
//!
//! A generic Lempel-Ziv-Welch compressor/expander whose input and packed
//! output alphabets are both caller-supplied, possibly non-contiguous,
//! symbol sets.
//!
//! * `alphabet` is the index-to-symbol bijection ([`alphabet::Alphabet`])
//!   that lets the rest of the crate work in terms of dense indices instead
//!   of raw symbol values.
//! * `alphabets` collects the predefined alphabets named in spec §6:
//!   `BINARY_256`, `ASCII_128`, `UTF16_PACK`, `URI_PACK`.
//! * `lzw` builds and inverts the LZW code stream.
//! * `packer` packs a uniform-bit-depth code stream onto a pack alphabet and
//!   inverts that packing.
//! * `codec` binds one input alphabet and one pack alphabet together with
//!   the construction-time checks that keep the pairing usable.
//! * `codecs` collects the ready-made codecs built on top of the predefined
//!   alphabets.
//!
//! ## Buffer example
//!
//! ```rs
//! use lzwcodec::codecs::binary_codec;
//! let test_data = "This is the chaunt of the priests.".as_bytes();
//! let codec = binary_codec();
//! let packed = codec.encode_slice(test_data).expect("encode failed");
//! let restored = codec.decode_slice(&packed).expect("decode failed");
//! assert_eq!(restored, test_data);
//! ```

pub mod alphabet;
pub mod alphabets;
pub mod codec;
pub mod codecs;
pub mod error;
mod intmath;
pub mod lzw;
pub mod packer;

pub use alphabet::{Alphabet, SymbolRange};
pub use codec::Codec;
pub use error::{Error, Result};
pub use intmath::{log2_ceil, log2_floor};
