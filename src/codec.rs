//! Binds an `(input alphabet, pack alphabet)` pair into a ready-to-use
//! codec and enforces the construction-time constraints of spec §4.G.

use num_traits::PrimInt;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::intmath::{log2_ceil, log2_floor};
use crate::lzw::{decode_codes, encode_codes};
use crate::packer::{pack, unpack};

/// A codec bound to one input alphabet and one pack alphabet.
///
/// Since alphabets are ordinary caller-supplied values rather than
/// compile-time constants, `Codec::new` reports an invalid pairing as
/// `Err(Error::CodecInvalid)` rather than panicking (see `DESIGN.md`).
pub struct Codec<TIn: PrimInt, TPack: PrimInt> {
    alphabet_in: Alphabet<TIn>,
    alphabet_pack: Alphabet<TPack>,
}

impl<TIn: PrimInt, TPack: PrimInt> Codec<TIn, TPack> {
    /// Bind an input alphabet and a pack alphabet into a codec, or fail with
    /// [`Error::CodecInvalid`] if the pair can never produce a valid packed
    /// stream: the pack alphabet's payload width must fit a machine word,
    /// and must be wide enough to carry at least the singleton-only code
    /// range.
    pub fn new(alphabet_in: Alphabet<TIn>, alphabet_pack: Alphabet<TPack>) -> Result<Self> {
        let l_in = alphabet_in.length();
        let l_p = alphabet_pack.length();
        let c = log2_floor(l_p);
        if c > usize::BITS as usize {
            return Err(Error::CodecInvalid {
                reason: "pack alphabet's payload width exceeds the machine word size",
            });
        }
        if l_p < log2_ceil(l_in) {
            return Err(Error::CodecInvalid {
                reason: "pack alphabet is too small to carry even the singleton code range",
            });
        }
        Ok(Self { alphabet_in, alphabet_pack })
    }

    /// The input alphabet this codec draws symbols from.
    pub fn input_alphabet(&self) -> &Alphabet<TIn> {
        &self.alphabet_in
    }

    /// The pack alphabet this codec's packed output is drawn from.
    pub fn pack_alphabet(&self) -> &Alphabet<TPack> {
        &self.alphabet_pack
    }

    /// Encode `input`, appending the packed output to `output`.
    ///
    /// `output` is the codec's append-only output cursor: bytes already
    /// written are never rewritten or truncated, only grown. Per spec §4.E
    /// step 1, an empty `input` produces no output at all, not even header
    /// symbols.
    pub fn encode<I>(&self, input: I, output: &mut Vec<TPack>) -> Result<()>
    where
        I: IntoIterator<Item = TIn>,
    {
        let iter = input.into_iter();
        let mut buf: Vec<TIn> = Vec::with_capacity(iter.size_hint().0);
        buf.extend(iter);
        if buf.is_empty() {
            return Ok(());
        }

        let encoded = encode_codes(&buf, &self.alphabet_in)?;
        let bit_depth = log2_ceil(encoded.max_code + 1);
        let pack_len = self.alphabet_pack.length();
        let max_bit_depth = log2_floor(pack_len).min(usize::BITS as usize);
        if bit_depth > max_bit_depth || bit_depth >= pack_len {
            return Err(Error::CapacityExceeded { bit_depth, pack_len });
        }

        let packed = pack(&encoded.codes, bit_depth, &self.alphabet_pack)?;
        log::debug!(
            "encode: {} input symbols -> {} codes -> {} packed symbols at bit_depth {}",
            buf.len(),
            encoded.codes.len(),
            packed.len(),
            bit_depth
        );
        output.extend(packed);
        Ok(())
    }

    /// Convenience wrapper over [`Codec::encode`] that allocates and returns
    /// the packed output directly, instead of appending to a caller-owned
    /// buffer.
    pub fn encode_slice(&self, input: &[TIn]) -> Result<Vec<TPack>> {
        let mut out = Vec::new();
        self.encode(input.iter().copied(), &mut out)?;
        Ok(out)
    }

    /// Decode a packed stream, appending the recovered input symbols to
    /// `output`.
    pub fn decode<I>(&self, packed: I, output: &mut Vec<TIn>) -> Result<()>
    where
        I: IntoIterator<Item = TPack>,
    {
        let iter = packed.into_iter();
        let mut buf: Vec<TPack> = Vec::with_capacity(iter.size_hint().0);
        buf.extend(iter);
        if buf.is_empty() {
            return Ok(());
        }

        let codes = unpack(&buf, &self.alphabet_pack)?;
        if codes.is_empty() {
            return Ok(());
        }
        let decoded = decode_codes(&codes, &self.alphabet_in)?;
        log::debug!(
            "decode: {} packed symbols -> {} codes -> {} input symbols",
            buf.len(),
            codes.len(),
            decoded.len()
        );
        output.extend(decoded);
        Ok(())
    }

    /// Convenience wrapper over [`Codec::decode`] that allocates and returns
    /// the decoded input.
    pub fn decode_slice(&self, packed: &[TPack]) -> Result<Vec<TIn>> {
        let mut out = Vec::new();
        self.decode(packed.iter().copied(), &mut out)?;
        Ok(out)
    }
}
