//! Dense bit packing of a uniform-width code stream onto a pack alphabet
//! whose cardinality is generally not a power of two.
//!
//! Accumulates bits into a `bit_vec::BitVec` and flushes whole pack symbols
//! as they become available, the same shape as flushing whole bytes from a
//! bit accumulator. Here the flush unit is `C = log2_floor(pack alphabet
//! length)` bits instead of a fixed 8, and the target is an arbitrary
//! pack-alphabet symbol instead of a byte.

use bit_vec::BitVec;
use num_traits::PrimInt;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};
use crate::intmath::log2_floor;

/// Payload bits carried by one pack-alphabet symbol.
pub fn payload_bits<T: PrimInt>(alphabet: &Alphabet<T>) -> usize {
    log2_floor(alphabet.length())
}

fn div_ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// Pack a code stream at a uniform `bit_depth` into pack-alphabet symbols.
///
/// `codes` need not be non-empty; an empty slice produces just the two
/// header symbols.
pub fn pack<T: PrimInt>(codes: &[usize], bit_depth: usize, alphabet: &Alphabet<T>) -> Result<Vec<T>> {
    let pack_len = alphabet.length();
    let c = payload_bits(alphabet);
    let max_bit_depth = c.min(usize::BITS as usize);
    if bit_depth == 0 || bit_depth > max_bit_depth || bit_depth >= pack_len {
        return Err(Error::CapacityExceeded { bit_depth, pack_len });
    }

    let bits_needed = bit_depth
        .checked_mul(codes.len())
        .expect("bit depth * code count overflowed usize");
    let payload_symbols = if bits_needed == 0 { 0 } else { div_ceil(bits_needed, c) };
    let dead_bits = payload_symbols * c - bits_needed;

    let mut bits = BitVec::with_capacity(payload_symbols * c);
    for &code in codes {
        for b in 0..bit_depth {
            bits.push((code >> b) & 1 != 0);
        }
    }
    for _ in 0..dead_bits {
        bits.push(false);
    }

    let mut out = Vec::with_capacity(2 + payload_symbols);
    out.push(alphabet.symbol_at(bit_depth)?);
    out.push(alphabet.symbol_at(dead_bits)?);
    for chunk in 0..payload_symbols {
        let mut v: usize = 0;
        for b in 0..c {
            if bits.get(chunk * c + b).unwrap() {
                v |= 1 << b;
            }
        }
        out.push(alphabet.symbol_at(v)?);
    }
    log::trace!(
        "packed {} codes at bit_depth {} into {} payload symbols ({} dead bits)",
        codes.len(),
        bit_depth,
        payload_symbols,
        dead_bits
    );
    Ok(out)
}

/// Invert [`pack`]: recover the code stream from a packed symbol sequence.
pub fn unpack<T: PrimInt>(packed: &[T], alphabet: &Alphabet<T>) -> Result<Vec<usize>> {
    if packed.is_empty() {
        return Ok(Vec::new());
    }
    if packed.len() < 2 {
        return Err(Error::Truncated);
    }

    let c = payload_bits(alphabet);
    let bit_depth = alphabet.index_of(packed[0]).map_err(|_| Error::Corrupt {
        reason: "bit-depth header symbol is not a member of the pack alphabet",
    })?;
    let dead_bits = alphabet.index_of(packed[1]).map_err(|_| Error::Corrupt {
        reason: "dead-bits header symbol is not a member of the pack alphabet",
    })?;
    if bit_depth == 0 || bit_depth > c {
        return Err(Error::Corrupt {
            reason: "decoded bit depth is zero or exceeds pack-symbol payload width",
        });
    }

    let n = packed.len() - 2;
    if n == 0 {
        if dead_bits != 0 {
            return Err(Error::Corrupt {
                reason: "empty payload must carry zero dead bits",
            });
        }
        return Ok(Vec::new());
    }
    if dead_bits >= c {
        return Err(Error::Corrupt {
            reason: "dead-bit count is not smaller than the pack-symbol payload width",
        });
    }

    let total_bits = n * c - dead_bits;
    if total_bits % bit_depth != 0 {
        return Err(Error::Corrupt {
            reason: "payload length is inconsistent with bit depth and dead-bit count",
        });
    }
    let out_len = total_bits / bit_depth;
    if out_len == 0 {
        return Err(Error::Corrupt {
            reason: "payload decodes to zero codes despite non-empty payload",
        });
    }

    let mut bits = BitVec::with_capacity(n * c);
    for &sym in &packed[2..] {
        let v = alphabet.index_of(sym).map_err(|_| Error::Corrupt {
            reason: "payload symbol is not a member of the pack alphabet",
        })?;
        for b in 0..c {
            bits.push((v >> b) & 1 != 0);
        }
    }

    let mut codes = Vec::with_capacity(out_len);
    for k in 0..out_len {
        let mut v: usize = 0;
        for b in 0..bit_depth {
            if bits.get(k * bit_depth + b).unwrap() {
                v |= 1 << b;
            }
        }
        codes.push(v);
    }
    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::binary_256;

    #[test]
    fn empty_codes_round_trip() {
        let a = binary_256();
        let packed = pack::<u8>(&[], 8, &a).unwrap();
        assert_eq!(packed.len(), 2);
        let codes = unpack(&packed, &a).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn bit_depth_equal_to_c_has_no_dead_bits() {
        let a = binary_256(); // C = 8
        let codes = vec![1usize, 2, 255, 0, 128];
        let packed = pack::<u8>(&codes, 8, &a).unwrap();
        // two header symbols + one payload symbol per code
        assert_eq!(packed.len(), 2 + codes.len());
        assert_eq!(packed[1], 0); // dead_bits == 0
        let out = unpack(&packed, &a).unwrap();
        assert_eq!(out, codes);
    }

    #[test]
    fn non_dividing_bit_depth_straddles_symbols() {
        let a = binary_256(); // C = 8
        let codes = vec![1usize, 2, 3, 4, 5, 6, 7];
        for bit_depth in 1..=8 {
            let packed = pack::<u8>(&codes, bit_depth, &a).unwrap();
            let out = unpack(&packed, &a).unwrap();
            assert_eq!(out, codes, "round-trip failed at bit_depth={bit_depth}");
        }
    }

    #[test]
    fn rejects_bit_depth_at_or_above_pack_length() {
        let a = Alphabet::<u8>::single(0, 1).unwrap(); // length 2, C = 1
        assert!(pack::<u8>(&[0, 1], 2, &a).is_err());
    }

    #[test]
    fn truncated_header_is_detected() {
        let a = binary_256();
        let one = a.symbol_at(8).unwrap();
        assert_eq!(unpack(&[one], &a), Err(Error::Truncated));
    }

    #[test]
    fn corrupt_payload_length_is_detected() {
        let a = binary_256();
        // bit_depth=8, dead_bits=0, but only claim a payload that can't
        // possibly divide evenly: 3 payload symbols (24 bits) at bit_depth
        // 5 does not divide evenly once dead_bits is forced to 0.
        let hdr1 = a.symbol_at(5).unwrap();
        let hdr2 = a.symbol_at(0).unwrap();
        let payload = vec![a.symbol_at(1).unwrap(), a.symbol_at(2).unwrap(), a.symbol_at(3).unwrap()];
        let mut packed = vec![hdr1, hdr2];
        packed.extend(payload);
        assert!(matches!(unpack(&packed, &a), Err(Error::Corrupt { .. })));
    }
}
