//! LZW dictionary-building compressor/decompressor, including the
//! first-repeat ("kwkwk") decode edge case.
//!
//! Built around a `HashMap`-backed trie keyed by `(phrase_code,
//! next_symbol_index)`, generalized from a fixed byte alphabet to an
//! arbitrary input alphabet's index space, and kept to the standard
//! trie-of-codes representation: a phrase is identified purely by the code
//! it was assigned, so the encode dictionary only needs
//! `(phrase_code, next_symbol_index) -> new_code` instead of storing the
//! phrase itself.

use std::collections::HashMap;

use num_traits::PrimInt;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// The code stream produced by [`encode_codes`], together with the largest
/// code it contains (needed by the caller to choose a bit depth).
pub struct EncodedCodes {
    pub codes: Vec<usize>,
    pub max_code: usize,
}

/// Build the LZW code stream for `input`, whose symbols are drawn from
/// `alphabet_in`.
pub fn encode_codes<T: PrimInt>(input: &[T], alphabet_in: &Alphabet<T>) -> Result<EncodedCodes> {
    if input.is_empty() {
        return Ok(EncodedCodes { codes: Vec::new(), max_code: 0 });
    }
    let l_in = alphabet_in.length();
    let mut dict: HashMap<(usize, usize), usize> = HashMap::new();
    let mut next_code = l_in;
    let mut codes = Vec::with_capacity(input.len() + input.len() / 2);
    let mut max_code = l_in.saturating_sub(1);

    let mut phrase_code = alphabet_in.index_of(input[0])?;
    for &sym in &input[1..] {
        let idx = alphabet_in.index_of(sym)?;
        if let Some(&known) = dict.get(&(phrase_code, idx)) {
            // P ++ [c] is already a phrase: keep matching, emit nothing.
            phrase_code = known;
            continue;
        }
        dict.insert((phrase_code, idx), next_code);
        codes.push(phrase_code);
        max_code = max_code.max(phrase_code);
        next_code += 1;
        phrase_code = idx;
    }
    codes.push(phrase_code);
    max_code = max_code.max(phrase_code);

    log::debug!(
        "encoded {} input symbols into {} codes; dictionary grew to {} entries (max code {})",
        input.len(),
        codes.len(),
        next_code,
        max_code
    );
    Ok(EncodedCodes { codes, max_code })
}

/// Invert [`encode_codes`]: rebuild the input symbol sequence from a code
/// stream, handling the kwkwk case where a code equals the next
/// to-be-assigned dictionary index.
pub fn decode_codes<T: PrimInt>(codes: &[usize], alphabet_in: &Alphabet<T>) -> Result<Vec<T>> {
    if codes.is_empty() {
        return Ok(Vec::new());
    }
    let l_in = alphabet_in.length();
    let mut dict: Vec<Vec<usize>> = (0..l_in).map(|i| vec![i]).collect();

    let first = codes[0];
    if first >= dict.len() {
        return Err(Error::Corrupt {
            reason: "first code is not a known dictionary entry",
        });
    }
    let mut out_indices: Vec<usize> = Vec::with_capacity(codes.len() * 2);
    out_indices.extend_from_slice(&dict[first]);
    let mut old = first;

    for &code in &codes[1..] {
        let prev_phrase = dict[old].clone();
        let entry = match code.cmp(&dict.len()) {
            std::cmp::Ordering::Less => dict[code].clone(),
            std::cmp::Ordering::Equal => {
                // kwkwk: the incoming code names the phrase we are about to
                // add, which is always prev_phrase extended by its own
                // first symbol.
                let mut extended = prev_phrase.clone();
                extended.push(prev_phrase[0]);
                extended
            }
            std::cmp::Ordering::Greater => {
                return Err(Error::Corrupt {
                    reason: "code exceeds the next dictionary index by more than one",
                })
            }
        };
        out_indices.extend_from_slice(&entry);
        let mut new_entry = prev_phrase;
        new_entry.push(entry[0]);
        dict.push(new_entry);
        old = code;
    }

    log::debug!(
        "decoded {} codes into {} symbols; dictionary grew to {} entries",
        codes.len(),
        out_indices.len(),
        dict.len()
    );
    out_indices.into_iter().map(|i| alphabet_in.symbol_at(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::ascii_128;

    fn to_symbols(s: &str) -> Vec<u8> {
        s.bytes().collect()
    }

    #[test]
    fn wikipedia_example_round_trips() {
        let a = ascii_128();
        let input = to_symbols("TOBEORNOTTOBEORTOBEORNOT");
        let enc = encode_codes(&input, &a).unwrap();
        // every input symbol is new exactly as many times as the alphabet is
        // exhausted: this string has repeats, so codes are fewer than input.
        assert!(enc.codes.len() <= input.len());
        let decoded = decode_codes(&enc.codes, &a).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn single_symbol_round_trips() {
        let a = ascii_128();
        let input = to_symbols("A");
        let enc = encode_codes(&input, &a).unwrap();
        assert_eq!(enc.codes.len(), 1);
        assert_eq!(enc.codes[0], a.index_of(b'A').unwrap());
        let decoded = decode_codes(&enc.codes, &a).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn kwkwk_case_is_exercised_and_round_trips() {
        let a = ascii_128();
        let input = to_symbols("ABABABAB");
        let enc = encode_codes(&input, &a).unwrap();
        let l_in = a.length();
        assert!(
            enc.codes.iter().any(|&c| c >= l_in),
            "expected at least one non-singleton code"
        );
        let decoded = decode_codes(&enc.codes, &a).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn alphabet_violation_is_out_of_range() {
        let narrow = Alphabet::<u8>::single(b'A', b'Z').unwrap();
        let input = vec![b'a']; // lowercase, outside the range
        assert_eq!(
            encode_codes(&input, &narrow).unwrap_err(),
            Error::OutOfRange { length: narrow.length() }
        );
    }

    #[test]
    fn corrupt_first_code_is_detected() {
        let a = ascii_128();
        let codes = vec![a.length() + 5];
        assert!(matches!(decode_codes::<u8>(&codes, &a), Err(Error::Corrupt { .. })));
    }

    #[test]
    fn corrupt_code_gap_is_detected() {
        let a = ascii_128();
        // valid first code, then a code that leaps far past dict.len()
        let codes = vec![a.index_of(b'A').unwrap(), a.length() + 10];
        assert!(matches!(decode_codes::<u8>(&codes, &a), Err(Error::Corrupt { .. })));
    }
}
