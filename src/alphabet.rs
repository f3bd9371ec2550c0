//! Symbol ranges and piecewise alphabets: the bijection between an
//! alphabet's logical indices `[0, L)` and its concrete symbols.

use num_traits::{NumCast, PrimInt};

use crate::error::{Error, Result};

/// A contiguous interval `[lo, hi]` over an ordinal symbol type `T`.
///
/// `T` is any primitive integer (`u8`, `u16`, `u32`, ...) per
/// `num_traits::PrimInt`, the usual bound for a generic small-integer
/// element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRange<T: PrimInt> {
    lo: T,
    hi: T,
}

impl<T: PrimInt> SymbolRange<T> {
    /// Build a range `[lo, hi]`. Fails if `lo > hi`.
    pub fn new(lo: T, hi: T) -> Result<Self> {
        if lo > hi {
            return Err(Error::CodecInvalid {
                reason: "symbol range has lo > hi",
            });
        }
        Ok(Self { lo, hi })
    }

    /// Number of symbols covered by this range.
    pub fn len(&self) -> usize {
        // hi >= lo is an invariant of construction, so this never underflows.
        NumCast::from(self.hi - self.lo).unwrap_or(usize::MAX - 1) + 1
    }

    /// A range never has zero length; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn lo(&self) -> T {
        self.lo
    }

    pub fn hi(&self) -> T {
        self.hi
    }

    fn contains(&self, s: T) -> bool {
        s >= self.lo && s <= self.hi
    }
}

/// An ordered, non-empty concatenation of symbol ranges over one symbol
/// type, exposing a total bijection between `[0, L)` and the union of its
/// ranges.
///
/// Ranges are treated with first-match priority: if two ranges were to
/// overlap as coordinates, `index_of` resolves to the first one containing
/// the symbol. Callers should keep ranges disjoint; this is the intended use
/// and nothing here detects overlap.
#[derive(Debug, Clone)]
pub struct Alphabet<T: PrimInt> {
    ranges: Vec<SymbolRange<T>>,
    /// cumulative length up to (not including) each range, same length as `ranges`
    offsets: Vec<usize>,
    length: usize,
}

impl<T: PrimInt> Alphabet<T> {
    /// Build a piecewise alphabet from an ordered list of ranges.
    pub fn new(ranges: Vec<SymbolRange<T>>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(Error::CodecInvalid {
                reason: "alphabet must have at least one range",
            });
        }
        let mut offsets = Vec::with_capacity(ranges.len());
        let mut length = 0usize;
        for r in &ranges {
            offsets.push(length);
            length += r.len();
        }
        Ok(Self { ranges, offsets, length })
    }

    /// Convenience constructor for a single contiguous range.
    pub fn single(lo: T, hi: T) -> Result<Self> {
        Self::new(vec![SymbolRange::new(lo, hi)?])
    }

    /// Total number of symbols, `L`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Map a logical index `i` in `[0, L)` to its symbol.
    pub fn symbol_at(&self, i: usize) -> Result<T> {
        if i >= self.length {
            return Err(Error::OutOfRange { length: self.length });
        }
        // first range whose cumulative span covers i
        let j = match self.offsets.binary_search(&i) {
            Ok(exact) => exact,
            Err(insert_at) => insert_at - 1,
        };
        let within = i - self.offsets[j];
        let offset: T = NumCast::from(within).expect("within a range fits T by construction");
        Ok(self.ranges[j].lo + offset)
    }

    /// Map a concrete symbol to its logical index, first-match over the
    /// ordered ranges.
    pub fn index_of(&self, s: T) -> Result<usize> {
        for (j, r) in self.ranges.iter().enumerate() {
            if r.contains(s) {
                let within: usize =
                    NumCast::from(s - r.lo()).expect("s - lo fits usize by construction");
                return Ok(self.offsets[j] + within);
            }
        }
        Err(Error::OutOfRange { length: self.length })
    }
}
