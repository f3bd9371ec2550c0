//! Failure kinds for the alphabet, packer, LZW, and codec layers.

/// Errors surfaced by this crate. None are recovered internally; a caller
/// sees exactly the failure kind that was detected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An alphabet bijection (`symbol_at`/`index_of`) was queried outside
    /// `[0, L)`, or outside the union of the alphabet's ranges.
    #[error("index or symbol out of range for an alphabet of length {length}")]
    OutOfRange {
        /// Length of the alphabet that rejected the query.
        length: usize,
    },

    /// The encoder chose a `bit_depth` that cannot be packed: either it
    /// exceeds the machine word width, or it is not smaller than the pack
    /// alphabet's cardinality.
    #[error("bit depth {bit_depth} exceeds packer capacity (pack alphabet length {pack_len})")]
    CapacityExceeded {
        /// The bit depth the encoder tried to use.
        bit_depth: usize,
        /// Cardinality of the pack alphabet.
        pack_len: usize,
    },

    /// A `Codec` was constructed from an alphabet pair that can never
    /// produce a valid packed stream.
    #[error("codec is invalid: {reason}")]
    CodecInvalid {
        /// Human-readable reason, fixed at the call site.
        reason: &'static str,
    },

    /// The packed stream ended inside the two-symbol header.
    #[error("packed stream truncated before the header was fully read")]
    Truncated,

    /// The packed stream's header or payload is internally inconsistent.
    #[error("corrupt packed stream: {reason}")]
    Corrupt {
        /// Human-readable reason, fixed at the call site.
        reason: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
