//! Error taxonomy for the commitment engine.

use thiserror::Error;

/// Errors that can occur while encoding leaves, building a tree, or
/// requesting a proof.
///
/// Every variant is terminal for the batch it concerns: a malformed record
/// aborts processing of the whole input rather than being silently skipped,
/// since a dropped allocation would corrupt the committed root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The address text does not parse to 20 bytes of hex.
    #[error("malformed address {0:?}: expected 20 bytes of hex (40 hex chars, optional 0x prefix)")]
    MalformedAddress(String),

    /// The amount is negative or does not fit in an unsigned 256-bit integer.
    #[error("amount {0:?} is negative or exceeds 256 bits")]
    AmountOverflow(String),

    /// The amount text is not a decimal integer at all.
    #[error("cannot parse {0:?} as a decimal unsigned integer")]
    ParseError(String),

    /// A tree cannot be built from zero leaves.
    #[error("cannot build a Merkle tree from an empty leaf list")]
    EmptyInput,

    /// A proof was requested for a leaf position outside the tree.
    #[error("leaf index {index} out of range for a tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },
}
