//! Allocation records and leaf-digest encoding.
//!
//! A leaf commits to one `(address, amount)` allocation using the packed
//! encoding the on-chain verifier checks against:
//! `keccak256(address ++ uint256_be(amount))`, i.e. 20 raw address bytes
//! followed by the 32-byte big-endian amount, 52 bytes total, no length
//! prefixes or padding.
//!
//! Address letter case never reaches the hash: the 20 raw bytes are identical
//! for any casing of the same address. EIP-55 checksumming is display-only.

use crate::error::TreeError;
use crate::hasher::{keccak, Hash32};
use alloy_primitives::ruint::{BaseConvertError, ParseError};
use alloy_primitives::{Address, U256};

/// Packed leaf encoding width: 20 address bytes + 32 amount bytes.
pub const LEAF_ENCODING_LENGTH: usize = 52;

/// One allocation record: a recipient address and the amount committed to it.
///
/// Immutable once constructed; the engine never mutates records after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub address: Address,
    pub amount: U256,
}

impl Allocation {
    pub fn new(address: Address, amount: U256) -> Self {
        Self { address, amount }
    }

    /// Parses an allocation from its textual form.
    ///
    /// The address accepts an optional `0x` prefix and any letter case; it
    /// must decode to exactly 20 bytes. The amount is a decimal unsigned
    /// integer of at most 256 bits.
    ///
    /// # Errors
    /// - [`TreeError::MalformedAddress`] when the address is not 20 bytes of hex
    /// - [`TreeError::AmountOverflow`] when the amount is negative or needs
    ///   more than 256 bits
    /// - [`TreeError::ParseError`] when the amount is not decimal at all
    pub fn parse(address: &str, amount: &str) -> Result<Self, TreeError> {
        let address = parse_address(address)?;
        let amount = parse_amount(amount)?;
        Ok(Self { address, amount })
    }

    /// Encodes the record into its fixed 52-byte packed form.
    pub fn encode(&self) -> [u8; LEAF_ENCODING_LENGTH] {
        let mut packed = [0u8; LEAF_ENCODING_LENGTH];
        packed[..20].copy_from_slice(self.address.as_slice());
        packed[20..].copy_from_slice(&self.amount.to_be_bytes::<32>());
        packed
    }

    /// Hashes the packed encoding into the record's leaf digest.
    pub fn leaf_hash(&self) -> Hash32 {
        keccak(self.encode())
    }

    /// The EIP-55 mixed-case checksum rendering of the address.
    ///
    /// Cosmetic only: the checksum is derived from the keccak hash of the
    /// lowercase hex text and never affects the hashed bytes.
    pub fn checksum_address(&self) -> String {
        self.address.to_checksum(None)
    }
}

/// Parses an address from hex text (optional `0x` prefix, case-insensitive).
pub fn parse_address(s: &str) -> Result<Address, TreeError> {
    s.trim()
        .parse::<Address>()
        .map_err(|_| TreeError::MalformedAddress(s.to_owned()))
}

/// Parses a decimal amount into a 256-bit unsigned integer.
pub fn parse_amount(s: &str) -> Result<U256, TreeError> {
    let trimmed = s.trim();
    if trimmed.starts_with('-') {
        return Err(TreeError::AmountOverflow(s.to_owned()));
    }
    if trimmed.is_empty() {
        return Err(TreeError::ParseError(s.to_owned()));
    }
    match U256::from_str_radix(trimmed, 10) {
        Ok(amount) => Ok(amount),
        Err(ParseError::BaseConvertError(BaseConvertError::Overflow)) => {
            Err(TreeError::AmountOverflow(s.to_owned()))
        }
        Err(_) => Err(TreeError::ParseError(s.to_owned())),
    }
}
