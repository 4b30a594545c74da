//! Keccak-256 hashing primitives shared by the whole engine.
//!
//! Leaves, internal nodes, and the root are all opaque 32-byte digests; there
//! is no structural tag distinguishing them. Domain separation comes only from
//! what bytes were hashed to produce a digest (52-byte packed leaf encoding
//! vs. 64-byte sorted node pair).

use crate::error::TreeError;
use alloy_primitives::keccak256;

/// Type alias for a 32-byte hash value, the universal currency of the tree.
pub type Hash32 = [u8; 32];

/// A constant representing a hash of all zeros.
pub const ZERO_HASH32: Hash32 = [0u8; 32];

/// Computes the Keccak-256 hash of a single value.
pub fn keccak<T: AsRef<[u8]>>(a: T) -> Hash32 {
    keccak256(a.as_ref()).0
}

/// Combines two digests into their parent digest.
///
/// The pair is canonicalized first: the byte-lexicographically smaller digest
/// is hashed before the larger one, so `hash_pair(a, b) == hash_pair(b, a)`
/// for all inputs. This is what lets the on-chain verifier recompute a root
/// from a bare sibling list without left/right flags.
pub fn hash_pair(a: &Hash32, b: &Hash32) -> Hash32 {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    let mut packed = [0u8; 64];
    packed[..32].copy_from_slice(first);
    packed[32..].copy_from_slice(second);
    keccak(packed)
}

/// Renders a digest as lowercase hex text with a `0x` prefix.
pub fn hash_to_hex(h: &Hash32) -> String {
    format!("0x{}", hex::encode(h))
}

/// Parses `0x`-prefixed (or bare) hex text back into a digest.
///
/// Returns [`TreeError::ParseError`] unless the text is exactly 32 bytes of
/// hex.
pub fn hex_to_hash(s: &str) -> Result<Hash32, TreeError> {
    let cleaned = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(cleaned).map_err(|_| TreeError::ParseError(s.to_owned()))?;
    bytes
        .try_into()
        .map_err(|_| TreeError::ParseError(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak_known_vectors() {
        // Standard Ethereum test vectors.
        assert_eq!(
            hash_to_hex(&keccak(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
        assert_eq!(
            hash_to_hex(&keccak(b"hello world")),
            "0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"
        );
    }

    #[test]
    fn test_hash_pair_commutative() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_hash_pair_sorts_before_hashing() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];

        let mut packed = [0u8; 64];
        packed[..32].copy_from_slice(&a);
        packed[32..].copy_from_slice(&b);

        // a < b, so both call orders must hash a ++ b.
        assert_eq!(hash_pair(&a, &b), keccak(packed));
        assert_eq!(hash_pair(&b, &a), keccak(packed));
    }

    #[test]
    fn test_hash_pair_self() {
        let a = [0x33u8; 32];
        let mut packed = [0u8; 64];
        packed[..32].copy_from_slice(&a);
        packed[32..].copy_from_slice(&a);
        assert_eq!(hash_pair(&a, &a), keccak(packed));
    }

    #[test]
    fn test_hex_round_trip() {
        let h = keccak(b"round trip");
        let text = hash_to_hex(&h);
        assert!(text.starts_with("0x"));
        assert_eq!(text.len(), 66);
        assert_eq!(hex_to_hash(&text).unwrap(), h);
        assert_eq!(hex_to_hash(text.strip_prefix("0x").unwrap()).unwrap(), h);
    }

    #[test]
    fn test_hex_to_hash_rejects_bad_input() {
        assert!(hex_to_hash("0xdeadbeef").is_err());
        assert!(hex_to_hash("not hex at all").is_err());
    }
}
