//! Inclusion proof types and verification.
//!
//! A proof is an ordered list of (sibling, side) steps, one per tree level
//! below the root, from the leaf level upward. Because pair hashing sorts its
//! operands, the side flag does not change which digest gets computed here; it
//! is carried so that consumers reconstructing the path with a plain
//! (non-commutative) hasher can honor the original operand order.

use crate::hasher::{hash_pair, hash_to_hex, Hash32};

/// Which side of the path node the sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One level of an inclusion proof: a sibling digest and its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofStep {
    pub sibling: Hash32,
    pub side: Side,
}

/// An inclusion proof for a single leaf, ordered from the leaf level up to
/// immediately below the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerkleProof {
    pub steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// Recomputes the path from `leaf` through every step and compares the
    /// result to `root`.
    ///
    /// Total function: an invalid proof (wrong sibling, wrong length, wrong
    /// leaf) simply produces a non-matching digest and returns `false`. There
    /// is no separate malformed-proof failure class at this layer.
    pub fn verify(&self, leaf: &Hash32, root: &Hash32) -> bool {
        let mut current = *leaf;
        for step in &self.steps {
            current = match step.side {
                Side::Right => hash_pair(&current, &step.sibling),
                Side::Left => hash_pair(&step.sibling, &current),
            };
        }
        current == *root
    }

    /// Number of steps, i.e. the depth of the tree the proof came from.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the single-leaf tree, whose proof is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The sibling digests as `0x`-prefixed lowercase hex, in step order.
    ///
    /// This is the flattened wire form the on-chain verifier consumes; the
    /// side flags are implied by its sorted-pair hashing and dropped.
    pub fn siblings_hex(&self) -> Vec<String> {
        self.steps.iter().map(|s| hash_to_hex(&s.sibling)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::keccak;

    #[test]
    fn test_empty_proof_verifies_leaf_as_root() {
        let leaf = keccak(b"only");
        let proof = MerkleProof::default();
        assert!(proof.is_empty());
        assert!(proof.verify(&leaf, &leaf));
        assert!(!proof.verify(&leaf, &keccak(b"other")));
    }

    #[test]
    fn test_side_flags_are_equivalent_under_sorted_hashing() {
        let leaf = keccak(b"leaf");
        let sibling = keccak(b"sibling");
        let root = hash_pair(&leaf, &sibling);

        let right = MerkleProof {
            steps: vec![ProofStep { sibling, side: Side::Right }],
        };
        let left = MerkleProof {
            steps: vec![ProofStep { sibling, side: Side::Left }],
        };
        assert!(right.verify(&leaf, &root));
        assert!(left.verify(&leaf, &root));
    }

    #[test]
    fn test_siblings_hex_shape() {
        let proof = MerkleProof {
            steps: vec![
                ProofStep { sibling: keccak(b"a"), side: Side::Right },
                ProofStep { sibling: keccak(b"b"), side: Side::Left },
            ],
        };
        let hex = proof.siblings_hex();
        assert_eq!(hex.len(), 2);
        for h in hex {
            assert!(h.starts_with("0x"));
            assert_eq!(h.len(), 66);
        }
    }
}
