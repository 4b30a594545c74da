//! Merkle tree construction and proof generation.
//!
//! The tree is built level by level from an ordered leaf sequence: each level
//! is formed by pair-hashing consecutive nodes of the level below, and an odd
//! level pairs its last node with itself. Every intermediate level is retained
//! so proofs can be generated by index without rehashing.
//!
//! Leaf order is part of the committed data: permuting the leaves changes the
//! root. The structure is immutable after construction; a changed input batch
//! means a rebuild from scratch.

use crate::error::TreeError;
use crate::hasher::{hash_pair, Hash32};
use crate::proof::{MerkleProof, ProofStep, Side};
use log::debug;
use rayon::prelude::*;

/// Minimum level width before pair hashing is spread across rayon workers.
/// Pairs within a level have no data dependency on each other; only the
/// level-to-level sequencing is ordered.
const PARALLEL_HASH_MIN_WIDTH: usize = 4096;

/// A fully built Merkle tree: every level from the leaves (level 0) up to the
/// single-element root level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash32>>,
}

impl MerkleTree {
    /// Builds the tree from an ordered, non-empty leaf sequence.
    ///
    /// Each level has `ceil(len(prev) / 2)` nodes; the node at position `i`
    /// derives from positions `2i` and `2i + 1` of the level below, with an
    /// unpaired last node hashed against itself. The self-pairing rule is a
    /// known characteristic of this scheme and must match the deployed
    /// verifier byte for byte, so it is deliberately not "fixed" here.
    ///
    /// O(n) hash operations across all levels, O(log n) levels.
    ///
    /// # Errors
    /// [`TreeError::EmptyInput`] when `leaves` is empty.
    pub fn build(leaves: Vec<Hash32>) -> Result<Self, TreeError> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let next = next_level(&current);
            levels.push(std::mem::replace(&mut current, next));
        }
        levels.push(current);

        let tree = Self { levels };
        debug!(
            "built merkle tree: {} leaves, depth {}",
            tree.leaf_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// The committed root digest.
    pub fn root(&self) -> Hash32 {
        // build() guarantees a final single-element level.
        self.levels[self.levels.len() - 1][0]
    }

    /// The leaf digests in their original input order.
    pub fn leaves(&self) -> &[Hash32] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves; 0 for a single-leaf tree.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Every level, leaves first, root level last.
    pub fn levels(&self) -> &[Vec<Hash32>] {
        &self.levels
    }

    /// Generates the inclusion proof for the leaf at `leaf_index`.
    ///
    /// Walks from the leaf level upward: an even index takes the sibling at
    /// `index + 1` (side RIGHT), an odd one at `index - 1` (side LEFT). A
    /// sibling index past the end of a level is the odd-duplication case and
    /// resolves to the node itself, mirroring the builder's self-pairing.
    ///
    /// # Errors
    /// [`TreeError::IndexOutOfRange`] when `leaf_index >= leaf_count()`.
    pub fn proof(&self, leaf_index: usize) -> Result<MerkleProof, TreeError> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            return Err(TreeError::IndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }

        let mut steps = Vec::with_capacity(self.depth());
        let mut index = leaf_index;
        for level in &self.levels[..self.levels.len() - 1] {
            let (sibling_index, side) = if index % 2 == 0 {
                (index + 1, Side::Right)
            } else {
                (index - 1, Side::Left)
            };
            let sibling = *level.get(sibling_index).unwrap_or(&level[index]);
            steps.push(ProofStep { sibling, side });
            index /= 2;
        }
        Ok(MerkleProof { steps })
    }
}

/// Hashes one level into the next, preserving index order.
fn next_level(level: &[Hash32]) -> Vec<Hash32> {
    let parent = |pair: &[Hash32]| match pair {
        [left, right] => hash_pair(left, right),
        [odd] => hash_pair(odd, odd),
        _ => unreachable!("chunks(2) yields one or two nodes"),
    };
    if level.len() >= PARALLEL_HASH_MIN_WIDTH {
        level.par_chunks(2).map(parent).collect()
    } else {
        level.chunks(2).map(parent).collect()
    }
}
