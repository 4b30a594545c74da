//! Merkledrop is a deterministic Merkle commitment engine for airdrop allocation lists.
//!
//! # Overview
//! Given an ordered list of `(address, amount)` allocation records, the engine
//! derives a single 32-byte commitment root and a per-record inclusion proof.
//! The root can be published on-chain; each recipient later proves their
//! allocation belongs to the committed set without revealing the full list.
//!
//! The scheme is the sorted-pair Keccak-256 construction used by the deployed
//! on-chain verifier (and the viem/TypeScript tooling around it):
//! - a leaf is `keccak256(address ++ uint256_be(amount))` over the 52-byte
//!   packed encoding,
//! - a parent is `keccak256(min(a, b) ++ max(a, b))`, so pair hashing is
//!   commutative and serialized proofs need no side flags,
//! - an odd level duplicates its last node (self-pairing), matching the
//!   reference implementation byte for byte.
//!
//! # Architecture
//! - [`leaf`]: [`Allocation`] records, text parsing, and leaf-digest encoding
//! - [`hasher`]: Keccak-256 primitives and the commutative [`hash_pair`]
//! - [`tree`]: [`MerkleTree`] construction and proof generation
//! - [`proof`]: [`MerkleProof`] / [`ProofStep`] types and verification
//! - [`error`]: the [`TreeError`] taxonomy
//!
//! The engine is pure computation: no I/O, no global state, no caching. A tree
//! is rebuilt from scratch for each input batch and is immutable afterwards.
//!
//! # Example
//! ```
//! use merkledrop::{Allocation, MerkleTree};
//!
//! let allocations = vec![
//!     Allocation::parse("0x742C4d97C86bCF0176776C16e073b8c6f9Db4021", "1000")?,
//!     Allocation::parse("0x8ba1f109551bD432803012645Ac136c5a2B51Abc", "2000")?,
//! ];
//! let leaves: Vec<_> = allocations.iter().map(|a| a.leaf_hash()).collect();
//! let tree = MerkleTree::build(leaves.clone())?;
//! let proof = tree.proof(0)?;
//! assert!(proof.verify(&leaves[0], &tree.root()));
//! # Ok::<(), merkledrop::TreeError>(())
//! ```

pub mod error;
pub mod hasher;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use error::TreeError;
pub use hasher::{hash_pair, hash_to_hex, hex_to_hash, keccak, Hash32, ZERO_HASH32};
pub use leaf::Allocation;
pub use proof::{MerkleProof, ProofStep, Side};
pub use tree::MerkleTree;
