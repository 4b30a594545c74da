//! The JSON output collaborator.
//!
//! Serializes the committed root plus one entry per record: the EIP-55
//! checksummed address, the original allocation text, and the proof as a flat
//! list of hex siblings. The side flags are dropped from the wire form, since
//! the on-chain verifier's sorted-pair hashing implies them; the engine's
//! typed proof remains the source of truth.

use crate::loader::AllocationRow;
use anyhow::{bail, Context, Result};
use merkledrop::{hash_to_hex, Allocation, MerkleTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationProof {
    pub allocation: String,
    pub proof: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputData {
    pub root_hash: String,
    /// Keyed by checksummed address; BTreeMap keeps the artifact stable
    /// across runs.
    pub allocations: BTreeMap<String, AllocationProof>,
}

/// Generates the artifact for a batch, self-checking every proof against the
/// root before it is emitted.
///
/// `rows` and `allocations` are the same records in the same order: the raw
/// text (for the serialized allocation field) and the parsed form (for
/// checksum display and leaf digests).
pub fn build_output(
    rows: &[AllocationRow],
    allocations: &[Allocation],
    tree: &MerkleTree,
) -> Result<OutputData> {
    let root = tree.root();
    let mut out = BTreeMap::new();

    for (i, (row, alloc)) in rows.iter().zip(allocations).enumerate() {
        let proof = tree
            .proof(i)
            .with_context(|| format!("failed to generate proof for record {i}"))?;
        if !proof.verify(&alloc.leaf_hash(), &root) {
            bail!("self-check failed: proof for record {i} does not reach the root");
        }
        out.insert(
            alloc.checksum_address(),
            AllocationProof {
                allocation: row.allocation.clone(),
                proof: proof.siblings_hex(),
            },
        );
    }

    Ok(OutputData {
        root_hash: hash_to_hex(&root),
        allocations: out,
    })
}

/// Writes the artifact to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, data: &OutputData, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };

    match path {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file {path:?}"))?;
            file.write_all(json.as_bytes())
                .with_context(|| format!("failed to write output file {path:?}"))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
