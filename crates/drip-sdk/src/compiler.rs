use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::info;

use drip_csvs::{read_allocations_csv, validate_allocations};
use drip_merkle::{verify_proof, Allocation, ClaimProof, DistributionTree};

use crate::error::{CompileError, CompileResult};

/// Everything one recipient needs to claim: their amount, their leaf hash
/// (informational) and the sibling path to the root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimEntry {
    pub amount: U256,
    pub leaf: B256,
    pub proof: ClaimProof,
}

/// The compiled output of a distribution: the root to deploy with, plus a
/// proof per recipient.
///
/// Claims are keyed by recipient in a `BTreeMap` so serialization order is
/// stable and re-compiling the same allocations produces a byte-identical
/// artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistributionArtifact {
    pub root: B256,
    pub claim_count: u64,
    pub total_amount: U256,
    pub claims: BTreeMap<Address, ClaimEntry>,
}

impl DistributionArtifact {
    pub fn claim_for(&self, recipient: &Address) -> Option<&ClaimEntry> {
        self.claims.get(recipient)
    }
}

/// Compile validated allocations into an artifact.
///
/// Every generated proof is re-verified against the computed root before the
/// artifact is returned; a failure here means the proof generator and the
/// verifier disagree and nothing should be deployed.
pub fn compile_distribution(allocations: Vec<Allocation>) -> CompileResult<DistributionArtifact> {
    let tree = DistributionTree::from_allocations(allocations);
    let root = tree.root();

    let mut total_amount = U256::ZERO;
    let mut claims = BTreeMap::new();

    for allocation in tree.allocations() {
        let proof = tree.proof_for_recipient(&allocation.recipient)?;
        let leaf = allocation.to_leaf_hash();

        if !verify_proof(root, leaf, proof.as_slice()) {
            return Err(CompileError::SelfCheckFailed {
                recipient: allocation.recipient,
            });
        }

        total_amount = total_amount
            .checked_add(allocation.amount)
            .ok_or(CompileError::NumericOverflow)?;

        claims.insert(
            allocation.recipient,
            ClaimEntry {
                amount: allocation.amount,
                leaf,
                proof,
            },
        );
    }

    let claim_count = claims.len() as u64;
    info!(%root, claim_count, %total_amount, "distribution compiled");

    Ok(DistributionArtifact {
        root,
        claim_count,
        total_amount,
        claims,
    })
}

/// Read, validate and compile an allocations CSV in one step.
pub fn compile_from_csv(csv_path: &Path) -> CompileResult<DistributionArtifact> {
    let rows = read_allocations_csv(csv_path)?;
    let allocations = validate_allocations(&rows)?;
    info!(path = %csv_path.display(), count = allocations.len(), "allocations loaded");
    compile_distribution(allocations)
}

pub fn write_artifact(artifact: &DistributionArtifact, path: &Path) -> CompileResult<()> {
    let json = serde_json::to_string_pretty(artifact)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "artifact written");
    Ok(())
}

pub fn read_artifact(path: &Path) -> CompileResult<DistributionArtifact> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_allocations() -> Vec<Allocation> {
        vec![
            Allocation::new(Address::repeat_byte(0x11), U256::from(1000u64)),
            Allocation::new(Address::repeat_byte(0x22), U256::from(2000u64)),
            Allocation::new(Address::repeat_byte(0x33), U256::from(3000u64)),
        ]
    }

    #[test]
    fn test_compile_counts_and_totals() {
        let artifact = compile_distribution(sample_allocations()).unwrap();
        assert_eq!(artifact.claim_count, 3);
        assert_eq!(artifact.total_amount, U256::from(6000u64));
        assert_eq!(artifact.claims.len(), 3);
    }

    #[test]
    fn test_compiled_proofs_verify_against_root() {
        let artifact = compile_distribution(sample_allocations()).unwrap();
        for entry in artifact.claims.values() {
            assert!(entry.proof.verify(artifact.root, entry.leaf));
        }
    }

    #[test]
    fn test_empty_distribution_compiles_to_zero_root() {
        let artifact = compile_distribution(vec![]).unwrap();
        assert_eq!(artifact.root, B256::ZERO);
        assert_eq!(artifact.claim_count, 0);
        assert_eq!(artifact.total_amount, U256::ZERO);
        assert!(artifact.claims.is_empty());
    }

    #[test]
    fn test_total_overflow_is_rejected() {
        let allocations = vec![
            Allocation::new(Address::repeat_byte(0x11), U256::MAX),
            Allocation::new(Address::repeat_byte(0x22), U256::from(1u64)),
        ];
        let result = compile_distribution(allocations);
        assert!(matches!(result, Err(CompileError::NumericOverflow)));
    }

    #[test]
    fn test_artifact_round_trips_through_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("artifact.json");

        let artifact = compile_distribution(sample_allocations()).unwrap();
        write_artifact(&artifact, &path).unwrap();
        let loaded = read_artifact(&path).unwrap();

        assert_eq!(loaded, artifact);
    }

    #[test]
    fn test_compilation_is_reproducible_byte_for_byte() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        write_artifact(&compile_distribution(sample_allocations()).unwrap(), &first).unwrap();
        write_artifact(&compile_distribution(sample_allocations()).unwrap(), &second).unwrap();

        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_compile_from_csv_end_to_end() {
        let dir = TempDir::new().unwrap();
        let csv_path = dir.path().join("allocations.csv");
        fs::write(
            &csv_path,
            "recipient,amount\n\
             0x1111111111111111111111111111111111111111,1000\n\
             0x2222222222222222222222222222222222222222,2000\n",
        )
        .unwrap();

        let artifact = compile_from_csv(&csv_path).unwrap();
        assert_eq!(artifact.claim_count, 2);
        assert_eq!(artifact.total_amount, U256::from(3000u64));
        assert!(artifact
            .claim_for(&Address::repeat_byte(0x11))
            .is_some());
    }
}
