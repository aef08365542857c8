use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::hasher::combine;

/// Verify a merkle proof against a root and a leaf hash.
///
/// Folds `combine` over the proof starting from the leaf; the proof is valid
/// iff the running hash lands exactly on the root. Canonical ordering inside
/// `combine` makes the left/right position of each sibling irrelevant, but
/// the *sequence* of siblings matters: each element is consumed at exactly
/// one level of the tree.
///
/// Pure and deterministic; an empty proof verifies iff `leaf == root`
/// (the single-leaf degenerate tree).
pub fn verify_proof(root: B256, leaf: B256, proof: &[B256]) -> bool {
    let mut computed = leaf;
    for sibling in proof {
        computed = combine(computed, *sibling);
    }
    computed == root
}

/// An ordered sibling-hash sequence proving one leaf's membership.
///
/// Wraps `Vec<B256>` so distribution proofs can't be confused with arbitrary
/// hash lists in artifact plumbing, and so the JSON artifact serializes them
/// as a plain hash array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimProof(pub Vec<B256>);

impl ClaimProof {
    pub fn new(siblings: Vec<B256>) -> Self {
        Self(siblings)
    }

    pub fn as_slice(&self) -> &[B256] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<B256> {
        self.0
    }

    /// Verify this proof against a root and a leaf hash.
    pub fn verify(&self, root: B256, leaf: B256) -> bool {
        verify_proof(root, leaf, &self.0)
    }
}

impl From<Vec<B256>> for ClaimProof {
    fn from(siblings: Vec<B256>) -> Self {
        Self::new(siblings)
    }
}
