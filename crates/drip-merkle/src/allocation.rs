use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::hasher::leaf_hash;

/// One `(recipient, amount)` entry of a distribution.
///
/// Immutable once fixed into a distribution: the leaf hash commits to both
/// fields, so changing either invalidates every proof derived from the tree.
/// Recipient uniqueness is NOT enforced here — duplicate recipients produce
/// duplicate leaves and must be rejected upstream (the CSV validation layer
/// does this).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub recipient: Address,
    pub amount: U256,
}

impl Allocation {
    pub fn new(recipient: Address, amount: U256) -> Self {
        Self { recipient, amount }
    }

    /// Leaf hash committing to this allocation.
    pub fn to_leaf_hash(&self) -> B256 {
        leaf_hash(self.recipient, self.amount)
    }
}
