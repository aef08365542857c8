use std::collections::HashMap;

use alloy_primitives::{Address, B256};
use thiserror::Error;

use crate::allocation::Allocation;
use crate::hasher::combine;
use crate::proof::ClaimProof;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MerkleError {
    #[error("leaf index {index} out of bounds for {leaf_count} leaves")]
    InvalidIndex { index: usize, leaf_count: usize },
    #[error("recipient {0} is not part of this distribution")]
    RecipientNotFound(Address),
}

/// A merkle tree over one distribution's allocations.
///
/// Built once per distribution, entirely off-chain; only the 32-byte root is
/// persisted on the distributor. The tree keeps the leaf hashes and a
/// recipient → index map so per-recipient proofs are cheap to generate.
///
/// ## Folding rules
///
/// - N = 0: the root is the zero hash (an empty distribution is degenerate
///   but must not fail).
/// - N = 1: the root is the sole leaf; its proof is empty.
/// - N > 1: adjacent nodes are paired left-to-right with [`combine`]; an odd
///   trailing node is promoted unchanged to the next level — never
///   duplicated, never padded.
///
/// The root of any *pair* is insensitive to child order (canonical ordering
/// inside `combine`), but pairing positions still follow the input order
/// whenever a level has an odd node count. The proof generator walks exactly
/// this folding, so builder and generator can never disagree about tree
/// shape.
pub struct DistributionTree {
    root: B256,
    leaf_hashes: Vec<B256>,
    recipient_index: HashMap<Address, usize>,
    allocations: Vec<Allocation>,
}

impl DistributionTree {
    /// Build the tree for a frozen allocation list.
    ///
    /// Duplicate recipients are not rejected here (the CSV validation layer
    /// owns that invariant); if they slip through, the index map keeps the
    /// first occurrence.
    pub fn from_allocations(allocations: Vec<Allocation>) -> Self {
        let leaf_hashes: Vec<B256> = allocations.iter().map(Allocation::to_leaf_hash).collect();

        let mut recipient_index = HashMap::with_capacity(allocations.len());
        for (index, allocation) in allocations.iter().enumerate() {
            recipient_index.entry(allocation.recipient).or_insert(index);
        }

        let root = compute_root(&leaf_hashes);

        Self {
            root,
            leaf_hashes,
            recipient_index,
            allocations,
        }
    }

    pub fn root(&self) -> B256 {
        self.root
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_hashes.len()
    }

    pub fn leaf_hashes(&self) -> &[B256] {
        &self.leaf_hashes
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Generate the proof for the leaf at `index`.
    ///
    /// Walks the same bottom-up folding as the builder. At each level: an
    /// even index with a right neighbour emits that neighbour; an even index
    /// without one (odd count, last node) emits nothing — the node promotes
    /// unchanged; an odd index emits its left neighbour. Then `index /= 2`
    /// and the level folds.
    pub fn proof(&self, index: usize) -> Result<ClaimProof, MerkleError> {
        if index >= self.leaf_hashes.len() {
            return Err(MerkleError::InvalidIndex {
                index,
                leaf_count: self.leaf_hashes.len(),
            });
        }

        let mut siblings = Vec::new();
        let mut level = self.leaf_hashes.clone();
        let mut i = index;

        while level.len() > 1 {
            if i % 2 == 0 {
                if i + 1 < level.len() {
                    siblings.push(level[i + 1]);
                }
            } else {
                siblings.push(level[i - 1]);
            }
            i /= 2;
            level = fold_level(&level);
        }

        Ok(ClaimProof::new(siblings))
    }

    /// Generate the proof for a recipient's allocation.
    pub fn proof_for_recipient(&self, recipient: &Address) -> Result<ClaimProof, MerkleError> {
        let index = self
            .recipient_index
            .get(recipient)
            .ok_or(MerkleError::RecipientNotFound(*recipient))?;
        self.proof(*index)
    }

    /// Look up a recipient's allocation.
    pub fn allocation_for_recipient(
        &self,
        recipient: &Address,
    ) -> Result<&Allocation, MerkleError> {
        let index = self
            .recipient_index
            .get(recipient)
            .ok_or(MerkleError::RecipientNotFound(*recipient))?;
        self.allocations
            .get(*index)
            .ok_or(MerkleError::InvalidIndex {
                index: *index,
                leaf_count: self.allocations.len(),
            })
    }

    /// Generate proofs for several recipients at once.
    pub fn proofs_for_recipients(
        &self,
        recipients: &[Address],
    ) -> Result<HashMap<Address, ClaimProof>, MerkleError> {
        let mut proofs = HashMap::with_capacity(recipients.len());
        for recipient in recipients {
            proofs.insert(*recipient, self.proof_for_recipient(recipient)?);
        }
        Ok(proofs)
    }
}

/// Fold one level: pair adjacent nodes, promote an odd trailing node.
fn fold_level(level: &[B256]) -> Vec<B256> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(combine(pair[0], pair[1]));
    }
    if let [last] = pairs.remainder() {
        next.push(*last);
    }
    next
}

fn compute_root(leaves: &[B256]) -> B256 {
    match leaves.len() {
        0 => B256::ZERO,
        1 => leaves[0],
        _ => {
            let mut level = leaves.to_vec();
            while level.len() > 1 {
                level = fold_level(&level);
            }
            level[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::leaf_hash;
    use crate::proof::verify_proof;
    use alloy_primitives::U256;

    fn test_allocations(count: usize) -> Vec<Allocation> {
        (0..count)
            .map(|i| {
                let mut bytes = [0u8; 20];
                bytes[0] = (i & 0xff) as u8;
                bytes[1] = ((i >> 8) & 0xff) as u8;
                bytes[19] = 0x01;
                Allocation::new(Address::from(bytes), U256::from((i as u64 + 1) * 100))
            })
            .collect()
    }

    #[test]
    fn test_empty_tree_has_zero_root() {
        let tree = DistributionTree::from_allocations(vec![]);
        assert_eq!(tree.root(), B256::ZERO);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn test_single_leaf_tree() {
        let allocations = test_allocations(1);
        let leaf = allocations[0].to_leaf_hash();
        let tree = DistributionTree::from_allocations(allocations);

        assert_eq!(tree.root(), leaf, "single-leaf root equals the leaf");

        let proof = tree.proof(0).unwrap();
        assert!(proof.is_empty());
        assert!(proof.verify(tree.root(), leaf));
    }

    #[test]
    fn test_two_leaf_tree_root() {
        let allocations = test_allocations(2);
        let l0 = allocations[0].to_leaf_hash();
        let l1 = allocations[1].to_leaf_hash();
        let tree = DistributionTree::from_allocations(allocations);

        assert_eq!(tree.root(), combine(l0, l1));
        assert_eq!(tree.proof(0).unwrap().as_slice(), &[l1]);
        assert_eq!(tree.proof(1).unwrap().as_slice(), &[l0]);
    }

    #[test]
    fn test_three_leaf_tree_structure() {
        // Odd count at the leaf level: the last leaf promotes unchanged and
        // meets combine(l0, l1) one level up.
        let allocations = test_allocations(3);
        let l0 = allocations[0].to_leaf_hash();
        let l1 = allocations[1].to_leaf_hash();
        let l2 = allocations[2].to_leaf_hash();
        let tree = DistributionTree::from_allocations(allocations);

        let pair = combine(l0, l1);
        assert_eq!(tree.root(), combine(pair, l2));

        assert_eq!(tree.proof(0).unwrap().as_slice(), &[l1, l2]);
        assert_eq!(tree.proof(1).unwrap().as_slice(), &[l0, l2]);
        // Index 2 has no right neighbour at the leaf level: nothing emitted
        // there, only the combined pair one level up.
        assert_eq!(tree.proof(2).unwrap().as_slice(), &[pair]);
    }

    #[test]
    fn test_spec_scenario_known_vectors() {
        // Three allocations of 1000/2000/3000 tokens (18 decimals) for
        // recipients 0x11…, 0x22…, 0x33…; hashes pinned externally.
        let one_token = U256::from(10).pow(U256::from(18));
        let allocations = vec![
            Allocation::new(Address::repeat_byte(0x11), U256::from(1000u64) * one_token),
            Allocation::new(Address::repeat_byte(0x22), U256::from(2000u64) * one_token),
            Allocation::new(Address::repeat_byte(0x33), U256::from(3000u64) * one_token),
        ];
        let tree = DistributionTree::from_allocations(allocations);

        assert_eq!(
            hex::encode(tree.root()),
            "8869ca43d0584dacbc32e90e0a174d6c48b5af49490c258f3f20a23da263a3d4"
        );

        let proof_a = tree.proof(0).unwrap();
        assert_eq!(proof_a.len(), 2);
        assert_eq!(
            hex::encode(proof_a.as_slice()[0]),
            "018697b3e0af92efcc05f0bff4a0d32c3b26dc59795f0dd2df94d8f811adb1c5"
        );
        assert_eq!(
            hex::encode(proof_a.as_slice()[1]),
            "c6d543014870b0658337ef0191be8797de55d5bcef4d3e6eca01b154ae6b52d7"
        );

        let proof_c = tree.proof(2).unwrap();
        assert_eq!(proof_c.len(), 1);
        assert_eq!(
            hex::encode(proof_c.as_slice()[0]),
            "46fb6e52dbb2f0bde59cbdb85613f5353475e44036d65e8d3628ec3b26386308"
        );
    }

    #[test]
    fn test_round_trip_every_index_across_sizes() {
        // Sizes chosen to exercise odd counts at multiple levels (5 → 3 → 2,
        // 11 → 6 → 3 → 2, 13 → 7 → 4 → 2).
        for size in 1..=16 {
            let allocations = test_allocations(size);
            let tree = DistributionTree::from_allocations(allocations.clone());

            for (i, allocation) in allocations.iter().enumerate() {
                let proof = tree.proof(i).unwrap();
                assert!(
                    proof.verify(tree.root(), allocation.to_leaf_hash()),
                    "proof for index {i} of {size} leaves must verify"
                );
                assert!(
                    proof.len() <= size.next_power_of_two().trailing_zeros() as usize,
                    "proof for index {i} of {size} leaves exceeds ceil(log2(N))"
                );
            }
        }
    }

    #[test]
    fn test_tamper_rejection() {
        let allocations = test_allocations(8);
        let tree = DistributionTree::from_allocations(allocations.clone());
        let leaf = allocations[3].to_leaf_hash();
        let proof = tree.proof(3).unwrap();

        // Flip one byte of one sibling.
        let mut tampered = proof.clone().into_inner();
        let mut bytes: [u8; 32] = tampered[1].into();
        bytes[5] ^= 0x01;
        tampered[1] = B256::from(bytes);
        assert!(!verify_proof(tree.root(), leaf, &tampered));

        // Substitute another leaf's valid proof.
        let other = tree.proof(5).unwrap();
        assert!(!other.verify(tree.root(), leaf));

        // Drop the last element.
        let mut truncated = proof.into_inner();
        truncated.pop();
        assert!(!verify_proof(tree.root(), leaf, &truncated));
    }

    #[test]
    fn test_proof_index_out_of_bounds() {
        let tree = DistributionTree::from_allocations(test_allocations(3));
        assert_eq!(
            tree.proof(3),
            Err(MerkleError::InvalidIndex {
                index: 3,
                leaf_count: 3
            })
        );
    }

    #[test]
    fn test_proof_for_recipient() {
        let allocations = test_allocations(5);
        let tree = DistributionTree::from_allocations(allocations.clone());

        for allocation in &allocations {
            let proof = tree.proof_for_recipient(&allocation.recipient).unwrap();
            assert!(proof.verify(tree.root(), allocation.to_leaf_hash()));
        }

        let stranger = Address::repeat_byte(0xee);
        assert_eq!(
            tree.proof_for_recipient(&stranger),
            Err(MerkleError::RecipientNotFound(stranger))
        );
    }

    #[test]
    fn test_batch_proofs() {
        let allocations = test_allocations(6);
        let tree = DistributionTree::from_allocations(allocations.clone());
        let recipients: Vec<Address> = allocations.iter().map(|a| a.recipient).collect();

        let proofs = tree.proofs_for_recipients(&recipients).unwrap();
        assert_eq!(proofs.len(), recipients.len());
        for allocation in &allocations {
            assert!(proofs[&allocation.recipient].verify(tree.root(), allocation.to_leaf_hash()));
        }
    }

    #[test]
    fn test_deterministic_rebuild() {
        let allocations = test_allocations(9);
        let tree1 = DistributionTree::from_allocations(allocations.clone());
        let tree2 = DistributionTree::from_allocations(allocations.clone());

        assert_eq!(tree1.root(), tree2.root());
        for i in 0..allocations.len() {
            assert_eq!(tree1.proof(i).unwrap(), tree2.proof(i).unwrap());
        }
    }

    #[test]
    fn test_input_order_affects_root_with_odd_counts() {
        // Canonical ordering fixes each pair, but pairing positions follow
        // input order, so reordering leaves generally changes the root.
        let mut allocations = test_allocations(5);
        let tree1 = DistributionTree::from_allocations(allocations.clone());
        allocations.swap(0, 4);
        let tree2 = DistributionTree::from_allocations(allocations);
        assert_ne!(tree1.root(), tree2.root());
    }

    #[test]
    fn test_amount_binding() {
        // A proof is bound to the allocated amount through the leaf hash.
        let allocations = test_allocations(4);
        let tree = DistributionTree::from_allocations(allocations.clone());
        let proof = tree.proof(1).unwrap();

        let wrong_amount_leaf = leaf_hash(
            allocations[1].recipient,
            allocations[1].amount + U256::from(1),
        );
        assert!(!proof.verify(tree.root(), wrong_amount_leaf));
    }
}
