/*!
# Drip Merkle

Merkle tree construction, proof generation and proof verification for Drip
token distributions.

A distribution commits a fixed set of `(recipient, amount)` allocations to a
single 32-byte root. Leaves are double-keccak hashes of the tight allocation
encoding; internal nodes hash their children in canonical numeric order
(smaller hash first), so proofs carry no left/right position bits. An odd
trailing node at any level is promoted unchanged to the next level.

The same `combine` primitive is used by the builder, the proof generator and
the verifier, which is what keeps off-chain generated proofs bit-exact
compatible with distributor-side verification.
*/

pub mod allocation;
pub mod hasher;
pub mod proof;
pub mod tree;

pub use allocation::Allocation;
pub use hasher::{combine, keccak256, leaf_hash};
pub use proof::{verify_proof, ClaimProof};
pub use tree::{DistributionTree, MerkleError};

// Re-export the primitive types the whole workspace shares.
pub use alloy_primitives::{Address, B256, U256};
