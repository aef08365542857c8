use alloy_primitives::{Address, B256, U256};
use tiny_keccak::{Hasher as _, Keccak};

/// Keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> B256 {
    let mut keccak = Keccak::v256();
    keccak.update(data);
    let mut output = [0u8; 32];
    keccak.finalize(&mut output);
    B256::from(output)
}

/// Hash one allocation into a leaf: `keccak256(keccak256(recipient ‖ amount))`.
///
/// The encoding is tight and fixed-width — 20-byte address followed by the
/// 32-byte big-endian amount — so no two distinct allocations share an
/// encoding. The double hash gives leaves a different pre-image shape than
/// internal nodes (which hash exactly 64 bytes), so a crafted internal-node
/// pre-image can never masquerade as a leaf.
pub fn leaf_hash(recipient: Address, amount: U256) -> B256 {
    let mut encoded = [0u8; 52];
    encoded[..20].copy_from_slice(recipient.as_slice());
    encoded[20..].copy_from_slice(&amount.to_be_bytes::<32>());
    keccak256(keccak256(&encoded).as_slice())
}

/// Hash an ordered-by-value child pair: `keccak256(min(a, b) ‖ max(a, b))`.
///
/// Canonical numeric ordering (not positional left/right) means a verifier
/// can recompute a parent from a child and its sibling without knowing which
/// side the sibling sat on, so proofs need no position bits.
pub fn combine(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(lo.as_slice());
    data[32..].copy_from_slice(hi.as_slice());
    keccak256(&data)
}
