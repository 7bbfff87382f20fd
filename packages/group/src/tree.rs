//! Fixed-depth binary Merkle tree over `uint256` leaves.
//!
//! The registry serves identity commitments in insertion order; the tree is
//! left-filled and padded with per-level zero values derived from the group
//! id, so two groups with the same members but different ids have different
//! roots.

use alloy_primitives::{keccak256, U256};

/// The smallest supported tree depth.
pub const MIN_DEPTH: u32 = 1;
/// The largest supported tree depth.
pub const MAX_DEPTH: u32 = 32;

/// Hashes two nodes into their parent.
#[must_use]
pub fn hash_pair(left: U256, right: U256) -> U256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(&left.to_be_bytes::<32>());
    preimage[32..].copy_from_slice(&right.to_be_bytes::<32>());
    U256::from_be_bytes(keccak256(preimage).0)
}

/// The zero value used to pad empty leaf slots for a given group id.
#[must_use]
pub fn zero_value(group_id: u64) -> U256 {
    U256::from_be_bytes(keccak256(U256::from(group_id).to_be_bytes::<32>()).0)
}

/// Computes the root of a left-filled tree of the given depth.
///
/// Leaves beyond `leaves.len()` are the per-level zero chain. The caller is
/// responsible for ensuring `leaves.len() <= 2^depth`.
#[must_use]
pub fn merkle_root(leaves: &[U256], depth: u32, zero: U256) -> U256 {
    let mut zero = zero;
    let mut level = leaves.to_vec();
    for _ in 0..depth {
        let mut parents = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            let left = pair[0];
            let right = pair.get(1).copied().unwrap_or(zero);
            parents.push(hash_pair(left, right));
        }
        zero = hash_pair(zero, zero);
        level = parents;
    }
    // An empty level means every leaf slot was a zero; the zero chain at
    // this point is the root of the all-zero tree.
    level.first().copied().unwrap_or(zero)
}
