//! This module defines the wire shape of a group descriptor.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// A semaphore group descriptor as served by the group registry.
///
/// Numeric fields arrive as base-10 strings; identity commitments can exceed
/// 64 bits, so members are parsed into `U256`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct GroupRecord {
    /// Group identifier
    #[serde(with = "crate::serde::number_as_string")]
    pub id: u64,
    /// Human-readable label
    pub name: String,
    /// Identity commitments, in insertion order
    #[serde(with = "crate::serde::uint256_list_as_string")]
    pub members: Vec<U256>,
    /// Merkle tree depth
    pub depth: u32,
}
