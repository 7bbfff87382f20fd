//! This module reconstructs a group from its wire descriptor.

use alloy_primitives::U256;

use crate::{
    error::GroupError,
    record::GroupRecord,
    tree::{self, MAX_DEPTH, MIN_DEPTH},
};

/// A reconstructed semaphore group.
///
/// The root is recomputed from the full member list at construction time and
/// never read from the wire payload; any later truncation of the member list
/// (e.g. for calldata projection) must not feed back into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: u64,
    depth: u32,
    members: Vec<U256>,
    root: U256,
}

impl Group {
    /// Reconstructs the group and computes its Merkle root.
    ///
    /// # Errors
    /// Returns an error if the depth is outside the supported range or the
    /// member list exceeds the tree capacity.
    pub fn from_record(record: &GroupRecord) -> Result<Self, GroupError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&record.depth) {
            return Err(GroupError::DepthOutOfRange(record.depth));
        }
        let capacity = 1_u64 << record.depth;
        if record.members.len() as u64 > capacity {
            return Err(GroupError::TooManyMembers {
                count: record.members.len(),
                depth: record.depth,
            });
        }

        let root = tree::merkle_root(
            &record.members,
            record.depth,
            tree::zero_value(record.id),
        );

        Ok(Self {
            id: record.id,
            depth: record.depth,
            members: record.members.clone(),
            root,
        })
    }

    /// The group identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The tree depth.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// The full, untruncated member list.
    #[must_use]
    pub fn members(&self) -> &[U256] {
        &self.members
    }

    /// The Merkle root over the full member list.
    #[must_use]
    pub const fn root(&self) -> U256 {
        self.root
    }
}
