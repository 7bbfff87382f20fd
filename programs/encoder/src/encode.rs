//! ABI encoding of the group calldata tuple using `alloy-sol-types`.

use alloy_primitives::U256;
use alloy_sol_types::SolValue;
use semaphore_group::{group::Group, record::GroupRecord};

alloy_sol_types::sol! {
    /// Encoded via `abi.encode(uint256, string, uint256[], uint256, uint256)`
    /// (five separate params, not a struct).
    struct GroupCalldata {
        uint256 id;
        string name;
        uint256[] members;
        uint256 depth;
        uint256 root;
    }
}

impl GroupCalldata {
    /// Projects a wire record and its reconstructed group into calldata form.
    ///
    /// Only the first member survives the projection. The root comes from
    /// [`Group::root`], which was computed over the full member list before
    /// this truncation.
    #[must_use]
    pub fn project(record: &GroupRecord, group: &Group) -> Self {
        Self {
            id: U256::from(record.id),
            name: record.name.clone(),
            members: record.members.iter().take(1).copied().collect(),
            depth: U256::from(record.depth),
            root: group.root(),
        }
    }

    /// ABI-encodes the calldata as a parameter sequence.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.abi_encode_params()
    }
}
