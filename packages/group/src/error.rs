//! This module defines errors for group reconstruction.

use crate::tree::{MAX_DEPTH, MIN_DEPTH};

/// The error type for reconstructing a group from its wire descriptor.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum GroupError {
    /// Tree depth outside the supported range
    #[error("tree depth {0} is outside the supported range {MIN_DEPTH}..={MAX_DEPTH}")]
    DepthOutOfRange(u32),

    /// Member list exceeds the tree capacity
    #[error("{count} members exceed the capacity of a depth-{depth} tree")]
    TooManyMembers {
        /// Number of members in the descriptor
        count: usize,
        /// Declared tree depth
        depth: u32,
    },
}
