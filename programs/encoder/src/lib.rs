//! Fetches a semaphore group descriptor and re-encodes it as contract calldata.

#![deny(clippy::nursery, clippy::pedantic, warnings, unused_crate_dependencies)]

pub mod cli;
pub mod encode;

use anyhow as _;
use semaphore_group_api as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;
