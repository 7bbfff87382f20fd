//! This module implements the `GroupApiClient` to interact with the group
//! registry.

use reqwest::{Client, StatusCode};
use semaphore_group::record::GroupRecord;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::GroupApiClientError;

const SEMAPHORE_PATH: &str = "/semaphore";

/// The api client for interacting with the group registry.
#[allow(clippy::module_name_repetitions)]
pub struct GroupApiClient {
    client: Client,
    base_url: String,
}

impl GroupApiClient {
    /// Create new `GroupApiClient`
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches the group descriptor for the given group id.
    /// # Errors
    /// Returns an error if the request fails or the response is not successfully deserialized
    pub async fn group(&self, group_id: u64) -> Result<GroupRecord, GroupApiClientError> {
        self.get_json(&group_path(group_id)).await
    }

    // Helper functions
    #[tracing::instrument(skip_all)]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GroupApiClientError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(%url, "get_json");

        let res = self.client.get(url).send().await?;

        match res.status() {
            StatusCode::OK => {
                let bytes = res.bytes().await?;

                debug!(response = %String::from_utf8_lossy(&bytes), "get_json");

                Ok(serde_json::from_slice(&bytes).map_err(GroupApiClientError::Json)?)
            }
            code => Err(GroupApiClientError::Status {
                code,
                text: res.text().await?,
            }),
        }
    }
}

/// The request path for the given group id.
///
/// The id selects which group is fetched; it is part of the path, not a
/// query parameter.
fn group_path(group_id: u64) -> String {
    format!("{SEMAPHORE_PATH}/{group_id}")
}
