// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

mod http_client;
mod mock_repo_client;

use std::time::Duration;

use async_trait::async_trait;
pub use http_client::{HttpRepoClient, HttpRepoClientBuilder};
pub use mock_repo_client::MockRepoClient;

use crate::{
    errors::Result,
    model::{ArtifactMetadata, Coordinates, MavenRepo},
};

/// Context for a metadata fetch.
#[derive(Clone, Debug, Default)]
pub struct FetchContext {
    pub timeout: Option<Duration>,
}

impl FetchContext {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The transport used to read versioning information off a repository.
#[async_trait]
pub trait RepoClient: Send + Sync {
    /// Fetch and parse the version metadata the repository publishes for
    /// the package with the given coordinates.
    async fn fetch_metadata(
        &self,
        ctx: &FetchContext,
        repo: &MavenRepo,
        coords: &Coordinates,
    ) -> Result<ArtifactMetadata>;
}
