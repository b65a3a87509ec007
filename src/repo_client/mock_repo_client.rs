// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{
    errors::{Error, Result},
    model::{ArtifactMetadata, Coordinates, MavenRepo},
    repo_client::{FetchContext, RepoClient},
};

/// Repo client used for testing.
///
/// Serves canned metadata keyed by repository name; a repository missing
/// from the table behaves like one that has never heard of the artifact.
pub struct MockRepoClient {
    pub metadata_table: Arc<DashMap<String, ArtifactMetadata>>,
}

#[async_trait]
impl RepoClient for MockRepoClient {
    async fn fetch_metadata(
        &self,
        _ctx: &FetchContext,
        repo: &MavenRepo,
        _coords: &Coordinates,
    ) -> Result<ArtifactMetadata> {
        match self.metadata_table.get(repo.name()) {
            Some(metadata) => Ok(metadata.value().clone()),
            None => Err(Error::Status {
                code: 404,
                url: repo.url().to_string(),
            }),
        }
    }
}
