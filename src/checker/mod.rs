// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

//! Checks for updates to versioned software packages on Maven repositories.

mod builder;

use std::{cmp::Ordering, sync::Arc};

pub use builder::Builder;
use dashmap::DashMap;
use futures::future::join_all;
use semver::Version;
use tracing::error;
use url::Url;

use crate::{
    errors::Result,
    model::{Coordinates, DiscoveredArtifact, MavenRepo, UpdateStatus},
    repo_client::{FetchContext, RepoClient},
};

/// Checks whether a newer version of one software package has been
/// published to any of the configured repositories.
///
/// Remote results are cached per repository after the first fetch; call
/// [`refresh`] to drop the cache and read the remotes again.
///
/// Versions are ordered by semantic-versioning precedence, with build
/// metadata as a final lexical tiebreak.
///
/// [`refresh`]: UpdateChecker::refresh
pub struct UpdateChecker {
    pub(crate) coords: Coordinates,
    pub(crate) current: Version,
    pub(crate) classifier: Option<String>,
    pub(crate) repos: Vec<MavenRepo>,
    pub(crate) repo_client: Arc<dyn RepoClient>,
    /// Versions discovered so far, keyed by repository url.
    pub(crate) cache: DashMap<String, Vec<Version>>,
}

impl UpdateChecker {
    /// Shorthand for [`Builder::new`].
    pub fn builder(group_id: String, artifact_id: String, current_version: String) -> Builder {
        Builder::new(group_id, artifact_id, current_version)
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    pub fn current_version(&self) -> &Version {
        &self.current
    }

    pub fn repos(&self) -> &[MavenRepo] {
        &self.repos
    }

    /// Drops everything discovered so far, so the next call reads from the
    /// remotes again.
    pub fn refresh(&self) {
        self.cache.clear();
    }

    /// All versions available across the configured repositories, sorted
    /// ascending and deduplicated.
    ///
    /// Repositories are fetched concurrently; any repository failure fails
    /// the whole call.
    pub async fn versions(&self, ctx: &FetchContext) -> Result<Vec<Version>> {
        let fetches: Vec<_> = self
            .repos
            .iter()
            .map(|repo| self.versions_of(ctx, repo))
            .collect();

        let mut versions: Vec<Version> = Vec::new();
        for fetch_result in join_all(fetches).await {
            for version in fetch_result? {
                if !versions.contains(&version) {
                    versions.push(version);
                }
            }
        }
        versions.sort();
        Ok(versions)
    }

    /// Like [`versions`], but a failed fetch yields an empty list.
    ///
    /// [`versions`]: UpdateChecker::versions
    pub async fn versions_or_empty(&self, ctx: &FetchContext) -> Vec<Version> {
        self.versions(ctx).await.unwrap_or_default()
    }

    /// The most recent version available on any repository.
    pub async fn latest_version(&self, ctx: &FetchContext) -> Result<Option<Version>> {
        Ok(self.versions(ctx).await?.into_iter().max())
    }

    /// The most recent artifact (repository + version). If multiple
    /// repositories carry the most recent version, the artifact may point
    /// to any one of them.
    pub async fn latest_artifact(&self, ctx: &FetchContext) -> Result<Option<DiscoveredArtifact>> {
        // Fill the cache so every configured repo is represented.
        self.versions(ctx).await?;

        let mut latest: Option<DiscoveredArtifact> = None;
        for repo in &self.repos {
            if let Some(cached) = self.cache.get(repo.url().as_str()) {
                for version in cached.value() {
                    let newer = match &latest {
                        Some(artifact) => *version > artifact.version,
                        None => true,
                    };
                    if newer {
                        latest = Some(DiscoveredArtifact::new(repo.clone(), version.clone()));
                    }
                }
            }
        }
        Ok(latest)
    }

    /// Location of the downloadable bundle for the most recent artifact,
    /// honoring the configured classifier.
    pub async fn latest_bundle_url(&self, ctx: &FetchContext) -> Result<Option<Url>> {
        match self.latest_artifact(ctx).await? {
            Some(artifact) => Ok(Some(
                artifact.bundle_url(&self.coords, self.classifier.as_deref())?,
            )),
            None => Ok(None),
        }
    }

    /// Every artifact discovered so far, in repository order. Does not
    /// touch the network.
    pub fn discovered_artifacts(&self) -> Vec<DiscoveredArtifact> {
        let mut artifacts = Vec::new();
        for repo in &self.repos {
            if let Some(cached) = self.cache.get(repo.url().as_str()) {
                artifacts.extend(
                    cached
                        .value()
                        .iter()
                        .cloned()
                        .map(|version| DiscoveredArtifact::new(repo.clone(), version)),
                );
            }
        }
        artifacts
    }

    /// The update status of the software.
    ///
    /// `Unknown` when no repositories are configured or when they could
    /// not be read; fetch errors are logged, never propagated.
    pub async fn status(&self, ctx: &FetchContext) -> UpdateStatus {
        if self.repos.is_empty() {
            return UpdateStatus::Unknown;
        }

        match self.versions(ctx).await {
            Ok(versions) => {
                // Status goes by precedence; build metadata only matters
                // when ordering the full list.
                let outdated = versions
                    .iter()
                    .any(|v| v.cmp_precedence(&self.current) == Ordering::Greater);
                if outdated {
                    UpdateStatus::Outdated
                } else {
                    UpdateStatus::UpToDate
                }
            }
            Err(e) => {
                error!("Could not read from the configured repositories, err:{}", e);
                UpdateStatus::Unknown
            }
        }
    }

    async fn versions_of(&self, ctx: &FetchContext, repo: &MavenRepo) -> Result<Vec<Version>> {
        if let Some(cached) = self.cache.get(repo.url().as_str()) {
            return Ok(cached.value().clone());
        }

        let metadata = self.repo_client.fetch_metadata(ctx, repo, &self.coords).await?;
        self.cache
            .insert(repo.url().as_str().to_string(), metadata.versions.clone());
        Ok(metadata.versions)
    }
}
