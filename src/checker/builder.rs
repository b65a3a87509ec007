// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use std::sync::Arc;

use dashmap::DashMap;
use semver::Version;

use super::UpdateChecker;
use crate::{
    errors::Result,
    model::{Coordinates, MavenRepo, MAVEN_CENTRAL},
    options::HttpConfig,
    repo_client::{HttpRepoClientBuilder, RepoClient},
};

/// Checker builder.
///
/// Repositories are searched in the order they were added; adding the same
/// repository url twice keeps the first occurrence.
pub struct Builder {
    group_id: String,
    artifact_id: String,
    current_version: String,
    classifier: Option<String>,
    repos: Vec<MavenRepo>,
    raw_repos: Vec<(String, String)>,
    http_config: HttpConfig,
    repo_client: Option<Arc<dyn RepoClient>>,
}

impl Builder {
    pub fn new(group_id: String, artifact_id: String, current_version: String) -> Self {
        Self {
            group_id,
            artifact_id,
            current_version,
            classifier: None,
            repos: Vec::new(),
            raw_repos: Vec::new(),
            http_config: HttpConfig::default(),
            repo_client: None,
        }
    }

    /// Classifier appended to the bundle file name, e.g. `linux64`.
    #[inline]
    pub fn classifier(mut self, classifier: String) -> Self {
        self.classifier = Some(classifier);
        self
    }

    #[inline]
    pub fn repo(mut self, repo: MavenRepo) -> Self {
        self.repos.push(repo);
        self
    }

    /// Adds a repository by raw url. The url is validated in [`build`].
    ///
    /// [`build`]: Builder::build
    #[inline]
    pub fn repo_url(mut self, name: String, url: String) -> Self {
        self.raw_repos.push((name, url));
        self
    }

    /// Adds Maven Central.
    #[inline]
    pub fn maven_central(self) -> Self {
        self.repo_url("central".to_string(), MAVEN_CENTRAL.to_string())
    }

    #[inline]
    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Replaces the http transport, mostly useful for tests.
    #[inline]
    pub fn repo_client(mut self, repo_client: Arc<dyn RepoClient>) -> Self {
        self.repo_client = Some(repo_client);
        self
    }

    pub fn build(self) -> Result<UpdateChecker> {
        let coords = Coordinates::new(self.group_id, self.artifact_id);
        let current = Version::parse(&self.current_version)?;

        let mut repos = self.repos;
        for (name, raw_url) in self.raw_repos {
            repos.push(MavenRepo::parse(&name, &raw_url)?);
        }
        let mut deduped: Vec<MavenRepo> = Vec::with_capacity(repos.len());
        for repo in repos {
            if !deduped.iter().any(|r| r.url() == repo.url()) {
                deduped.push(repo);
            }
        }

        let repo_client = match self.repo_client {
            Some(repo_client) => repo_client,
            None => Arc::new(HttpRepoClientBuilder::new(self.http_config).build()),
        };

        Ok(UpdateChecker {
            coords,
            current,
            classifier: self.classifier,
            repos: deduped,
            repo_client,
            cache: DashMap::new(),
        })
    }
}
