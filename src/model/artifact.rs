// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use std::fmt::Display;

use semver::Version;
use url::Url;

use crate::{
    errors::Result,
    model::{coordinates::Coordinates, repo::MavenRepo},
    Error,
};

/// A versioned artifact discovered on one repository.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct DiscoveredArtifact {
    pub repo: MavenRepo,
    pub version: Version,
}

impl DiscoveredArtifact {
    pub fn new(repo: MavenRepo, version: Version) -> Self {
        Self { repo, version }
    }

    /// Location of the downloadable bundle for this artifact.
    ///
    /// Follows the standard repository layout:
    /// `{repo}/{group path}/{artifact}/{version}/{artifact}-{version}[-{classifier}].jar`.
    /// An empty classifier is treated as absent.
    pub fn bundle_url(&self, coords: &Coordinates, classifier: Option<&str>) -> Result<Url> {
        let mut file_name = format!("{}-{}", coords.artifact_id, self.version);
        if let Some(classifier) = classifier.filter(|c| !c.is_empty()) {
            file_name.push('-');
            file_name.push_str(classifier);
        }
        file_name.push_str(".jar");

        self.repo
            .url()
            .join(&format!(
                "{}/{}/{}",
                coords.relative_path(),
                self.version,
                file_name
            ))
            .map_err(|e| {
                Error::Client(format!(
                    "Failed to build bundle url, artifact:{}, err:{}",
                    self, e
                ))
            })
    }
}

impl Display for DiscoveredArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}@{}", self.version, self.repo))
    }
}
