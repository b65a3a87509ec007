// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use std::fmt::Display;

use url::Url;

use crate::{errors::Result, model::coordinates::Coordinates, Error};

/// Location of Maven Central, the default public repository.
pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2/";

const METADATA_XML: &str = "maven-metadata.xml";

/// A named Maven repository.
///
/// The url always ends with a trailing `/` so that joining relative
/// artifact paths onto it is stable.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct MavenRepo {
    name: String,
    url: Url,
}

impl MavenRepo {
    pub fn new(name: String, mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            url.set_path(&format!("{}/", url.path()));
        }
        Self { name, url }
    }

    /// Creates a repository from a raw url string.
    pub fn parse(name: &str, raw_url: &str) -> Result<Self> {
        let url = Url::parse(raw_url).map_err(|e| {
            Error::Client(format!("Failed to parse repo url:{}, err:{}", raw_url, e))
        })?;
        Ok(Self::new(name.to_string(), url))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Location of the `maven-metadata.xml` listing the published versions
    /// of the package with the given coordinates.
    pub fn metadata_url(&self, coords: &Coordinates) -> Result<Url> {
        self.url
            .join(&format!("{}/{}", coords.relative_path(), METADATA_XML))
            .map_err(|e| {
                Error::Client(format!(
                    "Failed to build metadata url, repo:{}, coords:{}, err:{}",
                    self, coords, e
                ))
            })
    }
}

impl Display for MavenRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}@{}", self.name, self.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_normalized() {
        let with = MavenRepo::parse("a", "https://repo.example.com/maven/").unwrap();
        let without = MavenRepo::parse("b", "https://repo.example.com/maven").unwrap();
        assert_eq!(with.url(), without.url());
    }

    #[test]
    fn test_metadata_url() {
        let repo = MavenRepo::parse("test", "https://repo.example.com/maven").unwrap();
        let coords = Coordinates::new("com.example".to_string(), "app".to_string());
        assert_eq!(
            "https://repo.example.com/maven/com/example/app/maven-metadata.xml",
            repo.metadata_url(&coords).unwrap().as_str()
        );
    }

    #[test]
    fn test_parse_bad_url() {
        assert!(MavenRepo::parse("bad", "not a url").is_err());
    }
}
