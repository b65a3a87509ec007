// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use quick_xml::{events::Event, Reader};
use semver::Version;
use tracing::warn;

/// The versioning information a repository publishes for one package,
/// parsed from its `maven-metadata.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMetadata {
    /// The version the repository marks as latest, if any.
    pub latest: Option<Version>,
    /// The version the repository marks as the current release, if any.
    pub release: Option<Version>,
    /// All published versions, in document order.
    pub versions: Vec<Version>,
}

enum Field {
    Latest,
    Release,
    Version,
}

impl ArtifactMetadata {
    /// Parse a `maven-metadata.xml` document.
    ///
    /// Version strings that are not valid semantic versions are skipped
    /// with a warning rather than failing the whole document; repositories
    /// routinely carry a handful of legacy tags next to well-formed ones.
    pub fn parse(document: &str) -> std::result::Result<Self, String> {
        let mut reader = Reader::from_str(document);

        let mut metadata = ArtifactMetadata::default();
        let mut in_versioning = false;
        let mut in_versions = false;
        let mut field: Option<Field> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"versioning" => in_versioning = true,
                    b"versions" if in_versioning => in_versions = true,
                    b"latest" if in_versioning => field = Some(Field::Latest),
                    b"release" if in_versioning => field = Some(Field::Release),
                    b"version" if in_versions => field = Some(Field::Version),
                    _ => {}
                },
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"versioning" => {
                        in_versioning = false;
                        in_versions = false;
                    }
                    b"versions" => in_versions = false,
                    b"latest" | b"release" | b"version" => field = None,
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| format!("invalid xml text, err:{}", err))?;
                    let raw = text.trim();
                    if !raw.is_empty() {
                        match field {
                            Some(Field::Latest) => metadata.latest = lenient_version(raw),
                            Some(Field::Release) => metadata.release = lenient_version(raw),
                            Some(Field::Version) => {
                                if let Some(version) = lenient_version(raw) {
                                    metadata.versions.push(version);
                                }
                            }
                            None => {}
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(format!("invalid xml, err:{}", e)),
                _ => {}
            }
        }

        Ok(metadata)
    }
}

fn lenient_version(raw: &str) -> Option<Version> {
    match Version::parse(raw) {
        Ok(version) => Some(version),
        Err(e) => {
            warn!("Skipping unparseable version:{}, err:{}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>com.example</groupId>
  <artifactId>app</artifactId>
  <versioning>
    <latest>1.1.0</latest>
    <release>1.0.0</release>
    <versions>
      <version>0.9.0</version>
      <version>1.0.0</version>
      <version>1.1.0</version>
    </versions>
    <lastUpdated>20230101000000</lastUpdated>
  </versioning>
</metadata>
"#;

    #[test]
    fn test_parse_full_document() {
        let metadata = ArtifactMetadata::parse(METADATA).unwrap();
        assert_eq!(Some(Version::new(1, 1, 0)), metadata.latest);
        assert_eq!(Some(Version::new(1, 0, 0)), metadata.release);
        assert_eq!(
            vec![
                Version::new(0, 9, 0),
                Version::new(1, 0, 0),
                Version::new(1, 1, 0)
            ],
            metadata.versions
        );
    }

    #[test]
    fn test_parse_empty_versions() {
        let document = r#"<metadata>
  <versioning>
    <versions>
    </versions>
  </versioning>
</metadata>"#;
        let metadata = ArtifactMetadata::parse(document).unwrap();
        assert!(metadata.versions.is_empty());
        assert_eq!(None, metadata.latest);
    }

    #[test]
    fn test_unparseable_versions_skipped() {
        let document = r#"<metadata>
  <versioning>
    <versions>
      <version>1.0</version>
      <version>1.0.0</version>
      <version>not-a-version</version>
      <version>2.0.0-beta.1</version>
    </versions>
  </versioning>
</metadata>"#;
        let metadata = ArtifactMetadata::parse(document).unwrap();
        assert_eq!(
            vec![
                Version::new(1, 0, 0),
                Version::parse("2.0.0-beta.1").unwrap()
            ],
            metadata.versions
        );
    }

    #[test]
    fn test_version_outside_versioning_ignored() {
        let document = r#"<metadata>
  <version>9.9.9</version>
  <versioning>
    <versions>
      <version>1.0.0</version>
    </versions>
  </versioning>
</metadata>"#;
        let metadata = ArtifactMetadata::parse(document).unwrap();
        assert_eq!(vec![Version::new(1, 0, 0)], metadata.versions);
    }

    #[test]
    fn test_malformed_document() {
        let parse_res = ArtifactMetadata::parse("<metadata><versioning></metadata>");
        assert!(parse_res.is_err());
    }
}
