// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::{
    errors::{Error, Result},
    model::{ArtifactMetadata, Coordinates, MavenRepo},
    options::HttpConfig,
    repo_client::{FetchContext, RepoClient},
};

/// The implementation for [`RepoClient`] is based on http.
///
/// The underlying http client is built lazily on the first fetch, so
/// constructing a checker never fails for transport reasons.
pub struct HttpRepoClient {
    config: HttpConfig,
    inner: OnceCell<reqwest::Client>,
}

impl HttpRepoClient {
    pub fn new(config: HttpConfig) -> Self {
        Self {
            config,
            inner: OnceCell::new(),
        }
    }

    #[inline]
    async fn init(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .user_agent(self.config.user_agent.clone())
            .build()?;
        Ok(client)
    }
}

#[async_trait]
impl RepoClient for HttpRepoClient {
    async fn fetch_metadata(
        &self,
        ctx: &FetchContext,
        repo: &MavenRepo,
        coords: &Coordinates,
    ) -> Result<ArtifactMetadata> {
        let client = self.inner.get_or_try_init(|| self.init()).await?;

        let url = repo.metadata_url(coords)?;
        debug!("Fetching version metadata, url:{}", url);

        let timeout = ctx.timeout.unwrap_or(self.config.metadata_timeout);
        let resp = client.get(url.clone()).timeout(timeout).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        ArtifactMetadata::parse(&body).map_err(|msg| Error::Metadata {
            repo: repo.name().to_string(),
            msg,
        })
    }
}

/// Builder for building an [`HttpRepoClient`].
#[derive(Clone, Default)]
pub struct HttpRepoClientBuilder {
    config: HttpConfig,
}

impl HttpRepoClientBuilder {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> HttpRepoClient {
        HttpRepoClient::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use semver::Version;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    const METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>com.example</groupId>
  <artifactId>app</artifactId>
  <versioning>
    <latest>1.1.0</latest>
    <release>1.1.0</release>
    <versions>
      <version>1.0.0</version>
      <version>1.1.0</version>
    </versions>
  </versioning>
</metadata>
"#;

    fn coords() -> Coordinates {
        Coordinates::new("com.example".to_string(), "app".to_string())
    }

    #[tokio::test]
    async fn test_fetch_metadata() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/com/example/app/maven-metadata.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(METADATA))
            .mount(&server)
            .await;

        let repo = MavenRepo::parse("test", &server.uri()).unwrap();
        let client = HttpRepoClientBuilder::default().build();
        let metadata = client
            .fetch_metadata(&FetchContext::default(), &repo, &coords())
            .await
            .unwrap();

        assert_eq!(Some(Version::new(1, 1, 0)), metadata.latest);
        assert_eq!(
            vec![Version::new(1, 0, 0), Version::new(1, 1, 0)],
            metadata.versions
        );
    }

    #[tokio::test]
    async fn test_fetch_metadata_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let repo = MavenRepo::parse("test", &server.uri()).unwrap();
        let client = HttpRepoClientBuilder::default().build();
        let err = client
            .fetch_metadata(&FetchContext::default(), &repo, &coords())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Status { code: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_metadata_bad_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<metadata><versioning></metadata>"),
            )
            .mount(&server)
            .await;

        let repo = MavenRepo::parse("test", &server.uri()).unwrap();
        let client = HttpRepoClientBuilder::default().build();
        let err = client
            .fetch_metadata(&FetchContext::default(), &repo, &coords())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Metadata { .. }));
    }
}
