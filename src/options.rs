// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

//! Options in client

use std::time::Duration;

/// Config for the underlying http client
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Timeout for fetching one metadata document.
    ///
    /// Default value is 10s.
    pub metadata_timeout: Duration,
    /// Timeout for connection.
    ///
    /// Default value is 3s.
    pub connect_timeout: Duration,
    /// The `User-Agent` header sent with every request.
    ///
    /// Defaults to `update-checker/<crate version>`.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            metadata_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(3),
            user_agent: concat!("update-checker/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
