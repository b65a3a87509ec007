// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Error from the http transport.
    ///
    /// Note that a response carrying a non-success status code wont be
    /// wrapped in the transport errors.
    #[error("Transport error, err:{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status returned by a repository.
    ///
    /// A 404 here usually means the artifact is unknown to the repository.
    #[error("Repository returned status:{code}, url:{url}")]
    Status { code: u16, url: String },
    /// The metadata document returned by a repository could not be
    /// understood.
    #[error("Bad metadata from repo:{repo}, err:{msg}")]
    Metadata { repo: String, msg: String },
    /// A version string could not be parsed.
    #[error("Invalid version, err:{0}")]
    Version(#[from] semver::Error),
    /// Error from the client and basically the checker was misconfigured
    /// before any request has been sent.
    #[error("Client error, err:{0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, Error>;
