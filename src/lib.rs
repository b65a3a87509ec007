// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

pub mod checker;
pub mod errors;
pub mod model;
pub mod options;
pub mod repo_client;

pub use crate::{
    checker::{Builder, UpdateChecker},
    errors::{Error, Result},
    model::{Coordinates, DiscoveredArtifact, MavenRepo, UpdateStatus, MAVEN_CENTRAL},
    options::HttpConfig,
    repo_client::FetchContext,
};
