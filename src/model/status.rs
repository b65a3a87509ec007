// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

/// The update status of a versioned library or application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The software is up-to-date; no more recent version was discovered on
    /// any repository.
    UpToDate,
    /// The software is outdated; at least one release has been made since
    /// the version currently in use.
    Outdated,
    /// No versioning information could be found.
    Unknown,
}
