// Copyright 2023 Update Checker Project Authors. Licensed under MIT.

use std::{fmt::Display, str::FromStr};

/// Maven coordinates of a software package, without the version part.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinates {
    pub fn new(group_id: String, artifact_id: String) -> Self {
        Self {
            group_id,
            artifact_id,
        }
    }

    /// The path of this package relative to a repository root.
    ///
    /// Dots in the group id become path separators, so `com.example:app`
    /// maps to `com/example/app`.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.group_id.replace('.', "/"), self.artifact_id)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}:{}", self.group_id, self.artifact_id))
    }
}

impl FromStr for Coordinates {
    type Err = Box<dyn std::error::Error + Send + Sync>;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (group_id, artifact_id) = match s.split_once(':') {
            Some(v) => v,
            None => {
                let err_msg = "Can't find ':' in the source string".to_string();
                return Err(Self::Err::from(err_msg));
            }
        };

        if group_id.is_empty() {
            let err_msg = "Empty group id in the source string".to_string();
            return Err(Self::Err::from(err_msg));
        }

        if artifact_id.is_empty() {
            let err_msg = "Empty artifact id in the source string".to_string();
            return Err(Self::Err::from(err_msg));
        }

        if artifact_id.contains(':') {
            let err_msg = "More than one ':' in the source string".to_string();
            return Err(Self::Err::from(err_msg));
        }

        Ok(Coordinates {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
        })
    }
}
