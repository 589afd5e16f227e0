use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_REPO_ID: &str = "agibot-world/AgiBotWorld-Alpha";
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    Model,
    Dataset,
    Space,
}

impl RepoType {
    /// Path segment used by the hub API, e.g. `datasets`.
    pub fn api_segment(self) -> &'static str {
        match self {
            RepoType::Model => "models",
            RepoType::Dataset => "datasets",
            RepoType::Space => "spaces",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepoType::Model => "model",
            RepoType::Dataset => "dataset",
            RepoType::Space => "space",
        }
    }
}

impl Default for RepoType {
    fn default() -> Self {
        RepoType::Dataset
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "model" => Ok(RepoType::Model),
            "dataset" => Ok(RepoType::Dataset),
            "space" => Ok(RepoType::Space),
            other => Err(Error::Config(format!(
                "unknown repo type `{}` (expected model, dataset or space)",
                other
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub repo_id: String,
    pub repo_type: RepoType,
    pub revision: Option<String>,
    pub endpoint: String,
    /// Ask the hub for per-file sizes (`blobs=true`).
    pub files_metadata: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repo_id: DEFAULT_REPO_ID.to_owned(),
            repo_type: RepoType::default(),
            revision: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            files_metadata: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let id = self.repo_id.as_str();
        // `.` and `..` would be dropped from the request path
        let bad_segment = id.split('/').any(|s| s.is_empty() || s == "." || s == "..");
        if bad_segment || id.contains("--") {
            return Err(Error::Config(format!("invalid repo id `{}`", id)));
        }
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint must not be empty".to_owned()));
        }
        if let Some(rev) = &self.revision {
            if rev.is_empty() {
                return Err(Error::Config("revision must not be empty".to_owned()));
            }
            if rev == "." || rev == ".." {
                return Err(Error::Config(format!("invalid revision `{}`", rev)));
            }
        }
        Ok(())
    }
}
