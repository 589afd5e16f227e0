pub mod client;
pub mod config;
pub mod repo_info;

pub use client::HubClient;
pub use config::{Config, RepoType};
pub use repo_info::{RepoInfo, Sibling};
