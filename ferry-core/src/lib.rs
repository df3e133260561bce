//! Ferry Core - shared types for issue-ferry
//!
//! This crate holds the pieces every other crate needs: repository
//! references, configuration loading and credential storage.

pub mod config;
pub mod error;
pub mod repo;
pub mod secrets;

pub use config::{Config, GitHubConfig, DEFAULT_API_URL, MAX_PAGE_SIZE};
pub use error::{Error, Result};
pub use repo::RepoRef;
pub use secrets::{GitHubSecrets, Secrets};
