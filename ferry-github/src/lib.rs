//! Ferry GitHub - GitHub GraphQL access for issue-ferry
//!
//! This crate lists a repository's issues, resolves repository IDs and
//! transfers issues between repositories, plus the sequencing that ties
//! those calls together into a migration.

mod client;
mod error;
mod graphql;
mod issues;
mod migrate;
mod repository;
mod transfer;
mod types;

#[cfg(test)]
mod test_support;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use graphql::{query, GraphQlTransport};
pub use issues::{list_issue_ids, IssueStateFilter, ListOptions, SourceIssues};
pub use migrate::{migrate_issues, MigrationOptions, MigrationReport};
pub use repository::resolve_repository_id;
pub use transfer::transfer_issue;
pub use types::{IssueId, RepositoryId, TransferredIssue};
