//! Error types for GitHub operations

use thiserror::Error;

use crate::IssueId;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or rejected credential
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// The API rejected a request or answered with something unusable
    #[error("GitHub API error: {0}")]
    Api(String),

    /// The request never got a response
    #[error("GraphQL request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response data did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Pagination ran past the configured bound
    #[error("Listing issues did not finish within {0} pages")]
    PageLimitExceeded(u32),

    /// A transfer failed part way through a migration
    #[error("Transfer of issue {issue_id} failed after {transferred} issue(s) were transferred")]
    TransferAborted {
        issue_id: IssueId,
        transferred: usize,
        #[source]
        source: Box<Error>,
    },

    /// Error from the core crate (bad reference, config)
    #[error(transparent)]
    Core(#[from] ferry_core::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}
