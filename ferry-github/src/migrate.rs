//! Moving every issue from one repository to another

use chrono::{DateTime, Utc};
use ferry_core::RepoRef;
use tracing::{info, warn};

use crate::{
    list_issue_ids, resolve_repository_id, transfer_issue, Error, GraphQlTransport, ListOptions,
    RepositoryId, Result, TransferredIssue,
};

/// Options for a migration run
#[derive(Debug, Clone, Default)]
pub struct MigrationOptions {
    /// How to list the source repository's issues
    pub list: ListOptions,
    /// Let GitHub create labels that exist only in the source repository
    pub create_labels_if_missing: bool,
    /// Resolve and list, but transfer nothing
    pub dry_run: bool,
}

/// Outcome of a completed migration
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub source_repository_id: RepositoryId,
    pub destination_repository_id: RepositoryId,
    /// Issues found in the source repository
    pub discovered: usize,
    /// Transfers in the order they happened
    pub transferred: Vec<TransferredIssue>,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Transfer every issue of `source` into `destination`, one at a time
///
/// The destination is resolved first, then the full source listing is
/// collected before the first transfer, since each transfer removes an issue
/// from the connection being paged. Transfers run in listing order and the
/// first failure stops the run with [`Error::TransferAborted`]; issues moved
/// before it stay moved.
pub async fn migrate_issues<G>(
    transport: &G,
    source: &RepoRef,
    destination: &RepoRef,
    options: &MigrationOptions,
) -> Result<MigrationReport>
where
    G: GraphQlTransport + ?Sized,
{
    if source.same_repository(destination) {
        return Err(Error::Other(format!(
            "Source and destination are the same repository: {}",
            source
        )));
    }

    let started_at = Utc::now();
    info!(source = %source, destination = %destination, dry_run = options.dry_run, "Starting migration");

    let destination_repository_id = resolve_repository_id(transport, destination).await?;
    let issues = list_issue_ids(transport, source, &options.list).await?;
    let discovered = issues.issue_ids.len();

    let mut transferred = Vec::with_capacity(discovered);

    if options.dry_run {
        info!(count = discovered, "Dry run, skipping transfers");
    } else {
        for issue_id in &issues.issue_ids {
            match transfer_issue(
                transport,
                issue_id,
                &destination_repository_id,
                options.create_labels_if_missing,
            )
            .await
            {
                Ok(issue) => transferred.push(issue),
                Err(e) => {
                    warn!(issue_id = %issue_id, transferred = transferred.len(), error = %e, "Transfer failed, aborting");
                    return Err(Error::TransferAborted {
                        issue_id: issue_id.clone(),
                        transferred: transferred.len(),
                        source: Box::new(e),
                    });
                }
            }
        }
    }

    info!(discovered, transferred = transferred.len(), "Migration finished");

    Ok(MigrationReport {
        source_repository_id: issues.repository_id,
        destination_repository_id,
        discovered,
        transferred,
        dry_run: options.dry_run,
        started_at,
        finished_at: Utc::now(),
    })
}
