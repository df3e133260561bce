//! Issue transfer mutation

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::graphql::query;
use crate::{Error, GraphQlTransport, IssueId, RepositoryId, Result, TransferredIssue};

const TRANSFER_ISSUE: &str = r#"
    mutation TransferIssue($issueId: ID!, $repositoryId: ID!, $createLabelsIfMissing: Boolean) {
        transferIssue(input: {issueId: $issueId, repositoryId: $repositoryId, createLabelsIfMissing: $createLabelsIfMissing}) {
            issue {
                url
                number
            }
        }
    }
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferData {
    transfer_issue: Option<TransferPayload>,
}

#[derive(Debug, Deserialize)]
struct TransferPayload {
    issue: Option<TransferredNode>,
}

#[derive(Debug, Deserialize)]
struct TransferredNode {
    url: String,
    number: u64,
}

/// Move one issue into the repository identified by `repository_id`
///
/// Every rejection (permissions, already transferred, visibility rules)
/// surfaces as [`Error::Api`]; nothing is retried.
pub async fn transfer_issue<G>(
    transport: &G,
    issue_id: &IssueId,
    repository_id: &RepositoryId,
    create_labels_if_missing: bool,
) -> Result<TransferredIssue>
where
    G: GraphQlTransport + ?Sized,
{
    let variables = json!({
        "issueId": issue_id,
        "repositoryId": repository_id,
        "createLabelsIfMissing": create_labels_if_missing,
    });

    let data: TransferData = query(transport, TRANSFER_ISSUE, variables).await?;
    let issue = data
        .transfer_issue
        .and_then(|payload| payload.issue)
        .ok_or_else(|| Error::Api(format!("Transfer of issue {} returned no issue", issue_id)))?;

    info!(issue_id = %issue_id, url = %issue.url, number = issue.number, "Transferred issue");

    Ok(TransferredIssue {
        issue_id: issue_id.clone(),
        url: issue.url,
        number: issue.number,
    })
}
