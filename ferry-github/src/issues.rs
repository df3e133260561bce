//! Issue enumeration via cursor pagination

use ferry_core::{GitHubConfig, RepoRef, MAX_PAGE_SIZE};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::graphql::{query, PageInfo};
use crate::{Error, GraphQlTransport, IssueId, RepositoryId, Result};

const LIST_ISSUES: &str = r#"
    query ListIssues($owner: String!, $name: String!, $first: Int!, $after: String, $states: [IssueState!]) {
        repository(owner: $owner, name: $name) {
            id
            issues(first: $first, after: $after, states: $states) {
                nodes {
                    id
                }
                pageInfo {
                    endCursor
                    hasNextPage
                }
            }
        }
    }
"#;

/// Which issues to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IssueStateFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl IssueStateFilter {
    fn as_variable(self) -> serde_json::Value {
        match self {
            IssueStateFilter::Open => json!(["OPEN"]),
            IssueStateFilter::Closed => json!(["CLOSED"]),
            IssueStateFilter::All => serde_json::Value::Null,
        }
    }
}

/// Options for listing issues
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Issues requested per page (1..=100)
    pub page_size: u32,
    /// Fail instead of fetching more than this many pages
    pub max_pages: Option<u32>,
    /// State filter
    pub state: IssueStateFilter,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_pages: GitHubConfig::default().page_limit(),
            state: IssueStateFilter::All,
        }
    }
}

impl From<&GitHubConfig> for ListOptions {
    fn from(config: &GitHubConfig) -> Self {
        Self {
            page_size: config.page_size,
            max_pages: config.page_limit(),
            ..Default::default()
        }
    }
}

/// Every issue ID of a repository, in the order GitHub returned them
#[derive(Debug, Clone)]
pub struct SourceIssues {
    /// ID of the repository that was listed
    pub repository_id: RepositoryId,
    /// Issue IDs across all pages
    pub issue_ids: Vec<IssueId>,
    /// Number of pages fetched
    pub pages: u32,
}

#[derive(Debug, Deserialize)]
struct ListIssuesData {
    repository: Option<RepositoryIssues>,
}

#[derive(Debug, Deserialize)]
struct RepositoryIssues {
    id: RepositoryId,
    issues: IssueConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueConnection {
    nodes: Vec<IssueNode>,
    page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct IssueNode {
    id: IssueId,
}

/// List every issue ID in `repo`, following cursors until the last page
///
/// Stops at the first page reporting `hasNextPage: false`. IDs are kept in
/// server order and are not deduplicated.
pub async fn list_issue_ids<G>(
    transport: &G,
    repo: &RepoRef,
    options: &ListOptions,
) -> Result<SourceIssues>
where
    G: GraphQlTransport + ?Sized,
{
    if options.page_size == 0 || options.page_size > MAX_PAGE_SIZE {
        return Err(Error::Other(format!(
            "page size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, options.page_size
        )));
    }

    debug!(repo = %repo, ?options, "Listing issue IDs");

    let mut issue_ids = Vec::new();
    let mut repository_id = None;
    let mut cursor: Option<String> = None;
    let mut pages = 0u32;

    loop {
        if let Some(limit) = options.max_pages {
            if pages >= limit {
                return Err(Error::PageLimitExceeded(limit));
            }
        }

        let variables = json!({
            "owner": repo.owner(),
            "name": repo.name(),
            "first": options.page_size,
            "after": cursor,
            "states": options.state.as_variable(),
        });

        let data: ListIssuesData = query(transport, LIST_ISSUES, variables).await?;
        let repository = data
            .repository
            .ok_or_else(|| Error::Api(format!("Repository {} not found or not accessible", repo)))?;
        pages += 1;

        let connection = repository.issues;
        debug!(
            page = pages,
            count = connection.nodes.len(),
            has_next_page = connection.page_info.has_next_page,
            "Fetched issue page"
        );

        issue_ids.extend(connection.nodes.into_iter().map(|node| node.id));
        repository_id.get_or_insert(repository.id);

        if !connection.page_info.has_next_page {
            break;
        }

        match connection.page_info.end_cursor {
            Some(next) => cursor = Some(next),
            None => {
                return Err(Error::Api(format!(
                    "Page {} of {} reported more pages but no end cursor",
                    pages, repo
                )))
            }
        }
    }

    let repository_id = repository_id
        .ok_or_else(|| Error::Api(format!("No repository ID returned for {}", repo)))?;

    info!(repo = %repo, count = issue_ids.len(), pages, "Listed issues");

    Ok(SourceIssues {
        repository_id,
        issue_ids,
        pages,
    })
}
