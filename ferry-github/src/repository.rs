//! Repository ID lookup

use ferry_core::RepoRef;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::graphql::query;
use crate::{Error, GraphQlTransport, RepositoryId, Result};

const RESOLVE_REPOSITORY: &str = r#"
    query ResolveRepository($owner: String!, $name: String!) {
        repository(owner: $owner, name: $name) {
            id
            name
        }
    }
"#;

#[derive(Debug, Deserialize)]
struct ResolveData {
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    id: RepositoryId,
    name: String,
}

/// Look up the GraphQL node ID of `repo`
///
/// A missing or inaccessible repository is reported as a plain API error.
pub async fn resolve_repository_id<G>(transport: &G, repo: &RepoRef) -> Result<RepositoryId>
where
    G: GraphQlTransport + ?Sized,
{
    let variables = json!({
        "owner": repo.owner(),
        "name": repo.name(),
    });

    let data: ResolveData = query(transport, RESOLVE_REPOSITORY, variables).await?;
    let repository = data
        .repository
        .ok_or_else(|| Error::Api(format!("Repository {} not found or not accessible", repo)))?;

    info!(repo = %repo, name = %repository.name, id = %repository.id, "Resolved repository");

    Ok(repository.id)
}
