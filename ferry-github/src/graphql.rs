//! GraphQL plumbing shared by every GitHub call

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Something that can run a GraphQL document against GitHub
///
/// `GitHubClient` is the real implementation; tests substitute a scripted one.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute a query or mutation and return the response's `data` member
    async fn execute(&self, document: &str, variables: Value) -> Result<Value>;
}

/// Execute a document and deserialize its `data` into `T`
pub async fn query<T, G>(transport: &G, document: &str, variables: Value) -> Result<T>
where
    T: DeserializeOwned,
    G: GraphQlTransport + ?Sized,
{
    let data = transport.execute(document, variables).await?;
    serde_json::from_value(data)
        .map_err(|e| Error::Parse(format!("Unexpected GraphQL response shape: {}", e)))
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} ({})", self.message, kind),
            None => f.write_str(&self.message),
        }
    }
}

/// Cursor state of a connection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// Pull `data` out of a successful (HTTP 2xx) response body
///
/// Any entry in `errors` fails the whole call, even when partial data is present.
pub(crate) fn extract_data(body: &str) -> Result<Value> {
    let response: GraphQLResponse = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("Failed to parse GraphQL response: {}", e)))?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.iter().map(ToString::to_string).collect();
        return Err(Error::Api(format!("GraphQL errors: {}", messages.join("; "))));
    }

    match response.data {
        Some(Value::Null) | None => Err(Error::Api("GraphQL response missing data".to_string())),
        Some(data) => Ok(data),
    }
}
