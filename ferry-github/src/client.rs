//! GitHub GraphQL client over reqwest

use async_trait::async_trait;
use ferry_core::{GitHubConfig, Secrets};
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::graphql::extract_data;
use crate::{Error, GraphQlTransport, Result};

/// Authenticated GitHub GraphQL client
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
    user_agent: String,
}

impl GitHubClient {
    /// Create a client that sends `token` as a bearer credential on every call
    pub fn new(token: impl Into<String>, config: &GitHubConfig) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(Error::Auth("GitHub token is empty".to_string()));
        }

        let endpoint = Url::parse(&config.api_url)
            .map_err(|e| Error::Other(format!("Invalid GraphQL endpoint {}: {}", config.api_url, e)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        debug!(endpoint = %endpoint, "Created GitHub client");

        Ok(Self {
            http,
            endpoint,
            token,
            user_agent: config.user_agent.clone(),
        })
    }

    /// Create a client from an explicit token or, failing that, the secrets file
    ///
    /// Fails with [`Error::Auth`] before any request is made when neither
    /// source provides a token.
    pub fn from_secrets(
        explicit: Option<&str>,
        secrets: &Secrets,
        config: &GitHubConfig,
    ) -> Result<Self> {
        let token = secrets.github_token(explicit).ok_or_else(|| {
            Error::Auth(
                "GitHub token not found. Pass --token, set GITHUB_TOKEN \
                 or add token to ~/.config/ferry/secrets.toml"
                    .to_string(),
            )
        })?;

        Self::new(token, config)
    }

    /// GraphQL endpoint this client talks to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the POST for one GraphQL document, credential included
    fn build_request(&self, document: &str, variables: Value) -> Result<reqwest::Request> {
        let request = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .header(USER_AGENT, &self.user_agent)
            .json(&json!({
                "query": document,
                "variables": variables,
            }))
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl GraphQlTransport for GitHubClient {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let request = self.build_request(document, variables)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

/// Turn an HTTP status and body into the response's `data` or an error
fn decode_response(status: StatusCode, body: &str) -> Result<Value> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(Error::Auth(format!("GitHub rejected the token: {}", body.trim())));
    }

    if !status.is_success() {
        return Err(Error::Api(format!(
            "GraphQL request failed with status {}: {}",
            status,
            body.trim()
        )));
    }

    extract_data(body)
}
