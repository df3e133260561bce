//! In-memory transport for exercising GitHub calls without a network

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{Error, GraphQlTransport, Result};

/// A request seen by the scripted transport
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub document: String,
    pub variables: Value,
}

impl RecordedCall {
    pub fn is_transfer(&self) -> bool {
        self.document.contains("transferIssue")
    }

    pub fn is_issue_listing(&self) -> bool {
        self.document.contains("issues(")
    }
}

/// Replays canned responses in order and records every call
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl GraphQlTransport for ScriptedTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            document: document.to_string(),
            variables,
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("scripted transport ran out of responses".into())))
    }
}

/// `data` for one page of the issue listing query
pub fn issue_page(repo_id: &str, ids: &[String], end_cursor: Option<&str>, has_next: bool) -> Value {
    let nodes: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({
        "repository": {
            "id": repo_id,
            "issues": {
                "nodes": nodes,
                "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next }
            }
        }
    })
}

/// Split `count` synthetic issue IDs into pages of `page_size`
pub fn paged_issues(repo_id: &str, count: usize, page_size: usize) -> Vec<Result<Value>> {
    let ids: Vec<String> = (1..=count).map(|n| format!("I_{}", n)).collect();
    let chunks: Vec<&[String]> = ids.chunks(page_size).collect();
    let total = chunks.len().max(1);

    (0..total)
        .map(|page| {
            let chunk = chunks.get(page).copied().unwrap_or(&[]);
            let cursor = format!("cursor-{}", page + 1);
            Ok(issue_page(repo_id, chunk, Some(&cursor), page + 1 < total))
        })
        .collect()
}

/// `data` for the repository lookup query
pub fn repository(repo_id: &str, name: &str) -> Value {
    json!({ "repository": { "id": repo_id, "name": name } })
}

/// `data` for a successful transfer mutation
pub fn transferred(url: &str, number: u64) -> Value {
    json!({ "transferIssue": { "issue": { "url": url, "number": number } } })
}
