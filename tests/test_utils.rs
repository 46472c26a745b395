#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use parking_lot::Mutex;
use release_weaver::{Commit, CommitSource, LLMProvider, ReleaseRequest, WorkItem, WorkItemSource};

/// Story source returning a fixed answer and remembering what was asked
pub struct FixedStories {
    pub story: Option<WorkItem>,
    pub lookups: Mutex<Vec<String>>,
}

impl FixedStories {
    pub fn new(story: Option<WorkItem>) -> Self {
        Self {
            story,
            lookups: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WorkItemSource for FixedStories {
    async fn get_story_details(&self, number: &str) -> Option<WorkItem> {
        self.lookups.lock().push(number.to_string());
        self.story.clone()
    }
}

/// Commit source returning a fixed list
pub struct FixedCommits {
    pub commits: Vec<Commit>,
    pub requests: Mutex<Vec<(String, String, String)>>,
}

impl FixedCommits {
    pub fn new(messages: &[&str]) -> Self {
        Self {
            commits: messages
                .iter()
                .enumerate()
                .map(|(i, message)| Commit::new(format!("sha{i}"), *message))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CommitSource for FixedCommits {
    async fn compare_commits(&self, repo: &str, from: &str, to: &str) -> Vec<Commit> {
        self.requests
            .lock()
            .push((repo.to_string(), from.to_string(), to.to_string()));
        self.commits.clone()
    }
}

/// How a substitute provider answers
#[derive(Clone, Copy)]
pub enum Reply {
    Text(&'static str),
    NoText,
    TransportError,
}

/// Provider substitute that records every prompt it receives
pub struct RecordingProvider {
    pub reply: Reply,
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn only_prompt(&self) -> String {
        let prompts = self.prompts.lock();
        assert_eq!(prompts.len(), 1, "expected exactly one generation request");
        prompts.first().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl LLMProvider for RecordingProvider {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().push(prompt.to_string());
        match self.reply {
            Reply::Text(text) => Ok(Some(text.to_string())),
            Reply::NoText => Ok(None),
            Reply::TransportError => Err(anyhow!("error sending request: connection refused")),
        }
    }
}

pub fn sample_request(to_tag: &str) -> ReleaseRequest {
    ReleaseRequest {
        repo: "acme/widgets".to_string(),
        from_tag: "v1.0.0".to_string(),
        to_tag: to_tag.to_string(),
        story_id: "STRY0010001".to_string(),
    }
}

/// URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a local port");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{addr}")
}
