//! GitHub version-control client
//!
//! Resolves a repository and lists the commits between two tags through the
//! compare API. Only the first page the API returns is used.

use crate::common::{ClientError, build_http_client, require};
use crate::types::Commit;
use crate::{log_debug, log_error, ui};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const GITHUB_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of commit history between two tags
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Commits in `from..to`, oldest first; empty on any failure
    async fn compare_commits(&self, repo: &str, from: &str, to: &str) -> Vec<Commit>;
}

#[derive(Deserialize)]
struct CompareResponse {
    #[serde(default)]
    commits: Vec<CompareCommit>,
}

#[derive(Deserialize)]
struct CompareCommit {
    sha: String,
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    #[serde(default)]
    message: String,
}

impl From<CompareCommit> for Commit {
    fn from(entry: CompareCommit) -> Self {
        Commit::new(entry.sha, entry.commit.message)
    }
}

/// Split `owner/name` into its parts
pub fn parse_repo(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner, name))
        }
        _ => Err(anyhow!(
            "Invalid repository '{}': expected the form owner/name",
            repo
        )),
    }
}

/// Client for the GitHub REST API
pub struct GitHubClient {
    api_url: String,
    token: String,
    client: Client,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self, ClientError> {
        require("GitHub", "token", token)?;

        Ok(Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.to_string(),
            client: build_http_client(GITHUB_TIMEOUT)?,
        })
    }

    /// Use a GitHub Enterprise or test endpoint
    #[must_use]
    pub fn with_base_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Compare endpoint for `from...to`.
    ///
    /// Tag names are percent-encoded so `#`, `%` or `?` cannot cut the path
    /// short; a `/` inside a tag stays a literal slash.
    pub fn compare_url(&self, repo: &str, from: &str, to: &str) -> Result<Url> {
        let (owner, name) = parse_repo(repo)?;
        let range = format!("{from}...{to}");

        let mut url = Url::parse(&self.api_url)
            .with_context(|| format!("invalid GitHub API URL '{}'", self.api_url))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("GitHub API URL '{}' cannot take a path", self.api_url))?
            .pop_if_empty()
            .extend(["repos", owner, name, "compare"])
            .extend(range.split('/'));
        Ok(url)
    }

    /// Fetch the comparison between two tags, surfacing every failure.
    pub async fn fetch_comparison(&self, repo: &str, from: &str, to: &str) -> Result<Vec<Commit>> {
        let url = self.compare_url(repo, from, to)?;

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "GitHub compare request failed with status {}: {}",
                status,
                text
            ));
        }

        let body: CompareResponse = response
            .json()
            .await
            .context("unexpected response body from GitHub compare API")?;

        log_debug!(
            "GitHub compare {}...{} on {} returned {} commit(s)",
            from,
            to,
            repo,
            body.commits.len()
        );
        Ok(body.commits.into_iter().map(Commit::from).collect())
    }
}

#[async_trait]
impl CommitSource for GitHubClient {
    async fn compare_commits(&self, repo: &str, from: &str, to: &str) -> Vec<Commit> {
        match self.fetch_comparison(repo, from, to).await {
            Ok(commits) => commits,
            Err(e) => {
                log_error!("Error fetching commits from GitHub: {:#}", e);
                ui::print_error(&format!("Error fetching commits from GitHub: {e:#}"));
                Vec::new()
            }
        }
    }
}
