//! ServiceNow issue-tracker client
//!
//! Looks up a single story record by its public number through the table API.
//! Lookups are best effort: every failure is logged and reported as "no record".

use crate::common::{ClientError, build_http_client, require};
use crate::types::WorkItem;
use crate::{log_debug, log_error, ui};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const SERVICENOW_TIMEOUT: Duration = Duration::from_secs(15);
const STORY_TABLE: &str = "sn_safe_story";
const STORY_FIELDS: &str = "number,short_description";

/// Source of work-item records
#[async_trait]
pub trait WorkItemSource: Send + Sync {
    /// Look up a story by number; `None` when absent or on any failure
    async fn get_story_details(&self, number: &str) -> Option<WorkItem>;
}

#[derive(Deserialize)]
struct TableResponse {
    #[serde(default)]
    result: Vec<WorkItem>,
}

/// Client for the ServiceNow table API
pub struct ServiceNowClient {
    base_url: String,
    user: String,
    password: String,
    client: Client,
}

impl ServiceNowClient {
    pub fn new(instance: &str, user: &str, password: &str) -> Result<Self, ClientError> {
        require("ServiceNow", "instance", instance)?;
        require("ServiceNow", "user", user)?;
        require("ServiceNow", "password", password)?;

        Ok(Self {
            base_url: format!("https://{instance}.service-now.com/api/now/table"),
            user: user.to_string(),
            password: password.to_string(),
            client: build_http_client(SERVICENOW_TIMEOUT)?,
        })
    }

    /// Override the table API root, e.g. `http://localhost:8080/api/now/table`
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query the story table for an exact number match.
    ///
    /// Transport and HTTP-status failures are returned as errors; an empty
    /// result set is `Ok(None)`.
    pub async fn fetch_story(&self, number: &str) -> Result<Option<WorkItem>> {
        let url = format!("{}/{STORY_TABLE}", self.base_url);
        let query = format!("number={number}");

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .query(&[("sysparm_query", query.as_str()), ("sysparm_fields", STORY_FIELDS)])
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()?;

        let body: TableResponse = response
            .json()
            .await
            .context("unexpected response body from ServiceNow")?;

        log_debug!("ServiceNow returned {} row(s) for {}", body.result.len(), number);
        Ok(body.result.into_iter().next())
    }
}

#[async_trait]
impl WorkItemSource for ServiceNowClient {
    async fn get_story_details(&self, number: &str) -> Option<WorkItem> {
        ui::print_info(&format!(
            "Fetching details for story: {number} from ServiceNow..."
        ));

        match self.fetch_story(number).await {
            Ok(story) => story,
            Err(e) => {
                log_error!("Error fetching story {}: {:#}", number, e);
                ui::print_error(&format!("Error fetching story {number}: {e:#}"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_rejects_empty_credentials() {
        assert!(ServiceNowClient::new("", "user", "pass").is_err());
        assert!(ServiceNowClient::new("dev123", "", "pass").is_err());
        assert!(ServiceNowClient::new("dev123", "user", "").is_err());
    }

    #[test]
    fn test_base_url_from_instance() {
        let client = ServiceNowClient::new("dev123", "user", "pass").expect("client should build");
        assert_eq!(
            client.base_url(),
            "https://dev123.service-now.com/api/now/table"
        );
    }
}
