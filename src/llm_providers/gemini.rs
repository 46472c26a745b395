use super::{LLMProvider, LLMProviderConfig, ProviderMetadata};
use crate::common::{ClientError, build_http_client, require};
use crate::log_debug;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const GEMINI_TIMEOUT: Duration = Duration::from_secs(60);

/// Represents the Gemini LLM provider
pub struct GeminiProvider {
    config: LLMProviderConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a provider for the default endpoint. An empty `model` selects
    /// the default model.
    pub fn new(api_key: &str, model: &str) -> Result<Self, ClientError> {
        require("Gemini", "API key", api_key)?;
        let metadata = get_metadata();
        let model = if model.trim().is_empty() {
            metadata.default_model
        } else {
            model
        };

        Ok(Self {
            config: LLMProviderConfig {
                api_key: api_key.to_string(),
                model: model.to_string(),
                base_url: metadata.default_base_url.to_string(),
            },
            client: build_http_client(GEMINI_TIMEOUT)?,
        })
    }

    /// Point the provider at a different host (tests, proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    /// Generates text using the Gemini `generateContent` API
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let request_body = json!({
            "contents": [
                {
                    "parts": [
                        {"text": prompt}
                    ]
                }
            ]
        });

        log_debug!(
            "Sending {} byte prompt to {} model {}",
            prompt.len(),
            get_metadata().name,
            self.config.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(anyhow!(
                "Gemini API request failed with status {}: {}",
                status,
                text
            ));
        }

        let response_body: serde_json::Value = response.json().await?;

        // {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}
        let content = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string);

        if content.is_none() {
            log_debug!("Gemini response carried no text part: {}", response_body);
        }

        Ok(content)
    }
}

pub(super) fn get_metadata() -> ProviderMetadata {
    ProviderMetadata {
        name: "Gemini",
        default_model: "gemini-1.5-flash-latest",
        default_base_url: "https://generativelanguage.googleapis.com",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_is_rejected() {
        assert!(matches!(
            GeminiProvider::new("", ""),
            Err(ClientError::MissingCredential { .. })
        ));
    }

    #[test]
    fn test_default_model_and_endpoint() {
        let provider = GeminiProvider::new("key", "").expect("provider should build");
        assert_eq!(provider.model(), "gemini-1.5-flash-latest");
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
        );

        let provider = GeminiProvider::new("key", "gemini-2.0-flash")
            .expect("provider should build")
            .with_base_url("http://localhost:9999/");
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
