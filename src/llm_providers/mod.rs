//! Generative-text providers
//!
//! The remote service is the one nondeterministic step of a run, so it sits
//! behind [`LLMProvider`]: prompt in, text out. Orchestration and prompt
//! building are tested against substitute implementations.

mod gemini;

pub use gemini::GeminiProvider;

use anyhow::Result;
use async_trait::async_trait;

/// A prompt-in, text-out generative service
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Send `prompt` as the sole content of one request.
    ///
    /// `Ok(None)` means the service answered but returned no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;
}

/// Connection settings for a provider
#[derive(Debug, Clone)]
pub struct LLMProviderConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Static facts about a provider
#[derive(Debug, Clone, Copy)]
pub struct ProviderMetadata {
    pub name: &'static str,
    pub default_model: &'static str,
    pub default_base_url: &'static str,
}
