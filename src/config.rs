//! Runtime configuration read from the environment
//!
//! All four secrets are validated once at startup. Nothing else in the crate
//! reads the environment.

use std::fmt;

pub const SN_USER_ENV: &str = "SN_USER";
pub const SN_PASSWORD_ENV: &str = "SN_PASSWORD";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";

/// Variables that must be present and non-empty
pub const REQUIRED_VARIABLES: [&str; 4] = [
    SN_USER_ENV,
    SN_PASSWORD_ENV,
    GITHUB_TOKEN_ENV,
    GEMINI_API_KEY_ENV,
];

/// Configuration validation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Ensure all required environment variables are set (missing: {})", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Credentials and endpoint overrides for one run
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub servicenow_user: String,
    pub servicenow_password: String,
    pub github_token: String,
    pub gemini_api_key: String,
    /// Overrides the default Gemini model when set
    pub gemini_model: Option<String>,
    /// GitHub Enterprise API root when set
    pub github_api_url: Option<String>,
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through `lookup`, reporting every missing
    /// required variable at once. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARIABLES
            .iter()
            .copied()
            .filter(|name| read(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        let required = |name: &str| read(name).unwrap_or_default();
        Ok(Self {
            servicenow_user: required(SN_USER_ENV),
            servicenow_password: required(SN_PASSWORD_ENV),
            github_token: required(GITHUB_TOKEN_ENV),
            gemini_api_key: required(GEMINI_API_KEY_ENV),
            gemini_model: read(GEMINI_MODEL_ENV),
            github_api_url: read(GITHUB_API_URL_ENV),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("servicenow_user", &self.servicenow_user)
            .field("servicenow_password", &"<redacted>")
            .field("github_token", &"<redacted>")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("github_api_url", &self.github_api_url)
            .finish()
    }
}
