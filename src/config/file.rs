use crate::utils::error::{CadastroError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECONDS: u64 = 5;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_CONFIG_FILE: &str = "cadastro.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
    pub webhook: Option<WebhookConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

impl AppConfig {
    /// Loads `path` when given, otherwise `cadastro.toml` when present,
    /// otherwise built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CadastroError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CadastroError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR_NAME}` placeholders with environment values; unknown
/// variables are left as-is so validation can point at them.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl CompletionConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    /// Key from the config file, falling back to the `OPENAI_API_KEY`
    /// environment variable.
    pub fn api_key(&self) -> Result<String> {
        if let Some(key) = self.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(key.to_string());
            }
        }

        std::env::var(API_KEY_ENV).map_err(|_| CadastroError::ConfigError {
            message: format!(
                "completion API key not configured (set completion.api_key or {})",
                API_KEY_ENV
            ),
        })
    }
}

impl WebhookConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
            .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECONDS)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("completion.endpoint", self.completion.endpoint())?;
        validate_non_empty_string("completion.model", self.completion.model())?;
        validate_positive_number(
            "completion.timeout_seconds",
            self.completion.timeout_seconds(),
            1,
        )?;

        if let Some(webhook) = &self.webhook {
            validate_url("webhook.url", &webhook.url)?;
            validate_positive_number("webhook.timeout_seconds", webhook.timeout_seconds(), 1)?;
        }

        Ok(())
    }
}
