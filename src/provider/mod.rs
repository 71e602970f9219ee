//! Text-generation providers.

pub mod gemini;
pub mod openai;

use async_trait::async_trait;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

/// Sampling settings shared by every provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 400,
        }
    }
}

/// A text-generation backend.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Name used in logs and status output.
    fn name(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Whether a credential is present. Unconfigured providers are skipped.
    fn is_configured(&self) -> bool;

    async fn invoke(
        &self,
        system_prompt: &str,
        message: &str,
        options: &GenerationOptions,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug)]
pub enum ProviderError {
    NotConfigured,
    Http(String),
    Api { status: u16, body: String },
    Parse(String),
    Empty,
    Timeout,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NotConfigured => write!(f, "No API key configured"),
            ProviderError::Http(e) => write!(f, "HTTP error: {e}"),
            ProviderError::Api { status, body } => write!(f, "API error {status}: {body}"),
            ProviderError::Parse(e) => write!(f, "Parse error: {e}"),
            ProviderError::Empty => write!(f, "Empty response"),
            ProviderError::Timeout => write!(f, "Timed out"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Read a response body, turning non-2xx statuses into `ProviderError::Api`.
async fn read_body(response: reqwest::Response) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::Http(format!("failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Reject blank completions so callers always get usable text.
fn non_empty(text: String) -> Result<String, ProviderError> {
    if text.trim().is_empty() {
        Err(ProviderError::Empty)
    } else {
        Ok(text)
    }
}
