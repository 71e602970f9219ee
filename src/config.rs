use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    MissingVar(&'static str),
    /// The Telegram token does not look like `{bot_id}:{secret}`.
    InvalidToken,
    /// A numeric variable failed to parse.
    InvalidNumber { var: &'static str, value: String, source: ParseIntError },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVar(var) => write!(f, "{} not set", var),
            Self::InvalidToken => write!(
                f,
                "BOT_TOKEN appears invalid (expected format: 123456789:ABCdefGHI...)"
            ),
            Self::InvalidNumber { var, value, source } => {
                write!(f, "invalid value '{}' for {}: {}", value, var, source)
            }
            Self::Validation(msg) => write!(f, "config validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Process configuration. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    /// `None` when unset or empty; presence alone enables the provider.
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub openai_model: String,
    pub gemini_model: String,
    pub openai_base_url: String,
    pub gemini_base_url: String,
    /// Upper bound on a single provider attempt.
    pub provider_timeout: Duration,
    pub log_dir: PathBuf,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty strings count as unset
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let telegram_bot_token = get("BOT_TOKEN").ok_or(ConfigError::MissingVar("BOT_TOKEN"))?;
        // Telegram tokens are formatted as {bot_id}:{secret} where bot_id is numeric
        let token_parts: Vec<&str> = telegram_bot_token.split(':').collect();
        if token_parts.len() != 2 || token_parts[0].parse::<u64>().is_err() || token_parts[1].is_empty() {
            return Err(ConfigError::InvalidToken);
        }

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.parse::<u64>().map_err(|e| ConfigError::InvalidNumber {
                    var: "PROVIDER_TIMEOUT_SECS",
                    value: value.clone(),
                    source: e,
                })?;
                if secs == 0 {
                    return Err(ConfigError::Validation(
                        "PROVIDER_TIMEOUT_SECS must be greater than zero".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        };

        Ok(Self {
            telegram_bot_token,
            openai_api_key: get("OPENAI_API_KEY"),
            gemini_api_key: get("GEMINI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            provider_timeout,
            log_dir: get("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
        })
    }

    /// True when at least one provider credential is present.
    pub fn has_ai(&self) -> bool {
        self.openai_api_key.is_some() || self.gemini_api_key.is_some()
    }
}
