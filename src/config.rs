//! Advisory service configuration.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration for the advisory round-trip.

use crate::game::entities::Chips;

/// Chat-completions endpoint prefix used when `ADVISOR_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.302.ai/v1";

/// Raise size assumed when an advisory reply suggests raising without any
/// usable number. Overridable via `ADVISOR_DEFAULT_RAISE`.
pub const DEFAULT_RAISE_AMOUNT: Chips = 50;

/// One advisory round-trip per turn, bounded by this many seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Reasoning-service families selectable by shorthand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModelKind {
    Claude,
    Gemini,
    Gpt,
    Grok,
    Deepseek,
    Qwen,
    Glm,
    Kimi,
}

impl ModelKind {
    /// Resolves a shorthand such as `"claude"` or `"gpt"`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "claude" => Some(Self::Claude),
            "gemini" => Some(Self::Gemini),
            "gpt" => Some(Self::Gpt),
            "grok" => Some(Self::Grok),
            "deepseek" => Some(Self::Deepseek),
            "qwen" => Some(Self::Qwen),
            "glm" => Some(Self::Glm),
            "kimi" => Some(Self::Kimi),
            _ => None,
        }
    }

    /// The concrete model name sent on the wire.
    pub fn model_name(&self) -> &'static str {
        match self {
            Self::Claude => "claude-sonnet-4-5-20250929",
            Self::Gemini => "gemini-2.5-pro",
            Self::Gpt => "gpt-4o",
            Self::Grok => "grok-4-0709",
            Self::Deepseek => "deepseek-v3.1",
            Self::Qwen => "Qwen/Qwen3-235B-A22B-Thinking-2507",
            Self::Glm => "glm-4-0520",
            Self::Kimi => "kimi-k2-0905-preview",
        }
    }
}

/// Complete advisory configuration, usually loaded from the environment.
#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    /// Chat-completions endpoint prefix (without the `/chat/completions` path).
    pub base_url: String,
    /// Bearer token for the advisory service.
    pub api_key: String,
    /// Concrete model name sent with each request.
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Whole-request timeout for the single advisory round-trip.
    pub timeout_secs: u64,
    /// Raise size used when advice says "raise" with no usable number.
    pub default_raise: Chips,
}

impl AdvisorConfig {
    /// Loads configuration from environment variables.
    ///
    /// `ADVISOR_MODEL` accepts either a shorthand (`claude`, `gpt`, ...) or a
    /// verbatim model name. `ADVISOR_API_KEY` is required.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or values fail
    /// validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("ADVISOR_API_KEY").map_err(|_| ConfigError::MissingRequired {
            var: "ADVISOR_API_KEY".to_string(),
            hint: "Set it to your advisory service bearer token".to_string(),
        })?;

        let raw_model =
            std::env::var("ADVISOR_MODEL").unwrap_or_else(|_| "claude".to_string());
        let model = match ModelKind::from_key(&raw_model) {
            Some(kind) => kind.model_name().to_string(),
            None => raw_model,
        };

        let config = Self {
            base_url: std::env::var("ADVISOR_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key,
            model,
            max_tokens: parse_env_or("ADVISOR_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            temperature: parse_env_or("ADVISOR_TEMPERATURE", DEFAULT_TEMPERATURE),
            timeout_secs: parse_env_or("ADVISOR_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            default_raise: parse_env_or("ADVISOR_DEFAULT_RAISE", DEFAULT_RAISE_AMOUNT),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration after loading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid {
                var: "ADVISOR_BASE_URL".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "ADVISOR_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid {
                var: "ADVISOR_MAX_TOKENS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid {
                var: "ADVISOR_TEMPERATURE".to_string(),
                reason: "Must be within 0.0..=2.0".to_string(),
            });
        }
        if self.default_raise == 0 {
            return Err(ConfigError::Invalid {
                var: "ADVISOR_DEFAULT_RAISE".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
