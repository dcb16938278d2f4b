//! HTTP client for the advisory service.
//!
//! One chat-completions round-trip per decision point, bounded by the
//! configured timeout. No retries: a missed call degrades to the fallback
//! heuristic instead of stalling the match.

use super::errors::{AdvisorError, Result};
use super::{parser, prompt};
use crate::analysis::GameInfo;
use crate::config::AdvisorConfig;
use crate::game::entities::Decision;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the advisory chat-completions endpoint.
pub struct AdvisorClient {
    http: reqwest::Client,
    config: AdvisorConfig,
}

/// One message of a chat-completions request.
#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyBody,
}

#[derive(Deserialize)]
struct ChatReplyBody {
    #[serde(default)]
    content: String,
}

impl AdvisorClient {
    /// Creates a client with the request timeout baked in.
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Asks the advisory service for a decision on the given turn.
    ///
    /// The reply is parsed totally, so the only errors out of here are the
    /// service being unavailable in one way or another.
    pub async fn consult(&self, info: &GameInfo) -> Result<Decision> {
        let messages = [
            ChatMessage {
                role: "system",
                content: prompt::SYSTEM_PREAMBLE.to_string(),
            },
            ChatMessage {
                role: "user",
                content: prompt::build_prompt(info),
            },
        ];

        let reply = self.chat(&messages).await?;
        if reply.trim().is_empty() {
            return Err(AdvisorError::EmptyReply);
        }
        log::debug!("advisory reply: {reply}");

        Ok(parser::parse_reply(&reply, self.config.default_raise))
    }

    /// Sends one chat-completions request and returns the reply text.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("failed to read error response: {e}"));
            return Err(AdvisorError::Status { status, body });
        }

        let completion: ChatResponse = response.json().await?;
        Ok(completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
