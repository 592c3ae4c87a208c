// ABOUTME: OpenAI-compatible chat/completions client used to generate workouts
// ABOUTME: Works with OpenAI itself and with any server exposing the same API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Sends `POST {base_url}/chat/completions` with the system and user messages,
//! temperature and `max_tokens`, and returns the first choice's message content.
//!
//! ## Supported Backends
//!
//! - **`OpenAI`**: <https://api.openai.com/v1>
//! - **Ollama**: <http://localhost:11434/v1>
//! - **vLLM**: <http://localhost:8000/v1>

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::LlmConfig;
use crate::constants::{generation, timeouts};
use crate::errors::AppError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

/// OpenAI-compatible API request structure
#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Message structure for OpenAI-compatible API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenAiMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenAI-compatible API response structure
#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Configuration for the `OpenAI`-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API, without the `/chat/completions` suffix
    pub base_url: String,
    /// API key (optional for local servers)
    pub api_key: Option<String>,
    /// Default model to use
    pub default_model: String,
}

impl Default for OpenAiCompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: generation::DEFAULT_LLM_BASE_URL.to_owned(),
            api_key: None,
            default_model: generation::DEFAULT_LLM_MODEL.to_owned(),
        }
    }
}

impl From<&LlmConfig> for OpenAiCompatibleConfig {
    fn from(config: &LlmConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            default_model: config.model.clone(),
        }
    }
}

/// Generic `OpenAI`-compatible LLM provider
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts::LLM_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(timeouts::LLM_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Map a non-success HTTP status to an external service error
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let provider = generation::PROVIDER_NAME;
        if let Ok(error_response) = serde_json::from_str::<OpenAiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());
            match status.as_u16() {
                502..=504 => AppError::external_unavailable(
                    provider,
                    format!("Service unavailable: {}", error_response.error.message),
                ),
                _ => AppError::external_service(
                    provider,
                    format!("{status} {error_type} - {}", error_response.error.message),
                ),
            }
        } else {
            AppError::external_service(
                provider,
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }

    fn parse_success_response(&self, body: &str) -> Result<ChatResponse, AppError> {
        let provider = generation::PROVIDER_NAME;
        let openai_response: OpenAiResponse = serde_json::from_str(body).map_err(|e| {
            error!(
                "Failed to parse completion response: {e} - body: {}",
                body.chars().take(500).collect::<String>()
            );
            AppError::external_service(provider, format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(provider, "API returned no choices"))?;

        let content = choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AppError::external_service(provider, "API returned empty content"))?;

        Ok(ChatResponse {
            content,
            model: openai_response
                .model
                .unwrap_or_else(|| self.config.default_model.clone()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        generation::PROVIDER_NAME
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let provider = generation::PROVIDER_NAME;
        let openai_request = OpenAiRequest {
            model: self.config.default_model.clone(),
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };
        debug!(
            messages = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send completion request: {e}");
                if e.is_connect() || e.is_timeout() {
                    AppError::external_unavailable(
                        provider,
                        format!("Cannot reach {}: {e}", self.config.base_url),
                    )
                } else {
                    AppError::external_service(provider, format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read completion response: {e}");
            AppError::external_service(provider, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        self.parse_success_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workout_core::errors::ErrorCode;

    fn provider() -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::default()).unwrap()
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig {
            base_url: "http://localhost:11434/v1/".to_owned(),
            ..OpenAiCompatibleConfig::default()
        })
        .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_parse_success_takes_first_choice() {
        let body = r#"{
            "model": "gpt-3.5-turbo-0125",
            "choices": [
                {"message": {"role": "assistant", "content": "Warmup: ..."}, "finish_reason": "stop"},
                {"message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        }"#;
        let response = provider().parse_success_response(body).unwrap();
        assert_eq!(response.content, "Warmup: ...");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(30));
    }

    #[test]
    fn test_parse_success_rejects_empty_content() {
        let body = r#"{"choices": [{"message": {"content": "  "}, "finish_reason": "stop"}]}"#;
        let error = provider().parse_success_response(body).unwrap_err();
        assert_eq!(error.code, ErrorCode::ExternalServiceError);

        let no_choices = r#"{"choices": []}"#;
        assert!(provider().parse_success_response(no_choices).is_err());
    }

    #[test]
    fn test_parse_error_response_maps_gateway_errors() {
        let body = r#"{"error": {"message": "upstream down", "type": "server_error"}}"#;
        let error = OpenAiCompatibleProvider::parse_error_response(StatusCode::BAD_GATEWAY, body);
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);

        let error = OpenAiCompatibleProvider::parse_error_response(
            StatusCode::UNAUTHORIZED,
            "not json",
        );
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(error.http_status(), 500);
    }
}
