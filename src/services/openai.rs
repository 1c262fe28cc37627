// src/services/openai.rs
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::common::json::to_spaced_string;
use crate::common::{safe_token_log, truncate_for_log, OpenAIConfig, ValidationResult};
use crate::services::backend::ValidationBackend;
use crate::services::prompt::{response_format, SYSTEM_PROMPT};

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Model refused the request: {0}")]
    Refused(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// Client for the structured chat completions endpoint.
///
/// Holds one HTTP client for the life of the process.
#[derive(Debug)]
pub struct OpenAIService {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIService {
    pub fn new(config: OpenAIConfig) -> Result<Self, OpenAIError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = build_client(builder)?;

        debug!(
            base_url = %config.base_url,
            model = %config.model,
            api_key = %safe_token_log(&config.api_key),
            "OpenAIService initialized"
        );

        Ok(Self { config, client })
    }

    fn build_request(&self, profile: &Value) -> Result<ChatCompletionRequest, OpenAIError> {
        let payload = to_spaced_string(profile)
            .map_err(|e| OpenAIError::SerializationError(e.to_string()))?;

        Ok(ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: payload,
                },
            ],
            response_format: response_format(),
        })
    }

    /// Make a single API request. Failures are not retried.
    async fn make_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAIError> {
        let url = self.config.chat_completions_url();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| OpenAIError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(status = %status, "OpenAI rate limit hit");
            return Err(OpenAIError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(
                status = %status,
                error = %truncate_for_log(&error_text, 500),
                "OpenAI API request failed"
            );
            return Err(OpenAIError::HttpStatus {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| OpenAIError::InvalidResponse(e.to_string()))
    }
}

fn build_client(builder: ClientBuilder) -> Result<Client, OpenAIError> {
    builder.build().map_err(|e| {
        error!(error = %e, "Failed to build HTTP client");
        OpenAIError::RequestFailed(format!("HTTP client initialization failed: {}", e))
    })
}

/// Extract the verdict from the first choice of a completion
fn parse_verdict(response: ChatCompletionResponse) -> Result<ValidationResult, OpenAIError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| OpenAIError::InvalidResponse("No choices in response".to_string()))?;

    if let Some(refusal) = choice.message.refusal.filter(|r| !r.is_empty()) {
        return Err(OpenAIError::Refused(refusal));
    }

    if choice.finish_reason.as_deref() == Some("length") {
        return Err(OpenAIError::InvalidResponse(
            "Response truncated before completion".to_string(),
        ));
    }

    let content = choice
        .message
        .content
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| OpenAIError::InvalidResponse("Empty message content".to_string()))?;

    serde_json::from_str::<ValidationResult>(&content).map_err(|e| {
        warn!(content = %truncate_for_log(&content, 500), "Response did not match schema");
        OpenAIError::InvalidResponse(format!("Response does not match schema: {}", e))
    })
}

#[async_trait]
impl ValidationBackend for OpenAIService {
    async fn validate(&self, profile: &Value) -> Result<ValidationResult, OpenAIError> {
        let request = self.build_request(profile)?;

        debug!(
            model = %self.config.model,
            "Sending OpenAI structured validation request"
        );

        let response = self.make_request(&request).await?;
        let response_id = response.id.clone().unwrap_or_default();

        if let Some(usage) = &response.usage {
            info!(
                model = %self.config.model,
                response_id = %response_id,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                tokens_used = usage.total_tokens,
                "OpenAI validation completed"
            );
        }

        parse_verdict(response)
    }
}
