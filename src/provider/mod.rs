//! Model provider trait and the OpenAI implementation.

pub mod format;
pub mod http;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::ChatConfig;
use crate::error::ChatError;
use crate::types::{AgentToolCall, FinishReason, GenerationSettings, ModelMessage, Usage};

pub use openai::OpenAiProvider;

/// A request sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
    pub settings: GenerationSettings,
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool definition sent to the provider API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub tool_calls: Vec<AgentToolCall>,
    pub finish_reason: Option<FinishReason>,
}

/// Core trait implemented by model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Generate one model turn (non-streaming).
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, ChatError>;
}

/// Create the provider described by `config`.
pub fn create_provider(config: &ChatConfig) -> Result<Arc<dyn ModelProvider>, ChatError> {
    let provider = OpenAiProvider::new(
        config.model.clone(),
        config.api_key().to_string(),
        Some(config.base_url.clone()),
    )?;
    Ok(Arc::new(provider))
}
