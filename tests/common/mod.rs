//! Shared test helpers: a scripted model provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use toolchat::error::ChatError;
use toolchat::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use toolchat::types::*;

/// A provider that replays queued turns and records every request.
pub struct ScriptedProvider {
    turns: Mutex<VecDeque<Result<ProviderResponse, ChatError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            turns: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a final text answer.
    pub fn queue_response(&self, text: &str) {
        self.push(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            tool_calls: vec![],
            finish_reason: Some(FinishReason::Stop),
        }));
    }

    /// Queue a text answer cut off by the output token limit.
    pub fn queue_truncated(&self, text: &str) {
        self.push(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage::default(),
            tool_calls: vec![],
            finish_reason: Some(FinishReason::Length),
        }));
    }

    /// Queue a turn that requests one tool call.
    pub fn queue_tool_call(&self, id: &str, name: &str, args: serde_json::Value) {
        self.push(Ok(ProviderResponse {
            text: String::new(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 5,
                total_tokens: 15,
            },
            tool_calls: vec![AgentToolCall {
                id: id.to_string(),
                name: name.to_string(),
                arguments: args,
            }],
            finish_reason: Some(FinishReason::ToolCalls),
        }));
    }

    /// Queue a failing turn.
    pub fn queue_error(&self, error: ChatError) {
        self.push(Err(error));
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, turn: Result<ProviderResponse, ChatError>) {
        self.turns.lock().unwrap().push_back(turn);
    }
}

#[async_trait]
impl ModelProvider for ScriptedProvider {
    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ChatError> {
        self.requests.lock().unwrap().push(request.clone());
        self.turns
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::api(500, "no scripted turn left")))
    }
}
