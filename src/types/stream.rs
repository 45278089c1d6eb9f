//! Streaming types.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::generation::FinishReason;
use super::message::ModelMessage;
use super::usage::Usage;

/// Which part of the agent loop produced a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepNode {
    /// A model turn.
    Agent,
    /// Execution of the tool calls requested by the previous model turn.
    Tools,
}

/// One update emitted while the agent works on a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentStep {
    pub node: StepNode,
    /// Messages produced by this node, in order.
    pub messages: Vec<ModelMessage>,
    /// Usage reported for this step (model turns only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Why the model stopped, when the provider reported it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl AgentStep {
    pub fn agent(message: ModelMessage, usage: Usage) -> Self {
        Self {
            node: StepNode::Agent,
            messages: vec![message],
            usage: Some(usage),
            finish_reason: None,
        }
    }

    pub fn with_finish_reason(mut self, reason: Option<FinishReason>) -> Self {
        self.finish_reason = reason;
        self
    }

    /// Whether the model's reply was cut off by the output token limit.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == Some(FinishReason::Length)
    }

    pub fn tools(messages: Vec<ModelMessage>) -> Self {
        Self {
            node: StepNode::Tools,
            messages,
            usage: None,
            finish_reason: None,
        }
    }

    /// Text meant for the user: the content of assistant messages from a
    /// model turn. Tool steps contribute nothing.
    pub fn reply_text(&self) -> String {
        if self.node != StepNode::Agent {
            return String::new();
        }
        self.messages
            .iter()
            .map(ModelMessage::text_content)
            .collect()
    }
}
