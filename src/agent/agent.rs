//! Agent that alternates model turns and tool execution.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ChatConfig, DEFAULT_MAX_ITERATIONS};
use crate::error::ChatError;
use crate::provider::{self, ModelProvider, ProviderRequest, ToolDefinition};
use crate::tools::tool::{Tool, ToolExecutionContext};
use crate::tools::validation::validate_arguments;
use crate::tools::ToolArguments;
use crate::types::*;

use super::{ConversationalAgent, StepStream};

/// An AI agent that answers with the help of tools.
///
/// Each call to [`ConversationalAgent::stream`] is independent: the agent
/// keeps no history between calls.
pub struct Agent {
    provider: Arc<dyn ModelProvider>,
    tools: Vec<Arc<dyn Tool>>,
    settings: GenerationSettings,
    max_iterations: usize,
}

impl Agent {
    /// Create an agent with no tools and default settings.
    pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            provider,
            tools: Vec::new(),
            settings: GenerationSettings::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Create an agent for the configured model with the given tools.
    pub fn from_config(config: &ChatConfig, tools: Vec<Arc<dyn Tool>>) -> Result<Self, ChatError> {
        let provider = provider::create_provider(config)?;
        Ok(Self::new(provider)
            .with_tools(tools)
            .with_settings(config.generation_settings())
            .with_max_iterations(config.max_iterations))
    }

    /// Add a tool.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add several tools.
    pub fn with_tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Set generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Cap the number of model turns per answer.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Names of the registered tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    fn tool_definitions(&self) -> Option<Vec<ToolDefinition>> {
        if self.tools.is_empty() {
            return None;
        }
        Some(self.tools.iter().map(|t| t.definition()).collect())
    }
}

impl ConversationalAgent for Agent {
    fn stream(&self, mut messages: Vec<ModelMessage>) -> StepStream {
        let provider = Arc::clone(&self.provider);
        let tools = self.tools.clone();
        let tool_defs = self.tool_definitions();
        let settings = self.settings.clone();
        let max_iterations = self.max_iterations;

        Box::pin(async_stream::stream! {
            let mut finished = false;
            let mut total_usage = Usage::default();

            for iteration in 0..max_iterations {
                let request = ProviderRequest {
                    messages: messages.clone(),
                    settings: settings.clone(),
                    tools: tool_defs.clone(),
                };

                debug!(iteration, model = provider.model_id(), "agent: calling model");
                let response = match provider.generate_text(&request).await {
                    Ok(response) => response,
                    Err(e) => {
                        yield Err(e);
                        finished = true;
                        break;
                    }
                };

                total_usage.merge(&response.usage);
                let calls = response.tool_calls;
                let assistant = ModelMessage::assistant_with_tool_calls(response.text, calls.clone());
                messages.push(assistant.clone());
                let step = AgentStep::agent(assistant, response.usage)
                    .with_finish_reason(response.finish_reason);
                if step.is_truncated() {
                    warn!(iteration, "agent: model reply truncated at the token limit");
                }
                yield Ok(step);

                if calls.is_empty() {
                    debug!(
                        iterations = iteration + 1,
                        total_tokens = total_usage.total_tokens,
                        "agent: final answer"
                    );
                    finished = true;
                    break;
                }

                let mut results = Vec::with_capacity(calls.len());
                for call in &calls {
                    results.push(execute_tool_call(&tools, call).await);
                }
                messages.extend(results.iter().cloned());
                yield Ok(AgentStep::tools(results));
            }

            if !finished {
                warn!(max_iterations, "agent: no final answer within iteration limit");
                yield Err(ChatError::IterationLimit(max_iterations));
            }
        })
    }
}

/// Run one requested tool call. Every failure becomes an error result for
/// the model to read; none of them aborts the answer.
async fn execute_tool_call(tools: &[Arc<dyn Tool>], call: &AgentToolCall) -> ModelMessage {
    let Some(tool) = tools.iter().find(|t| t.name() == call.name) else {
        warn!(tool = %call.name, "Tool not found");
        return error_result(call, format!("Tool '{}' not found", call.name));
    };

    let args = ToolArguments::new(call.arguments.clone());
    if let Err(reason) = validate_arguments(args.raw(), &tool.parameters().schema) {
        warn!(tool = %call.name, %reason, "Rejected tool arguments");
        return error_result(call, format!("Invalid arguments for '{}': {reason}", call.name));
    }

    match tool.execute(&args, &ToolExecutionContext::for_call(call)).await {
        Ok(value) => ModelMessage::tool_result(call.id.clone(), value, false),
        Err(e) => {
            warn!(tool = %call.name, error = %e, "Tool execution failed");
            error_result(call, e.to_string())
        }
    }
}

fn error_result(call: &AgentToolCall, message: String) -> ModelMessage {
    ModelMessage::tool_result(
        call.id.clone(),
        serde_json::json!({ "error": message }),
        true,
    )
}
