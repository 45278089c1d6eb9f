//! The `Tool` trait and [`AgentTool`], a tool backed by an async closure.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tracing::debug;

use super::arguments::ToolArguments;
use super::types::AgentToolParameters;
use crate::error::ChatError;
use crate::provider::ToolDefinition;
use crate::types::AgentToolCall;

/// Per-call information handed to a tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolExecutionContext {
    /// Id of the model's tool call; `None` when a tool is run directly.
    pub tool_call_id: Option<String>,
}

impl ToolExecutionContext {
    /// Context for serving `call`.
    pub fn for_call(call: &AgentToolCall) -> Self {
        Self {
            tool_call_id: Some(call.id.clone()),
        }
    }

    fn call_id(&self) -> &str {
        self.tool_call_id.as_deref().unwrap_or("direct")
    }
}

/// A named capability the agent can advertise to the model and run.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model calls the tool by.
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// JSON Schema of the arguments.
    fn parameters(&self) -> &AgentToolParameters;

    /// Run the tool. Returned values are sent back to the model verbatim.
    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, ChatError>;

    /// The function definition advertised to the model.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters().schema.clone(),
        }
    }
}

type Handler = Arc<
    dyn Fn(ToolArguments, ToolExecutionContext) -> BoxFuture<'static, Result<serde_json::Value, ChatError>>
        + Send
        + Sync,
>;

/// Tool whose behavior is an async closure over its arguments.
pub struct AgentTool {
    name: String,
    description: String,
    parameters: AgentToolParameters,
    handler: Handler,
}

impl AgentTool {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: AgentToolParameters,
        handler: F,
    ) -> Self
    where
        F: Fn(ToolArguments, ToolExecutionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, ChatError>> + Send + 'static,
    {
        let boxed: Handler = Arc::new(
            move |args: ToolArguments,
                  ctx: ToolExecutionContext|
                  -> BoxFuture<'static, Result<serde_json::Value, ChatError>> {
                Box::pin(handler(args, ctx))
            },
        );
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
            handler: boxed,
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &AgentToolParameters {
        &self.parameters
    }

    async fn execute(
        &self,
        args: &ToolArguments,
        ctx: &ToolExecutionContext,
    ) -> Result<serde_json::Value, ChatError> {
        debug!(tool = %self.name, call_id = ctx.call_id(), "running tool");
        let result = (self.handler)(args.clone(), ctx.clone()).await;
        if let Err(ref e) = result {
            debug!(tool = %self.name, call_id = ctx.call_id(), error = %e, "tool failed");
        }
        result
    }
}

impl std::fmt::Debug for AgentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentTool")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
