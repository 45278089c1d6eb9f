//! Convenience re-exports for common use.

pub use crate::agent::{Agent, ConversationalAgent, StepStream};
pub use crate::chat::{ChatSession, SessionState};
pub use crate::config::ChatConfig;
pub use crate::error::{ChatError, Result};
pub use crate::provider::ModelProvider;
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments};
pub use crate::types::{AgentStep, ContentPart, GenerationSettings, ModelMessage, Role, StepNode};
