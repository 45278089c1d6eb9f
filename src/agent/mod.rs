//! The tool-calling agent behind delegated chat turns.

pub mod agent;

pub use agent::Agent;

use futures::stream::BoxStream;

use crate::error::ChatError;
use crate::types::{AgentStep, ModelMessage};

/// Stream of steps the agent emits while answering.
pub type StepStream = BoxStream<'static, Result<AgentStep, ChatError>>;

/// Anything that can answer a conversation with a finite stream of steps.
///
/// The chat loop only depends on this trait, so the agent can be swapped
/// for a scripted one in tests.
pub trait ConversationalAgent: Send + Sync {
    /// Start answering `messages`. The stream ends after the final reply
    /// or after the first error.
    fn stream(&self, messages: Vec<ModelMessage>) -> StepStream;
}

impl<T: ConversationalAgent + ?Sized> ConversationalAgent for std::sync::Arc<T> {
    fn stream(&self, messages: Vec<ModelMessage>) -> StepStream {
        (**self).stream(messages)
    }
}
