//! Interactive chat loop.
//!
//! Reads one line per turn, routes it (see [`route`]), and writes the reply.
//! Input and output are generic async streams so the loop runs the same way
//! on a terminal and in tests.

pub mod route;

pub use route::{classify, parse_arithmetic, ArithmeticCommand, ArithmeticError, Route};

use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::agent::ConversationalAgent;
use crate::error::ChatError;
use crate::tools::builtin::calculator;
use crate::types::ModelMessage;

pub const WELCOME: &str = "Welcome to the interactive chat! Type 'quit' to exit.";
pub const USER_PROMPT: &str = "\nYou: ";
pub const ASSISTANT_PROMPT: &str = "\nAssistant: ";

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive session bound to an agent, an input and an output.
pub struct ChatSession<A, R, W> {
    agent: A,
    input: R,
    output: W,
    turns: usize,
}

impl<A, R, W> ChatSession<A, R, W>
where
    A: ConversationalAgent,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(agent: A, input: R, output: W) -> Self {
        Self {
            agent,
            input,
            output,
            turns: 0,
        }
    }

    /// Print the welcome line and run turns until `quit` or end of input.
    ///
    /// Agent errors are not handled here; they end the session.
    pub async fn run(&mut self) -> Result<(), ChatError> {
        self.write(&format!("{WELCOME}\n")).await?;
        while self.turn().await? == SessionState::Running {}
        debug!(turns = self.turns, "chat session ended");
        Ok(())
    }

    /// Prompt for and handle one line of input.
    pub async fn turn(&mut self) -> Result<SessionState, ChatError> {
        self.write(USER_PROMPT).await?;

        let mut raw = String::new();
        if self.input.read_line(&mut raw).await? == 0 {
            self.write("\n").await?;
            return Ok(SessionState::Terminated);
        }
        self.turns += 1;

        let line = raw.trim();
        let route = classify(line);
        debug!(turn = self.turns, ?route, "routing input");

        match route {
            Route::Quit => return Ok(SessionState::Terminated),
            Route::Arithmetic => {
                let reply = match parse_arithmetic(line) {
                    Ok(cmd) => calculator(cmd.a, cmd.b, &cmd.operation),
                    Err(e) => e.to_string(),
                };
                self.write(&format!("{ASSISTANT_PROMPT}{reply}\n")).await?;
            }
            Route::Delegate => self.delegate(line).await?,
        }
        Ok(SessionState::Running)
    }

    /// Send `line` to the agent and print its reply as it streams in.
    async fn delegate(&mut self, line: &str) -> Result<(), ChatError> {
        self.write(ASSISTANT_PROMPT).await?;

        let mut steps = self.agent.stream(vec![ModelMessage::user(line)]);
        while let Some(step) = steps.next().await {
            let step = step?;
            debug!(node = %step.node, messages = step.messages.len(), "agent step");
            let text = step.reply_text();
            if !text.is_empty() {
                self.write(&text).await?;
            }
        }

        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> Result<(), ChatError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Consume the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
