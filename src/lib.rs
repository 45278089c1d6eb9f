//! toolchat: an interactive terminal chat with a tool-calling agent.
//!
//! Lines that look like arithmetic (`add 5 and 3`) are answered locally by the
//! calculator tool. Everything else goes to an agent backed by an
//! OpenAI-compatible chat model that can call four built-in tools.
//!
//! # Quick Start
//!
//! ```no_run
//! use toolchat::agent::Agent;
//! use toolchat::chat::ChatSession;
//! use toolchat::config::ChatConfig;
//! use toolchat::tools::builtin::all_tools;
//!
//! # async fn example() -> toolchat::error::Result<()> {
//! let config = ChatConfig::load(None)?;
//! let agent = Agent::from_config(&config, all_tools())?;
//! let input = tokio::io::BufReader::new(tokio::io::stdin());
//! ChatSession::new(agent, input, tokio::io::stdout()).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod chat;
pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
