//! toolchat binary entry point.

use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolchat::agent::Agent;
use toolchat::chat::ChatSession;
use toolchat::cli::Cli;
use toolchat::config::ChatConfig;
use toolchat::error::ChatError;
use toolchat::tools::builtin::all_tools;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the transcript.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => {}
        Err(e) if e.is_missing_credential() => println!("Error: {e}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<(), ChatError> {
    let config = ChatConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides())?;
    tracing::debug!(?config, "configuration resolved");

    let agent = Agent::from_config(&config, all_tools())?;
    tracing::info!(model = %config.model, tools = ?agent.tool_names(), "agent ready");
    println!("Agent loaded");

    let input = BufReader::new(tokio::io::stdin());
    let mut session = ChatSession::new(agent, input, tokio::io::stdout());
    session.run().await
}
