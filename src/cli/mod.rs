//! Command-line arguments for the `toolchat` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

/// Chat with a tool-calling assistant. Type 'quit' to exit.
#[derive(Parser, Debug)]
#[command(name = "toolchat", version, about)]
pub struct Cli {
    /// Model to use (overrides OPENAI_MODEL and the settings file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sampling temperature (defaults to 0 for deterministic replies)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Maximum model turns per answer
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Settings file (TOML); defaults to the platform config directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Command-line values as configuration overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            model: self.model.clone(),
            temperature: self.temperature,
            base_url: self.base_url.clone(),
            max_iterations: self.max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_no_overrides() {
        let cli = Cli::try_parse_from(["toolchat"]).unwrap();
        assert_eq!(cli.overrides(), ConfigOverrides::default());
        assert!(cli.config.is_none());
    }

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "toolchat",
            "--model",
            "gpt-4o-mini",
            "-t",
            "0.3",
            "--base-url",
            "http://localhost:11434/v1",
            "--max-iterations",
            "4",
            "--config",
            "/tmp/settings.toml",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(overrides.temperature, Some(0.3));
        assert_eq!(overrides.base_url.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(overrides.max_iterations, Some(4));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/settings.toml")));
    }

    #[test]
    fn rejects_non_numeric_temperature() {
        assert!(Cli::try_parse_from(["toolchat", "--temperature", "warm"]).is_err());
    }
}
