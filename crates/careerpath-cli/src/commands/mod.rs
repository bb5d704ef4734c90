use clap::{Parser, Subcommand};
use std::path::PathBuf;

use careerpath_config::{CareerConfig, ConfigLoader};
use careerpath_core::{CareerError, Result};

mod analyze;
mod serve;
mod skills;

/// Skill extraction and career insight service
#[derive(Parser)]
#[command(name = "careerpath", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to careerpath.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve,
    /// Extract skills from text and print their insights
    Analyze {
        /// Free text describing skills
        text: String,
        /// Analyze against this JSON seed file instead of the configured store
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage skill records in the configured store
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum SkillsAction {
    /// List every skill name in storage order
    List,
    /// Import a JSON array of skill records
    Import {
        /// Path to the seed file
        file: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level
                .as_deref()
                .unwrap_or(config.logging.level.as_str())
        };

        if config.logging.format == "json" {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
                )
                .json()
                .with_target(true)
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
                )
                .with_target(false)
                .init();
        }

        for w in config_loader.warnings() {
            tracing::warn!("{}", w);
        }

        match self.command {
            Commands::Serve => serve::cmd_serve(config).await,
            Commands::Analyze { text, seed, json } => {
                analyze::cmd_analyze(config, text, seed, json).await
            }
            Commands::Skills { action } => skills::cmd_skills(config, action).await,
            Commands::Config { json } => Self::cmd_config(config, json),
        }
    }

    fn cmd_config(config: CareerConfig, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| CareerError::Config(format!("failed to render config: {}", e)))?;
            println!("{rendered}");
        }
        Ok(())
    }
}
