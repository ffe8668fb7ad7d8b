//! Command-line interface parsing and handling
//!
//! This module parses arguments, wires up the session from config and flags,
//! and dispatches into the interactive chat loop or the one-shot `say` mode.

pub mod chat;
pub mod say;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::chat::run_chat;
use crate::cli::say::run_say;
use crate::core::client::GeminiModel;
use crate::core::config::Config;
use crate::core::constants::DEFAULT_BASE_URL;
use crate::core::session::ChatSession;
use crate::logging::LoggingState;

#[derive(Parser)]
#[command(name = "gemchat")]
#[command(about = "A terminal chat front-end for the Gemini API")]
#[command(
    long_about = "Gemchat streams Gemini responses into a running terminal conversation.\n\n\
Environment Variables:\n\
  GOOGLE_API_KEY    Your Google API key (prompted for interactively if unset)\n\
  RUST_LOG          Diagnostic log filter (written to stderr)\n\n\
Chat commands:\n\
  /model <id>       Switch model for the next turn\n\
  /temp <0..1>      Set the sampling temperature\n\
  /key <secret>     Replace the API credential\n\
  /log [file]       Enable or toggle the chat log\n\
  /quit             Exit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model to use for chat
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0..=1.0)
    #[arg(short = 't', long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Enable chat logging to the specified file
    #[arg(short = 'l', long, global = true)]
    pub log: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive chat (default)
    Chat,
    /// Send a single prompt and print the streamed reply
    Say {
        /// The prompt text
        #[arg(trailing_var_arg = true)]
        prompt: Vec<String>,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::load()?;

    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut session = ChatSession::with_base_url(base_url);

    if let Some(model) = args.model.as_deref().or(config.default_model.as_deref()) {
        match GeminiModel::try_from(model) {
            Ok(model) => session.select_model(model),
            Err(err) => {
                eprintln!("❌ {err}");
                eprintln!("Supported models:");
                for model in GeminiModel::ALL {
                    eprintln!("  {model}");
                }
                std::process::exit(2);
            }
        }
    }

    if let Some(temperature) = args.temperature.or(config.default_temperature) {
        if let Err(err) = session.set_temperature(temperature) {
            eprintln!("❌ {err}");
            std::process::exit(2);
        }
    }

    let logging = LoggingState::new(args.log.clone().or(config.log_file.clone()));

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(session, logging).await,
        Commands::Say { prompt } => run_say(session, prompt).await,
    }
}
