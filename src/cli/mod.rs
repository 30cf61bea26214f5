//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod ask;
pub mod health;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::ask::run_ask;
use crate::cli::health::run_health;
use crate::cli::settings::{set_value, unset_value};
use crate::core::config::{Config, SERVER_URL_ENV};
use crate::logging::{init_tracing, LogTarget};
use crate::ui::chat_loop::{run_chat, ChatOptions};

#[derive(Parser, Debug)]
#[command(name = "pdfchat", version)]
#[command(about = "Chat about a PDF document from the terminal")]
#[command(
    long_about = "pdfchat uploads a PDF to a document question-answering server and \
lets you ask questions about it in a full-screen terminal chat.\n\n\
Environment Variables:\n\
  PDFCHAT_SERVER_URL   Server base URL (defaults to http://localhost:8000)\n\
  RUST_LOG             Log filter (defaults to pdfchat=info)\n\n\
Controls:\n\
  Ctrl+O            Choose a PDF to upload\n\
  Enter             Send the message / confirm\n\
  Esc               Cancel the file prompt or dismiss an alert\n\
  Up/Down/PgUp/PgDn Scroll through the conversation\n\
  End               Jump to the newest message\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server base URL
    #[arg(short = 's', long, global = true, env = SERVER_URL_ENV, value_name = "URL")]
    pub server: Option<String>,

    /// Write logs to the specified file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat {
        /// PDF to upload when the session starts
        pdf: Option<PathBuf>,
    },
    /// Upload a PDF and ask a single question without the chat interface
    Ask {
        /// PDF to ask about
        #[arg(long, value_name = "PDF")]
        pdf: PathBuf,
        /// Question to ask (can be multiple words)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        question: Vec<String>,
    },
    /// Check that the server is up
    Health,
    /// Set configuration values, or print them when no value is given
    Set {
        /// Configuration key to set (server-url, log-file)
        key: Option<String>,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tokio::runtime::Runtime::new()?.block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let server_url = config.resolve_server_url(args.server.as_deref());

    match args.command.unwrap_or(Commands::Chat { pdf: None }) {
        Commands::Chat { pdf } => {
            let log_file = config.resolve_log_file(args.log.as_deref());
            init_tracing(&LogTarget::for_tui(log_file))?;
            run_chat(ChatOptions {
                server_url,
                initial_pdf: pdf,
            })
            .await
        }
        Commands::Ask { pdf, question } => {
            init_tracing(&LogTarget::for_command(args.log))?;
            run_ask(server_url, &pdf, question).await
        }
        Commands::Health => {
            init_tracing(&LogTarget::for_command(args.log))?;
            run_health(server_url).await
        }
        Commands::Set { key, value } => handle_set(config, key, value),
        Commands::Unset { key } => handle_unset(config, &key),
    }
}

fn handle_set(
    mut config: Config,
    key: Option<String>,
    value: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let (Some(key), Some(value)) = (key, value) else {
        config.print_all();
        return Ok(());
    };

    match set_value(&mut config, &key, &value) {
        Ok(message) => {
            config.save()?;
            println!("✅ {message}");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    }
}

fn handle_unset(mut config: Config, key: &str) -> Result<(), Box<dyn Error>> {
    match unset_value(&mut config, key) {
        Ok(message) => {
            config.save()?;
            println!("✅ {message}");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {err}");
            std::process::exit(1);
        }
    }
}
