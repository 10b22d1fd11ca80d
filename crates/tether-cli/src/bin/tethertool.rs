use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tether_cli::commands::{code_ops, complete_ops, input_ops};
use tether_core::code::ChannelId;
use tether_core::settings::settings;

#[derive(Parser)]
#[command(name = "tethertool", about = "Pairing-code generation and completion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a fresh pairing code
    Generate {
        /// Channel id to prefix the code with
        #[arg(long)]
        channel: String,
        /// Number of words to append (default from settings)
        #[arg(short, long)]
        length: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Extract the channel id from a code
    Parse {
        /// The code to parse
        code: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Enumerate every completion for a partial code
    Complete {
        /// The partially typed code
        text: String,
        /// Comma-separated list of open channel ids
        #[arg(long, value_delimiter = ',')]
        channels: Vec<ChannelId>,
        /// Number of words in a full code (default from settings)
        #[arg(short, long)]
        length: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read a code interactively with Tab completion
    Input {
        /// Comma-separated list of open channel ids
        #[arg(long, value_delimiter = ',')]
        channels: Vec<ChannelId>,
        /// Number of words in a full code (default from settings)
        #[arg(short, long)]
        length: Option<usize>,
        /// Prompt string (defaults to the configured prompt)
        #[arg(long)]
        prompt: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TETHER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let default_length = settings().code.default_length;

    match cli.command {
        Command::Generate {
            channel,
            length,
            json,
        } => {
            code_ops::generate(&channel, length.unwrap_or(default_length), json);
        }
        Command::Parse { code, json } => {
            code_ops::parse(&code, json);
        }
        Command::Complete {
            text,
            channels,
            length,
            json,
        } => {
            complete_ops::complete(&text, channels, length.unwrap_or(default_length), json);
        }
        Command::Input {
            channels,
            length,
            prompt,
        } => {
            input_ops::input(channels, length.unwrap_or(default_length), prompt);
        }
    }
}
