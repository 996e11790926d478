//! apidefaults CLI - fill in API object defaults
//!
//! Usage: apidefaults <COMMAND>
//!
//! Commands:
//!   apply   Default a manifest and print the result
//!   kinds   List object kinds and their defaulting procedures

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// apidefaults - fill in API object defaults
#[derive(Parser, Debug)]
#[command(name = "apidefaults")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Default a manifest and print the result
    Apply {
        /// Manifest file, or '-' for stdin
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,

        /// Policy config file (defaults to .apidefaults/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List object kinds and their defaulting procedures
    Kinds,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Apply {
            input,
            output,
            config,
        } => commands::apply::cmd_apply(&input, output, config.as_ref()),
        Commands::Kinds => commands::kinds::cmd_kinds(),
    };

    if let Err(err) = result {
        ui::error::print_error(&err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ui::terminal::detect_capabilities().supports_color)
        .with_target(false)
        .init();
}
