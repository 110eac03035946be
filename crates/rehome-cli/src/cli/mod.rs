use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rehome` binary.
#[derive(Debug, Parser)]
#[command(name = "rehome", version, about = "Move schools between districts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Service root URL (overrides `server.base_url`)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            base_url: self.base_url.clone(),
        }
    }
}
