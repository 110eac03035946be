use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Move a school to another district.
    Migrate(MigrateArgs),
    /// Fetch and print a school record.
    Show(ShowArgs),
    /// Print the effective configuration.
    Config,
}

/// Arguments for `rehome migrate`.
#[derive(Clone, Debug, Args)]
pub struct MigrateArgs {
    /// School identifier.
    #[arg(long)]
    pub school: String,
    /// School name used in the confirmation (defaults to the identifier).
    #[arg(long)]
    pub school_label: Option<String>,
    /// Target district identifier.
    #[arg(long)]
    pub district: String,
    /// District name used in the confirmation (defaults to the identifier).
    #[arg(long)]
    pub district_label: Option<String>,
}

/// Arguments for `rehome show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// School identifier.
    pub school: String,
}
