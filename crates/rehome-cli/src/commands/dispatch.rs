use rehome_config::RehomeConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &RehomeConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Migrate(args) => commands::migrate::handle(&args, config, flags).await,
        Commands::Show(args) => commands::show::handle(&args, config, flags).await,
        Commands::Config => commands::config::handle(config, flags),
    }
}
