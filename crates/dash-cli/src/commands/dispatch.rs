use dash_config::DashConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to its handler module.
pub async fn dispatch(
    command: Commands,
    config: DashConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Seed(args) => commands::seed::handle(&args, &config, flags).await,
        Commands::View(args) => commands::view::handle(&args, config, flags).await,
        Commands::Options(args) => commands::options::handle(&args, config, flags).await,
    }
}
