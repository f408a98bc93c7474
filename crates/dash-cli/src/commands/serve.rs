use anyhow::Context;
use dash_config::DashConfig;

use crate::cli::root_commands::ServeArgs;

/// Handle `dash serve`.
pub async fn handle(args: &ServeArgs, config: DashConfig) -> anyhow::Result<()> {
    let config = apply_overrides(args, config)?;

    dash_server::run(&config, dash_server::shutdown_signal())
        .await
        .context("dashboard server stopped with an error")
}

/// Apply the command-line overrides and re-check the result.
fn apply_overrides(args: &ServeArgs, mut config: DashConfig) -> anyhow::Result<DashConfig> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(static_dir) = &args.static_dir {
        config.server.static_dir.clone_from(static_dir);
    }
    config.validate().context("invalid serve options")?;
    Ok(config)
}
