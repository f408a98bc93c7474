use anyhow::Context;
use dash_config::DashConfig;
use dash_view::{Dashboard, DataClient};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OptionsArgs;
use crate::output::output;

/// Handle `dash options <field>`.
pub async fn handle(args: &OptionsArgs, mut config: DashConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &args.base_url {
        config.client.base_url.clone_from(base_url);
    }
    let client = DataClient::new(&config.client).context("failed to build HTTP client")?;

    let mut dashboard = Dashboard::new();
    dashboard.apply(client.load_event().await);

    output(&dashboard.options(args.field), flags.format)
}
