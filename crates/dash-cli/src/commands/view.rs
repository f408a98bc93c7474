use anyhow::Context;
use dash_config::DashConfig;
use dash_view::{DashboardView, DataClient, TextRenderer, render_list};

use crate::cli::root_commands::ViewArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `dash view`.
///
/// A failed fetch is not an error: the dashboard renders empty.
pub async fn handle(args: &ViewArgs, mut config: DashConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(base_url) = &args.base_url {
        config.client.base_url.clone_from(base_url);
    }
    let client = DataClient::new(&config.client).context("failed to build HTTP client")?;
    tracing::debug!(url = %client.data_url(), "fetching records");

    let mut view = DashboardView::new(TextRenderer::default());
    view.handle(client.load_event().await);
    for (field, value) in args.filters.constraints() {
        view.select(field, Some(value.to_string()));
    }

    let dashboard = view.dashboard();
    if flags.format != OutputFormat::Table {
        return output(&dashboard.snapshot(), flags.format);
    }

    for chart in [view.bar_chart(), view.pie_chart()].into_iter().flatten() {
        println!("{}", chart.body);
    }
    if !args.charts_only {
        print!("{}", render_list(dashboard.filtered()));
    }
    if !flags.quiet {
        eprintln!(
            "{} of {} records match",
            dashboard.filtered().len(),
            dashboard.records().len()
        );
    }
    Ok(())
}
