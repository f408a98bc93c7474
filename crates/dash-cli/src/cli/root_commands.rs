use clap::{Args, Subcommand};
use dash_config::SeedMode;
use dash_core::CategoricalField;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the data provider: connect, seed, and serve HTTP.
    Serve(ServeArgs),
    /// Import the dataset into the store without starting the server.
    Seed(SeedArgs),
    /// Fetch from a running server, filter, and render the dashboard.
    View(ViewArgs),
    /// List the selector options for one categorical field.
    Options(OptionsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override `server.host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override `server.static_dir`.
    #[arg(long)]
    pub static_dir: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seeding policy: if-empty, always, never (defaults to `seed.mode`).
    #[arg(long, value_parser = parse_seed_mode)]
    pub mode: Option<SeedMode>,

    /// Dataset file to import (defaults to `seed.dataset_path`).
    #[arg(long)]
    pub dataset: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Server base URL (defaults to `client.base_url`).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Skip the record list and show only the charts.
    #[arg(long)]
    pub charts_only: bool,
}

/// One optional equality constraint per categorical field.
///
/// An empty value is the same as leaving the flag out.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub sector: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub pestle: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
}

impl FilterArgs {
    /// The constraints given on the command line, in selector order.
    pub fn constraints(&self) -> impl Iterator<Item = (CategoricalField, &str)> {
        CategoricalField::ALL
            .into_iter()
            .zip([
                &self.topic,
                &self.sector,
                &self.region,
                &self.pestle,
                &self.source,
            ])
            .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

#[derive(Clone, Debug, Args)]
pub struct OptionsArgs {
    /// topic, sector, region, pestle, or source.
    #[arg(value_parser = parse_field)]
    pub field: CategoricalField,

    /// Server base URL (defaults to `client.base_url`).
    #[arg(long)]
    pub base_url: Option<String>,
}

fn parse_seed_mode(value: &str) -> Result<SeedMode, String> {
    value.parse().map_err(|e: dash_config::ConfigError| e.to_string())
}

fn parse_field(value: &str) -> Result<CategoricalField, String> {
    value.parse().map_err(|e: dash_core::CoreError| e.to_string())
}
