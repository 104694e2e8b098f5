//! climate-cli - query the climate records API from a terminal.
//!
//! Runs the same refresh pipeline as the browser dashboard and prints the
//! table, a sparkline of the chart series, and the summary statistics.

use clap::Parser;

mod cmd;
mod terminal;

#[derive(Parser)]
#[command(
    name = "climate-cli",
    version,
    about = "Climate records dashboard for the terminal"
)]
struct Cli {
    /// Base URL that relative endpoints are resolved against
    #[arg(long, default_value = "http://localhost:8000/")]
    api_base: String,

    /// JSON file in the dashboardConfig format (defaults and endpoints)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cmd::load_config(cli.config.as_deref())?;
    cmd::run(cli.command, &config, &cli.api_base).await
}
