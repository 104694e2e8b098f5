//! Subcommands of the climate CLI.

use anyhow::{bail, Context};
use clap::Subcommand;
use climate_client::{ApiEndpoints, DashboardClient, Url};
use climate_data::config::DashboardConfig;
use climate_data::period::PeriodType;
use climate_view::controller::{Completion, Controller, FilterChange, Intent};
use log::info;

use crate::terminal::{self, TextChart};

#[derive(Subcommand)]
pub enum Command {
    /// Fetch records and summary for one filter selection and print them
    Show {
        /// Region code (defaults to the configured default region)
        #[arg(short, long)]
        region: Option<String>,

        /// Parameter code (defaults to the configured default parameter)
        #[arg(short, long)]
        parameter: Option<String>,

        /// Period granularity: month, season or annual
        #[arg(short = 't', long, default_value = "month")]
        period_type: PeriodType,

        /// First year to include
        #[arg(long)]
        start_year: Option<String>,

        /// Last year to include
        #[arg(long)]
        end_year: Option<String>,

        /// Single period code, e.g. jan or win
        #[arg(long)]
        period: Option<String>,
    },

    /// List selectable regions
    Regions,

    /// List selectable parameters
    Parameters,
}

/// Load a dashboardConfig-shaped JSON file, or the defaults without one.
pub fn load_config(path: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    DashboardConfig::from_json(&json).with_context(|| format!("Invalid dashboard config in {}", path))
}

pub async fn run(command: Command, config: &DashboardConfig, api_base: &str) -> anyhow::Result<()> {
    let base = Url::parse(api_base).with_context(|| format!("Invalid API base URL {:?}", api_base))?;
    let endpoints = ApiEndpoints::resolve(&config.endpoints, Some(&base))?;
    let client = DashboardClient::new(endpoints);
    info!("Using records endpoint {}", client.endpoints().records);

    match command {
        Command::Show {
            region,
            parameter,
            period_type,
            start_year,
            end_year,
            period,
        } => {
            let mut config = config.clone();
            if let Some(region) = region {
                config.default_region = region;
            }
            if let Some(parameter) = parameter {
                config.default_parameter = parameter;
            }
            let edits = vec![
                FilterChange::StartYear(start_year.unwrap_or_default()),
                FilterChange::EndYear(end_year.unwrap_or_default()),
                FilterChange::Period(period.unwrap_or_default()),
            ];
            show(&client, &config, period_type, edits).await
        }
        Command::Regions => {
            let catalog = client.fetch_catalog().await;
            terminal::print_regions(&catalog.regions);
            Ok(())
        }
        Command::Parameters => {
            let catalog = client.fetch_catalog().await;
            terminal::print_parameters(&catalog.parameters);
            Ok(())
        }
    }
}

async fn show(
    client: &DashboardClient,
    config: &DashboardConfig,
    period_type: PeriodType,
    edits: Vec<FilterChange>,
) -> anyhow::Result<()> {
    let mut controller = Controller::new(config, TextChart::default());
    controller.set_catalog(client.fetch_catalog().await);
    for edit in edits {
        controller.dispatch(Intent::FiltersChanged(edit));
    }

    let Some(ticket) = controller.dispatch(Intent::FiltersChanged(FilterChange::PeriodType(period_type))) else {
        bail!("Selecting a period type did not start a refresh");
    };
    let outcome = client.refresh(&ticket.query).await;
    let completion = controller.complete(ticket.token, outcome);

    terminal::print_dashboard(&controller);
    if completion == Completion::Failed {
        bail!("Error loading data.");
    }
    Ok(())
}
