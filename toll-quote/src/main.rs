use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use toll_quote::batch;
use toll_quote::config::AppConfig;
use toll_quote::domain::{LocTimeStrategy, Location};
use toll_quote::here::HereClient;
use toll_quote::pipeline::{QuoteConfig, TollQuoter};
use toll_quote::tollguru::TollGuruClient;

/// Quote toll costs for road trips
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote a single trip and print the costs as JSON
    Quote {
        /// Start address, or "lat,lng"
        #[arg(long)]
        from: Location,

        /// End address, or "lat,lng"
        #[arg(long)]
        to: Location,

        /// Toll vehicle type (e.g. 2AxlesAuto, 5AxlesTruck)
        #[arg(long)]
        vehicle: Option<String>,

        /// How to build the location-time series: per-action or endpoints
        #[arg(long, default_value = "per-action")]
        strategy: LocTimeStrategy,
    },

    /// Quote every trip in a CSV file
    Batch {
        /// Input CSV with id, source, destination and optional vehicle_type columns
        input: PathBuf,

        /// Output CSV
        output: PathBuf,

        /// Vehicle type for rows without one
        #[arg(long)]
        vehicle: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let here = match HereClient::new(config.here) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create routing client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let tollguru = match TollGuruClient::new(config.tollguru) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create toll client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Quote {
            from,
            to,
            vehicle,
            strategy,
        } => {
            let quote_config = with_vehicle(config.quote, vehicle).with_strategy(strategy);
            let quoter = TollQuoter::new(here, tollguru, quote_config);

            match quoter.quote_trip(&from, &to, None).await {
                Ok(quote) if quote.costs.is_empty() => {
                    println!("The route doesn't have tolls");
                    ExitCode::SUCCESS
                }
                Ok(quote) => match serde_json::to_string_pretty(&quote.costs) {
                    Ok(json) => {
                        println!("{json}");
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        error!("failed to serialize costs: {e}");
                        ExitCode::FAILURE
                    }
                },
                Err(e) => {
                    error!("{e}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Batch {
            input,
            output,
            vehicle,
        } => {
            let quoter = TollQuoter::new(here, tollguru, with_vehicle(config.quote, vehicle));

            match batch::run_files(&quoter, &input, &output).await {
                Ok(summary) => {
                    println!(
                        "{} rows: {} succeeded, {} failed",
                        summary.rows, summary.succeeded, summary.failed
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("batch failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn with_vehicle(config: QuoteConfig, vehicle: Option<String>) -> QuoteConfig {
    match vehicle {
        Some(code) => config.with_vehicle_type(code),
        None => config,
    }
}
