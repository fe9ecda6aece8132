use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use wise_routes::config::Command;
use wise_routes::utils::logger::{self, LogFormat};
use wise_routes::utils::validation::Validate;
use wise_routes::{
    apply_fuel_prices, run_clock, ApiError, CliConfig, ClientConfig, ClockDisplay, PriceBoard,
    RequestDescriptor, WiseRoutesClient,
};

/// Prints every price it is given; any fuel type has an element.
struct ConsolePriceBoard;

impl PriceBoard for ConsolePriceBoard {
    fn set_price_text(&mut self, fuel_type: &str, text: &str) -> bool {
        println!("{:<32} {}", fuel_type, text);
        true
    }
}

struct ConsoleClock;

impl ClockDisplay for ConsoleClock {
    fn set_text(&mut self, text: &str) {
        println!("{}", text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path).unwrap_or_else(|e| fail(&e)),
        None => ClientConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let client = WiseRoutesClient::from_config(&config).unwrap_or_else(|e| fail(&e));
    tracing::debug!("Using backend at {}", client.base_url());

    let result = match cli.command {
        // 直接回報失敗原因，其他指令維持 null 回傳
        Command::Fetch { endpoint } => {
            match client.try_fetch(&RequestDescriptor::get(&endpoint)).await {
                Ok(value) => Some(value),
                Err(e) => {
                    println!("null");
                    fail(&e);
                }
            }
        }
        Command::Optimize { data } => client.optimize_route(&parse_json_arg(&data)?).await,
        Command::Alternatives { data } => {
            client
                .get_route_alternatives(&parse_json_arg(&data)?)
                .await
        }
        Command::Track { route_id } => client.get_live_tracking(&route_id).await,
        Command::Waypoints { action, data } => {
            client
                .manage_waypoints(&action, &parse_json_arg(&data)?)
                .await
        }
        Command::FuelPrices { board } => match client.fetch_fuel_prices().await {
            Some(prices) if board => {
                let updated = apply_fuel_prices(&prices, &mut ConsolePriceBoard);
                tracing::info!("Displayed {} fuel prices", updated);
                return Ok(());
            }
            other => other,
        },
        Command::Clock { ticks } => {
            run_clock(&mut ConsoleClock, config.clock_period(), ticks).await;
            return Ok(());
        }
    };

    match result {
        Some(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        None => {
            println!("null");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn fail(error: &ApiError) -> ! {
    tracing::error!("❌ {}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    std::process::exit(error.exit_code());
}

/// JSON given inline, or `@path` to read it from a file.
fn parse_json_arg(raw: &str) -> anyhow::Result<Value> {
    let text = match raw.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read JSON from {}", path))?,
        None => raw.to_string(),
    };

    serde_json::from_str(&text).context("argument is not valid JSON")
}
