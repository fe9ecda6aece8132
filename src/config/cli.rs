use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "wise-routes")]
#[command(about = "Command-line client for the Wise Routes backend")]
pub struct CliConfig {
    /// Backend base URL; overrides the config file
    #[arg(long, env = "WISE_ROUTES_BASE_URL")]
    pub base_url: Option<String>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// GET an arbitrary endpoint
    Fetch { endpoint: String },

    /// Optimize a route; DATA is JSON or @file
    Optimize { data: String },

    /// List route alternatives; DATA is JSON or @file
    Alternatives { data: String },

    /// Live tracking for a route
    Track { route_id: String },

    /// Add or remove waypoints
    Waypoints {
        action: String,

        /// Extra fields merged into the request body (JSON or @file)
        #[arg(long, default_value = "{}")]
        data: String,
    },

    /// Show current fuel prices
    FuelPrices {
        #[arg(long, help = "Print the formatted price board instead of raw JSON")]
        board: bool,
    },

    /// Print the clock display
    Clock {
        #[arg(long, help = "Stop after this many updates")]
        ticks: Option<u64>,
    },
}
