pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::ClientConfig;
pub use core::client::WiseRoutesClient;
pub use core::display::{
    apply_fuel_prices, format_datetime, format_price, run_clock, update_fuel_prices, MemoryClock,
    MemoryPriceBoard,
};
pub use domain::model::{HttpMethod, OptimizationType, RequestDescriptor, RouteRequest};
pub use domain::ports::{ClockDisplay, FuelPriceSource, PriceBoard};
pub use utils::error::{ApiError, Result};
