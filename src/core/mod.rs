pub mod client;
pub mod display;

pub use crate::domain::model::{
    live_tracking_path, waypoint_body, HttpMethod, OptimizationType,
    RequestDescriptor, RouteRequest, FUEL_PRICES_PATH, LIVE_TRACKING_PATH,
    ROUTE_ALTERNATIVES_PATH, ROUTE_OPTIMIZATION_PATH, WAYPOINTS_PATH,
};
pub use crate::domain::ports::{ClockDisplay, FuelPriceSource, PriceBoard};
pub use crate::utils::error::Result;
