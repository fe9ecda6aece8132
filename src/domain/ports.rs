use async_trait::async_trait;
use serde_json::Value;

/// Anything that can produce the backend's fuel-price map.
#[async_trait]
pub trait FuelPriceSource: Send + Sync {
    async fn fetch_fuel_prices(&self) -> Option<Value>;
}

/// Price elements keyed by fuel type (`price-{fuelType}`).
pub trait PriceBoard {
    /// Returns `false` when no element exists for `fuel_type`.
    fn set_price_text(&mut self, fuel_type: &str, text: &str) -> bool;
}

pub trait ClockDisplay {
    fn set_text(&mut self, text: &str);
}
