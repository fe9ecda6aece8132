use crate::core::{ClockDisplay, FuelPriceSource, PriceBoard};
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_CLOCK_PERIOD: Duration = Duration::from_secs(1);

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// `R$` plus two decimals. A value sitting exactly halfway between two
/// cents rounds away from zero (5.125 -> 5.13), matching `toFixed(2)`.
pub fn format_price(price: f64) -> String {
    format!("R$ {}", to_fixed_2(price))
}

fn to_fixed_2(value: f64) -> String {
    // Only odd multiples of 1/8 fall exactly on a half cent.
    let eighths = value.abs() * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let cents = (value.abs() * 100.0).ceil() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}

pub fn price_element_id(fuel_type: &str) -> String {
    format!("price-{}", fuel_type)
}

/// Fetches the fuel prices and writes each numeric one to its board element.
/// Returns how many elements were updated; a failed fetch updates nothing.
pub async fn update_fuel_prices<S, B>(source: &S, board: &mut B) -> usize
where
    S: FuelPriceSource + ?Sized,
    B: PriceBoard + ?Sized,
{
    match source.fetch_fuel_prices().await {
        Some(prices) => apply_fuel_prices(&prices, board),
        None => 0,
    }
}

/// Writes already fetched prices to the board and returns how many elements
/// changed.
pub fn apply_fuel_prices<B>(prices: &Value, board: &mut B) -> usize
where
    B: PriceBoard + ?Sized,
{
    let Value::Object(prices) = prices else {
        tracing::warn!("Fuel prices response is not an object, nothing to display");
        return 0;
    };

    let mut updated = 0;
    for (fuel_type, price) in prices {
        match price.as_f64() {
            Some(price) => {
                if board.set_price_text(fuel_type, &format_price(price)) {
                    updated += 1;
                } else {
                    tracing::debug!("No price element for {}", fuel_type);
                }
            }
            None => tracing::warn!("Skipping non-numeric price for {}: {}", fuel_type, price),
        }
    }

    tracing::debug!("Updated {} fuel price elements", updated);
    updated
}

/// In-memory price elements, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryPriceBoard {
    elements: HashMap<String, String>,
}

impl MemoryPriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, K>(fuel_types: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut board = Self::new();
        for fuel_type in fuel_types {
            board.register(fuel_type.as_ref());
        }
        board
    }

    pub fn register(&mut self, fuel_type: &str) {
        self.elements
            .entry(price_element_id(fuel_type))
            .or_default();
    }

    pub fn text(&self, fuel_type: &str) -> Option<&str> {
        self.elements
            .get(&price_element_id(fuel_type))
            .map(String::as_str)
    }
}

impl PriceBoard for MemoryPriceBoard {
    fn set_price_text(&mut self, fuel_type: &str, text: &str) -> bool {
        match self.elements.get_mut(&price_element_id(fuel_type)) {
            Some(element) => {
                *element = text.to_string();
                true
            }
            None => false,
        }
    }
}

/// Long Brazilian Portuguese date and time, e.g.
/// `sexta-feira, 16 de outubro de 2026 às 14:05`.
pub fn format_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!(
        "{}, {} de {} de {} às {:02}:{:02}",
        weekday_name(dt.weekday()),
        dt.day(),
        MONTHS[dt.month0() as usize],
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Writes the current local time to `display` right away and then once per
/// `period`. Stops after `ticks` updates, or never when `ticks` is `None`.
pub async fn run_clock<D>(display: &mut D, period: Duration, ticks: Option<u64>)
where
    D: ClockDisplay + ?Sized,
{
    let mut interval = tokio::time::interval(period);
    let mut count = 0u64;

    loop {
        if ticks.is_some_and(|limit| count >= limit) {
            break;
        }
        interval.tick().await;
        display.set_text(&format_datetime(&Local::now()));
        count += 1;
    }
}

/// Keeps every text written to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryClock {
    pub history: Vec<String>,
}

impl ClockDisplay for MemoryClock {
    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use serde_json::json;

    struct StaticPrices(Option<Value>);

    #[async_trait::async_trait]
    impl FuelPriceSource for StaticPrices {
        async fn fetch_fuel_prices(&self) -> Option<Value> {
            self.0.clone()
        }
    }

    #[test]
    fn test_format_price_rounds_to_two_decimals() {
        assert_eq!(format_price(5.489), "R$ 5.49");
        assert_eq!(format_price(5.89), "R$ 5.89");
        assert_eq!(format_price(6.0), "R$ 6.00");
    }

    #[test]
    fn test_format_price_half_cent_rounds_up() {
        assert_eq!(format_price(5.125), "R$ 5.13");
        assert_eq!(format_price(5.625), "R$ 5.63");
        assert_eq!(format_price(0.125), "R$ 0.13");
        assert_eq!(format_price(5.875), "R$ 5.88");
        assert_eq!(format_price(-0.125), "R$ -0.13");
        // 2.675 is stored just below the half cent
        assert_eq!(format_price(2.675), "R$ 2.67");
        assert_eq!(format_price(5.25), "R$ 5.25");
    }

    #[test]
    fn test_update_skips_missing_elements_and_non_numbers() {
        let source = StaticPrices(Some(json!({
            "diesel_s10": 5.45,
            "gasolina_comum_curitiba": 5.89,
            "etanol": "indisponível"
        })));
        let mut board = MemoryPriceBoard::with_elements(["diesel_s10", "etanol"]);

        let updated = tokio_test::block_on(update_fuel_prices(&source, &mut board));

        assert_eq!(updated, 1);
        assert_eq!(board.text("diesel_s10"), Some("R$ 5.45"));
        assert_eq!(board.text("etanol"), Some(""));
        assert_eq!(board.text("gasolina_comum_curitiba"), None);
    }

    #[test]
    fn test_update_does_nothing_on_failed_fetch() {
        let mut board = MemoryPriceBoard::with_elements(["gasoline"]);

        let updated = tokio_test::block_on(update_fuel_prices(&StaticPrices(None), &mut board));
        assert_eq!(updated, 0);
        assert_eq!(board.text("gasoline"), Some(""));

        let updated = tokio_test::block_on(update_fuel_prices(
            &StaticPrices(Some(json!([5.0]))),
            &mut board,
        ));
        assert_eq!(updated, 0);
    }

    #[test]
    fn test_apply_empty_or_non_numeric_prices_updates_nothing() {
        let mut board = MemoryPriceBoard::with_elements(["diesel_s10"]);

        assert_eq!(apply_fuel_prices(&json!({}), &mut board), 0);
        assert_eq!(
            apply_fuel_prices(&json!({"diesel_s10": "sem preço"}), &mut board),
            0
        );
        assert_eq!(board.text("diesel_s10"), Some(""));

        assert_eq!(apply_fuel_prices(&json!({"diesel_s10": 5.45}), &mut board), 1);
        assert_eq!(board.text("diesel_s10"), Some("R$ 5.45"));
    }

    #[test]
    fn test_format_datetime_pt_br() {
        let dt = Utc.with_ymd_and_hms(2026, 10, 16, 14, 5, 0).unwrap();
        assert_eq!(
            format_datetime(&dt),
            "sexta-feira, 16 de outubro de 2026 às 14:05"
        );

        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt), "domingo, 1 de março de 2026 às 09:00");
    }

    #[tokio::test]
    async fn test_run_clock_stops_after_ticks() {
        let mut clock = MemoryClock::default();
        run_clock(&mut clock, Duration::from_millis(1), Some(3)).await;

        assert_eq!(clock.history.len(), 3);
        assert!(clock.history.iter().all(|text| text.contains(" de ")));
    }
}
