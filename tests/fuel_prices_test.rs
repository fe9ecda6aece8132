mod common;

use common::UNREACHABLE_BASE_URL;
use httpmock::prelude::*;
use serde_json::json;
use wise_routes::{update_fuel_prices, MemoryPriceBoard, WiseRoutesClient};

#[tokio::test]
async fn test_fuel_price_flow_updates_display() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/fuel-prices");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"gasoline": 5.489}));
    });

    let client = WiseRoutesClient::new(&server.base_url()).unwrap();
    let mut board = MemoryPriceBoard::with_elements(["gasoline"]);

    let updated = update_fuel_prices(&client, &mut board).await;

    mock.assert();
    assert_eq!(updated, 1);
    assert_eq!(board.text("gasoline"), Some("R$ 5.49"));
}

#[tokio::test]
async fn test_fuel_price_flow_with_backend_prices() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/fuel-prices");
        then.status(200).json_body(json!({
            "gasolina_comum_curitiba": 5.89,
            "gasolina_aditivada_curitiba": 6.15,
            "diesel_s10": 5.45,
            "vale_gasolina_interestadual": 5.95
        }));
    });

    let client = WiseRoutesClient::new(&server.base_url()).unwrap();
    let mut board = MemoryPriceBoard::with_elements([
        "gasolina_comum_curitiba",
        "gasolina_aditivada_curitiba",
        "diesel_s10",
    ]);

    let updated = update_fuel_prices(&client, &mut board).await;

    assert_eq!(updated, 3);
    assert_eq!(board.text("gasolina_comum_curitiba"), Some("R$ 5.89"));
    assert_eq!(board.text("gasolina_aditivada_curitiba"), Some("R$ 6.15"));
    assert_eq!(board.text("diesel_s10"), Some("R$ 5.45"));
    assert_eq!(board.text("vale_gasolina_interestadual"), None);
}

#[tokio::test]
async fn test_fuel_price_flow_leaves_display_on_failure() {
    let client = WiseRoutesClient::new(UNREACHABLE_BASE_URL).unwrap();
    let mut board = MemoryPriceBoard::with_elements(["gasoline"]);

    let updated = update_fuel_prices(&client, &mut board).await;

    assert_eq!(updated, 0);
    assert_eq!(board.text("gasoline"), Some(""));
}
