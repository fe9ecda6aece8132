use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub const ROUTE_OPTIMIZATION_PATH: &str = "/api/route-optimization";
pub const ROUTE_ALTERNATIVES_PATH: &str = "/api/route-alternatives";
pub const LIVE_TRACKING_PATH: &str = "/api/live-tracking";
pub const WAYPOINTS_PATH: &str = "/api/waypoints";
pub const FUEL_PRICES_PATH: &str = "/api/fuel-prices";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

/// A single backend call: path relative to the client's base URL, method and
/// optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Get,
            body: None,
        }
    }

    pub fn post(endpoint: impl Into<String>, body: Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Post,
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    #[default]
    Fastest,
    Economical,
    Shortest,
}

/// Route data in the shape the backend's route endpoints read. Any other
/// serializable value is accepted by the client as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    pub cargo_weight: f64,
    pub optimization_type: OptimizationType,
    pub avoid_tolls: bool,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Default::default()
        }
    }

    pub fn with_vehicle(mut self, vehicle: impl Into<String>) -> Self {
        self.vehicle = Some(vehicle.into());
        self
    }

    pub fn with_cargo_weight(mut self, weight: f64) -> Self {
        self.cargo_weight = weight;
        self
    }

    pub fn with_optimization(mut self, optimization: OptimizationType) -> Self {
        self.optimization_type = optimization;
        self
    }

    pub fn avoiding_tolls(mut self) -> Self {
        self.avoid_tolls = true;
        self
    }
}

pub fn live_tracking_path(route_id: &str) -> String {
    format!("{}/{}", LIVE_TRACKING_PATH, route_id)
}

/// `{action, ...data}`: `action` goes in first, then every field of `data`
/// if it is an object. A field named `action` in `data` wins.
pub fn waypoint_body(action: &str, data: &Value) -> Value {
    let mut body = serde_json::Map::new();
    body.insert("action".to_string(), Value::String(action.to_string()));
    if let Value::Object(fields) = data {
        for (key, value) in fields {
            body.insert(key.clone(), value.clone());
        }
    }
    Value::Object(body)
}
