use crate::config::ClientConfig;
use crate::core::{
    live_tracking_path, waypoint_body, FuelPriceSource, HttpMethod, RequestDescriptor, Result,
    FUEL_PRICES_PATH, ROUTE_ALTERNATIVES_PATH, ROUTE_OPTIMIZATION_PATH, WAYPOINTS_PATH,
};
use crate::utils::error::ApiError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// Client for the Wise Routes backend.
///
/// Every helper is a single attempt: the parsed JSON body on success (whatever
/// the HTTP status), `None` on any failure. Failures are logged once at
/// `error` level and never returned to the caller. Use [`try_fetch`] when the
/// failure cause matters.
///
/// [`try_fetch`]: WiseRoutesClient::try_fetch
#[derive(Debug, Clone)]
pub struct WiseRoutesClient {
    base_url: Url,
    client: Client,
}

impl WiseRoutesClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_client(Url::parse(base_url)?, Client::new()))
    }

    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { base_url, client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api.base_url)?;

        let mut builder = Client::builder();
        if let Some(user_agent) = &config.api.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self::with_client(base_url, builder.build()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs one request through the fetch pipeline and reports what went wrong.
    pub async fn try_fetch(&self, request: &RequestDescriptor) -> Result<Value> {
        let url = self.base_url.join(&request.endpoint)?;
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes)?;

        // 非 2xx 不另外處理，回應內容照樣回傳
        if !status.is_success() {
            tracing::debug!("Backend answered {} with a JSON body", status);
        }

        Ok(value)
    }

    /// The resilient fetch: `context` names the operation in the failure log.
    pub async fn fetch(&self, request: &RequestDescriptor, context: &str) -> Option<Value> {
        match self.try_fetch(request).await {
            Ok(value) => Some(value),
            Err(e) => log_failure(context, &e),
        }
    }

    /// GET on a caller-supplied endpoint.
    pub async fn fetch_data(&self, endpoint: &str) -> Option<Value> {
        self.fetch(&RequestDescriptor::get(endpoint), "Error fetching data")
            .await
    }

    pub async fn optimize_route<T>(&self, route_data: &T) -> Option<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post_json(ROUTE_OPTIMIZATION_PATH, route_data, "Error optimizing route")
            .await
    }

    pub async fn get_route_alternatives<T>(&self, route_data: &T) -> Option<Value>
    where
        T: Serialize + ?Sized,
    {
        self.post_json(
            ROUTE_ALTERNATIVES_PATH,
            route_data,
            "Error getting route alternatives",
        )
        .await
    }

    pub async fn get_live_tracking(&self, route_id: &str) -> Option<Value> {
        self.fetch(
            &RequestDescriptor::get(live_tracking_path(route_id)),
            "Error getting live tracking",
        )
        .await
    }

    /// POSTs `{action, ...data}` to the waypoint endpoint.
    pub async fn manage_waypoints(&self, action: &str, data: &Value) -> Option<Value> {
        self.fetch(
            &RequestDescriptor::post(WAYPOINTS_PATH, waypoint_body(action, data)),
            "Error managing waypoints",
        )
        .await
    }

    pub async fn fetch_fuel_prices(&self) -> Option<Value> {
        self.fetch_data(FUEL_PRICES_PATH).await
    }

    async fn post_json<T>(&self, endpoint: &str, data: &T, context: &str) -> Option<Value>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(data) {
            Ok(body) => {
                self.fetch(&RequestDescriptor::post(endpoint, body), context)
                    .await
            }
            Err(e) => log_failure(context, &ApiError::from(e)),
        }
    }
}

#[async_trait::async_trait]
impl FuelPriceSource for WiseRoutesClient {
    async fn fetch_fuel_prices(&self) -> Option<Value> {
        WiseRoutesClient::fetch_fuel_prices(self).await
    }
}

fn log_failure(context: &str, error: &ApiError) -> Option<Value> {
    tracing::error!("❌ {}: {}", context, error);
    None
}
