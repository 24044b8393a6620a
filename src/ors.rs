//! OpenRouteService HTTP adapter for two-point driving routes.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::models::Coordinates;
use crate::polyline::{self, Polyline};
use crate::traits::RouteProvider;

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub profile: String,
    /// Sent as the Authorization header, as the hosted service expects.
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            profile: "driving-car".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

/// The provider encodes points longitude-first; every conversion from the
/// internal latitude-first order happens here and nowhere else.
fn lng_first(point: Coordinates) -> [f64; 2] {
    [point.lng, point.lat]
}

impl RouteProvider for OrsClient {
    fn route_between(&self, from: Coordinates, to: Coordinates) -> Polyline {
        let url = format!(
            "{}/v2/directions/{}",
            self.config.base_url, self.config.profile
        );
        let body = json!({ "coordinates": [lng_first(from), lng_first(to)] });

        debug!(%url, "requesting route");
        let response = self
            .client
            .post(url)
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OrsDirectionsResponse>());

        let geometry = match response {
            Ok(body) => body.routes.into_iter().next().map(|route| route.geometry),
            Err(err) => {
                warn!(error = %err, "route request failed");
                None
            }
        };

        let Some(geometry) = geometry else {
            return Polyline::empty();
        };

        match polyline::decode(&geometry) {
            Ok(route) => route,
            Err(err) => {
                warn!(?err, "undecodable route geometry");
                Polyline::empty()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrsDirectionsResponse {
    #[serde(default)]
    routes: Vec<OrsRoute>,
}

#[derive(Debug, Deserialize)]
struct OrsRoute {
    geometry: String,
}
