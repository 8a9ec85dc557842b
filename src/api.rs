use std::ops::RangeInclusive;
use std::sync::Arc;

use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::model::WeatherModel;
use crate::state::WeatherCell;

pub const DEFAULT_BASE_URL: &str = "https://proxyman-weather-api.herokuapp.com";

/// Identifiers the weather API serves; the caller picks one at random.
pub const CITY_IDS: RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server returned {0}")]
    Status(StatusCode),

    #[error("malformed weather payload: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("citywx")
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues one GET for the given city and resolves to the parsed snapshot.
    ///
    /// No retries and no cancellation; timeouts are whatever the client
    /// defaults to.
    pub async fn fetch_weather(&self, city_id: u8) -> Result<WeatherModel, FetchError> {
        let url = format!("{}/api/v1/weather/{}", self.base_url, city_id);
        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response.json().await.map_err(FetchError::Decode)
    }
}

/// Runs a fetch in the background and publishes its outcome to the cell.
///
/// A failed fetch never touches the model; the cell keeps the last-known-good
/// snapshot and only the phase reports the failure. Concurrent fetches are
/// allowed, and whichever completes last owns the cell.
pub fn spawn_fetch(
    client: Arc<WeatherClient>,
    cell: WeatherCell,
    city_id: u8,
) -> JoinHandle<()> {
    cell.begin();
    tokio::spawn(async move {
        match client.fetch_weather(city_id).await {
            Ok(model) => {
                info!(city_id, ?model, "weather fetch succeeded");
                cell.complete(model);
            }
            Err(err) => {
                warn!(city_id, %err, "weather fetch failed");
                cell.fail(err.to_string());
            }
        }
    })
}
