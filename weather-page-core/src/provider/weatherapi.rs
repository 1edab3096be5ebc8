use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{FetchError, WeatherSnapshot};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { api_key, base_url: base_url.to_string(), http })
    }

    fn current_url(&self) -> String {
        format!("{}/current.json", self.base_url)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    #[instrument(skip(self))]
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        let res = self
            .http
            .get(self.current_url())
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "weatherapi responded");

        parse_current(status.as_u16(), &body)
    }
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaError,
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

/// Turn a `current.json` response into a snapshot or a user-facing error.
pub(crate) fn parse_current(status: u16, body: &str) -> Result<WeatherSnapshot, FetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<WaErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                format!("Weather request failed with status {status}: {}", truncate_body(body))
            });
        return Err(FetchError::Status { status, message });
    }

    Ok(serde_json::from_str(body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
