use crate::{Config, FetchError, WeatherSnapshot, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the WeatherAPI.com provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, FetchError> {
    provider_with_key(config, config.resolve_api_key())
}

fn provider_with_key(
    config: &Config,
    api_key: Option<String>,
) -> Result<Box<dyn WeatherProvider>, FetchError> {
    let api_key = api_key.ok_or(FetchError::MissingApiKey)?;
    let provider = WeatherApiProvider::new(api_key, config.base_url(), config.timeout())?;
    Ok(Box::new(provider))
}
