use thiserror::Error;

/// Everything that can go wrong while fetching a snapshot.
///
/// The `Display` text is what the page shows in its error branch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No API key configured. Run `weather-page configure` or set WEATHERAPI_KEY.")]
    MissingApiKey,

    /// Transport failure. The request URL carries the API key, so it is
    /// stripped before the error is stored.
    #[error("Failed to load data: {0}")]
    Request(reqwest::Error),

    /// Upstream answered with a non-success status. `message` is the upstream
    /// error text when it sent one, otherwise a truncated body.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from weather service: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.without_url())
    }
}
