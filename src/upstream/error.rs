use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("failed to read response from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("unexpected JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}
