//! Blocking HTTP client for the upstream JSON API

use log::debug;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::UpstreamConfig,
    domain::{
        artist::{Artist, DateSet, LocationSet, RelationSet},
        id::ArtistId,
    },
    upstream::{ARTISTS_PATH, Resource, Upstream, error::UpstreamError},
};

pub struct HttpUpstream {
    client: Client,
    base_url: String,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// One GET, body buffered in full before decoding.
    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|source| UpstreamError::Transport {
                url: url.clone(),
                source,
            })?;

        let body = response.bytes().map_err(|source| UpstreamError::Body {
            url: url.clone(),
            source,
        })?;
        debug!("GET {url} -> {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { url, source })
    }
}

impl Upstream for HttpUpstream {
    fn artists(&self) -> Result<Vec<Artist>, UpstreamError> {
        self.fetch(ARTISTS_PATH)
    }

    fn locations(&self, id: ArtistId) -> Result<LocationSet, UpstreamError> {
        self.fetch(&Resource::Locations.path(id))
    }

    fn dates(&self, id: ArtistId) -> Result<DateSet, UpstreamError> {
        self.fetch(&Resource::Dates.path(id))
    }

    fn relation(&self, id: ArtistId) -> Result<RelationSet, UpstreamError> {
        self.fetch(&Resource::Relation.path(id))
    }
}
