use std::fmt::Display;

use crate::domain::{
    artist::{Artist, DateSet, LocationSet, RelationSet},
    id::ArtistId,
};

pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod stub;

use error::UpstreamError;

pub const ARTISTS_PATH: &str = "/artists";

/// Read-only source of artist records.
///
/// Every call hits the source again; implementations keep no cache.
pub trait Upstream: Send + Sync {
    fn artists(&self) -> Result<Vec<Artist>, UpstreamError>;

    fn locations(&self, id: ArtistId) -> Result<LocationSet, UpstreamError>;

    fn dates(&self, id: ArtistId) -> Result<DateSet, UpstreamError>;

    fn relation(&self, id: ArtistId) -> Result<RelationSet, UpstreamError>;
}

/// Per-artist resources fetched after the artist itself is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Locations,
    Dates,
    Relation,
}

impl Resource {
    pub fn path(self, id: ArtistId) -> String {
        format!("/{self}/{id}")
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            Resource::Relation => "relation",
        };
        write!(f, "{name}")
    }
}
