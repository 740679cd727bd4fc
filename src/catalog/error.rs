use thiserror::Error;

use crate::{
    domain::id::ArtistId,
    render::RenderError,
    upstream::{Resource, error::UpstreamError},
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no artist matches id {0:?}")]
    NotFound(String),

    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("upstream returned {resource} for artist {got} when {requested} was requested")]
    Inconsistent {
        requested: ArtistId,
        resource: Resource,
        got: ArtistId,
    },

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
