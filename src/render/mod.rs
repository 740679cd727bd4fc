use std::path::PathBuf;

use thiserror::Error;

use crate::domain::artist::{Artist, DetailRecord};

pub mod html;
pub mod templates;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template {template} is missing marker {{{{{marker}}}}}")]
    MissingMarker {
        template: &'static str,
        marker: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template {template} uses unknown marker {{{{{marker}}}}}")]
    UnknownMarker {
        template: &'static str,
        marker: String,
    },
}

/// Turns fetched records into HTML pages.
pub trait Renderer: Send + Sync {
    fn artist_list(&self, artists: &[Artist]) -> Result<String, RenderError>;

    fn artist_detail(&self, detail: &DetailRecord) -> Result<String, RenderError>;

    /// Page shown when `requested` does not resolve to an artist.
    fn not_found(&self, requested: &str) -> Result<String, RenderError>;
}
