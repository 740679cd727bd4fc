use log::error;
use rouille::Response;

use crate::{catalog::error::CatalogError, render::Renderer};

#[derive(Debug)]
pub enum ApiError {
    /// Carries the id as it appeared in the request.
    NotFound(String),
    Internal(String),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => ApiError::NotFound(id),

            CatalogError::Upstream(_)
            | CatalogError::Inconsistent { .. }
            | CatalogError::Render(_)
            | CatalogError::Internal(_) => {
                error!("{err}");
                ApiError::Internal("500 Internal Server Error".into())
            }
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            // served as a normal page
            ApiError::NotFound(_) => 200,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_response(self, renderer: &impl Renderer) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound(id) => match renderer.not_found(&id) {
                Ok(page) => Response::html(page).with_status_code(status),
                Err(e) => ApiError::from(CatalogError::from(e)).into_response(renderer),
            },

            ApiError::Internal(msg) => Response::text(msg).with_status_code(status),
        }
    }
}
