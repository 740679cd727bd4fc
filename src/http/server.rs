use anyhow::anyhow;
use log::info;
use rouille::{Request, Response};
use std::path::PathBuf;

use crate::{
    catalog::{self, error::CatalogError},
    config::HttpConfig,
    http::error::ApiError,
    render::Renderer,
    upstream::Upstream,
};

pub struct HttpServer<U, R> {
    upstream: U,
    renderer: R,
    css_dir: PathBuf,
    pub config: HttpConfig,
}

impl<U, R> HttpServer<U, R>
where
    U: Upstream + 'static,
    R: Renderer + 'static,
{
    pub fn new(upstream: U, renderer: R, config: HttpConfig, css_dir: PathBuf) -> Self {
        Self {
            upstream,
            renderer,
            css_dir,
            config,
        }
    }

    /// Blocks serving requests. Only returns if the address cannot be bound.
    pub fn run(self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        let server = rouille::Server::new(addr.as_str(), move |request| {
            self.handle_request(request)
        })
        .map_err(|e| anyhow!("Failed to listen on {addr}: {e}"))?;

        server.run();
        Ok(())
    }

    fn handle_request(&self, request: &Request) -> Response {
        Self::log_request(request);

        let response = if request.method() == "GET" && request.url().starts_with("/css/") {
            self.handle_css(request)
        } else {
            rouille::router!(request,
                (GET) (/) => {
                    Response::redirect_302("/accueil")
                },
                (GET) (/accueil) => {
                    self.handle_listing()
                },
                (GET) (/artist) => {
                    self.handle_artist(request)
                },
                _ => Response::empty_404()
            )
        };

        info!("Response: {} {}", request.method(), response.status_code);
        response
    }

    fn log_request(request: &Request) {
        info!("{} {}", request.method(), request.raw_url());
    }

    fn handle_css(&self, request: &Request) -> Response {
        match request.remove_prefix("/css") {
            Some(asset) => rouille::match_assets(&asset, &self.css_dir),
            None => Response::empty_404(),
        }
    }

    fn listing_page(&self) -> Result<String, CatalogError> {
        let artists = catalog::list_artists(&self.upstream)?;
        Ok(self.renderer.artist_list(&artists)?)
    }

    fn handle_listing(&self) -> Response {
        match self.listing_page() {
            Ok(page) => Response::html(page),
            Err(e) => ApiError::from(e).into_response(&self.renderer),
        }
    }

    /// renders the composite record, nothing is rendered if any fetch fails
    fn detail_page(&self, raw_id: &str) -> Result<String, CatalogError> {
        let detail = catalog::lookup_detail(&self.upstream, raw_id)?;
        Ok(self.renderer.artist_detail(&detail)?)
    }

    fn handle_artist(&self, request: &Request) -> Response {
        let raw_id = request.get_param("id").unwrap_or_default();

        match self.detail_page(&raw_id) {
            Ok(page) => Response::html(page),
            Err(e) => ApiError::from(e).into_response(&self.renderer),
        }
    }
}
