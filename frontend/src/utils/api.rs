use freetools_core::{CatalogError, ResourceCatalog};
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;

use crate::config;

/// Read-only client for the static site data.
pub struct Api;

/// Request wrapper that resolves paths against the configured backend URL
/// and logs failed responses.
pub struct RequestWrapper {
    request: Request,
    path: String,
}

impl RequestWrapper {
    fn new(path: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        Self {
            request: Request::get(&full_url),
            path: path.to_string(),
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        let response = self.request.send().await?;
        if !response.ok() {
            gloo_console::log!(format!(
                "GET {} returned status {}",
                self.path,
                response.status()
            ));
        }
        Ok(response)
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path)
    }
}

/// One read of the catalog document. Any failure along the way becomes a
/// `CatalogError`; the caller decides what the user sees.
pub async fn fetch_catalog() -> Result<ResourceCatalog, CatalogError> {
    let response = Api::get(config::catalog_path())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Fetch(e.to_string()))?;
    ResourceCatalog::from_json_str(&body)
}
