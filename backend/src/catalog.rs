use freetools_core::{CatalogError, Category, ResourceCatalog};
use std::path::Path;

pub async fn load_catalog(path: &Path) -> Result<ResourceCatalog, CatalogError> {
    let bytes = tokio::fs::read(path).await?;
    ResourceCatalog::from_json_slice(&bytes)
}

/// Parses the catalog once at startup so a broken file shows up in the
/// server log instead of only as a stuck loading screen in the browser.
///
/// The file is still served as-is either way.
pub async fn check_catalog(path: &Path) -> Option<ResourceCatalog> {
    match load_catalog(path).await {
        Ok(catalog) => {
            for category in Category::ALL {
                tracing::info!(
                    category = %category,
                    count = catalog.resources(category).len(),
                    "Catalog category loaded"
                );
            }
            tracing::info!("Catalog {} has {} resources", path.display(), catalog.total());
            Some(catalog)
        }
        Err(e) => {
            tracing::error!("CatalogUnavailable: {} ({})", e, path.display());
            None
        }
    }
}
