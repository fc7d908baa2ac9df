use thiserror::Error;

/// Every way the catalog document can fail to become available.
///
/// The UI treats all of them the same (it keeps showing the loading state),
/// the variants only exist so the log line says what actually went wrong.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to fetch catalog: {0}")]
    Fetch(String),
    #[error("Catalog request returned status {0}")]
    Status(u16),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}
