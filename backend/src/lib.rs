pub mod catalog;
pub mod config;
pub mod router;

pub use config::{ConfigError, ServerConfig};
pub use router::build_router;
