//! Domain logic shared by the site frontend and the static-site server.
//!
//! Nothing in here touches the browser or the network: the catalog model,
//! the directory state machine and the hero animation state machines are
//! plain data so they can be driven from a Yew component or a unit test.

pub mod animation;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod preview;

pub use animation::rotation::WordRotation;
pub use animation::typewriter::{Typewriter, TypewriterPhase};
pub use catalog::{Category, Resource, ResourceCatalog};
pub use directory::{filter_resources, matches_term, CatalogState, DirectoryState, DirectoryView};
pub use error::CatalogError;
pub use preview::TagPreview;

/// Words cycled through by the landing hero.
pub const HERO_WORDS: [&str; 3] = ["Students", "Dreamers", "Makers"];
