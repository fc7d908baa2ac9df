use std::rc::Rc;

use crate::catalog::{Category, Resource, ResourceCatalog};

/// Where the one-shot catalog load currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Pending,
    Ready(Rc<ResourceCatalog>),
    /// The load failed. The reason is kept for logging only.
    Unavailable(String),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&ResourceCatalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog.as_ref()),
            CatalogState::Pending | CatalogState::Unavailable(_) => None,
        }
    }
}

/// What the resource grid should show for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryView<'a> {
    /// Catalog not loaded yet. A failed load stays here as well.
    Loading,
    NoResults,
    Results(Vec<&'a Resource>),
}

/// Client-visible state of the resource directory: the loaded catalog, the
/// active category tab and the free-text search term.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    catalog: CatalogState,
    active_category: Category,
    search_term: String,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Switches tabs. The search term carries over to the new category.
    pub fn select_category(&mut self, category: Category) {
        self.active_category = category;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn catalog_loaded(&mut self, catalog: ResourceCatalog) {
        self.catalog = CatalogState::Ready(Rc::new(catalog));
    }

    pub fn catalog_failed(&mut self, reason: impl Into<String>) {
        // A failure never replaces data that already arrived.
        if !matches!(self.catalog, CatalogState::Ready(_)) {
            self.catalog = CatalogState::Unavailable(reason.into());
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.catalog().is_some()
    }

    /// Resources of the active category that match the search term.
    pub fn visible(&self) -> Vec<&Resource> {
        filter_resources(self.catalog.catalog(), self.active_category, &self.search_term)
    }

    pub fn view(&self) -> DirectoryView<'_> {
        if !self.is_loaded() {
            return DirectoryView::Loading;
        }
        let visible = self.visible();
        if visible.is_empty() {
            DirectoryView::NoResults
        } else {
            DirectoryView::Results(visible)
        }
    }
}

/// Case-insensitive substring match against name, description or any tag.
/// An empty term matches everything.
pub fn matches_term(resource: &Resource, term: &str) -> bool {
    let needle = term.to_lowercase();
    matches_lowercase(resource, &needle)
}

fn matches_lowercase(resource: &Resource, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    resource.name.to_lowercase().contains(needle)
        || resource.description.to_lowercase().contains(needle)
        || resource
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// The candidate list for `category` narrowed down to resources matching
/// `term`, in catalog order. No catalog means no candidates.
pub fn filter_resources<'a>(
    catalog: Option<&'a ResourceCatalog>,
    category: Category,
    term: &str,
) -> Vec<&'a Resource> {
    let Some(catalog) = catalog else {
        return Vec::new();
    };
    let needle = term.to_lowercase();
    catalog
        .resources(category)
        .iter()
        .filter(|resource| matches_lowercase(resource, &needle))
        .collect()
}
