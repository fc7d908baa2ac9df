use std::cell::Cell;
use std::rc::Rc;

use freetools_core::{Category, DirectoryState, DirectoryView, ResourceCatalog};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::category_nav::CategoryNav;
use crate::components::resource_card::ResourceCard;
use crate::utils::api;

pub enum DirectoryAction {
    SelectCategory(Category),
    Search(String),
    Loaded(ResourceCatalog),
    Failed(String),
}

#[derive(Default, PartialEq)]
pub struct DirectoryModel(pub DirectoryState);

impl Reducible for DirectoryModel {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            DirectoryAction::SelectCategory(category) => state.select_category(category),
            DirectoryAction::Search(term) => state.set_search_term(term),
            DirectoryAction::Loaded(catalog) => state.catalog_loaded(catalog),
            DirectoryAction::Failed(reason) => state.catalog_failed(reason),
        }
        Rc::new(DirectoryModel(state))
    }
}

/// Search bar, category tabs and the resource grid.
///
/// The catalog is fetched once when the component mounts. A failed fetch is
/// logged and the grid keeps showing the loading message.
#[function_component(ResourceDirectory)]
pub fn resource_directory() -> Html {
    let directory = use_reducer(DirectoryModel::default);

    {
        let directory = directory.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                let still_mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::fetch_catalog().await;
                    if !still_mounted.get() {
                        return;
                    }
                    match result {
                        Ok(catalog) => {
                            gloo_console::log!(format!("Loaded {} resources", catalog.total()));
                            directory.dispatch(DirectoryAction::Loaded(catalog));
                        }
                        Err(e) => {
                            gloo_console::error!(format!("Error loading resources: {}", e));
                            directory.dispatch(DirectoryAction::Failed(e.to_string()));
                        }
                    }
                });
                move || mounted.set(false)
            },
            (),
        );
    }

    let on_select = {
        let directory = directory.clone();
        Callback::from(move |category: Category| {
            directory.dispatch(DirectoryAction::SelectCategory(category));
        })
    };

    let oninput = {
        let directory = directory.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            directory.dispatch(DirectoryAction::Search(input.value()));
        })
    };

    let state = &directory.0;
    let body = match state.view() {
        DirectoryView::Loading => html! {
            <div class="directory-status">{"Loading resources..."}</div>
        },
        DirectoryView::NoResults => html! {
            <div class="directory-status">{"No resources found matching your search."}</div>
        },
        DirectoryView::Results(resources) => html! {
            <div class="resource-grid">
                { for resources.into_iter().map(|resource| html! {
                    <ResourceCard
                        key={format!("{}|{}", resource.name, resource.apply_link)}
                        resource={resource.clone()}
                    />
                }) }
            </div>
        },
    };

    html! {
        <div class="resource-directory">
            <style>{DIRECTORY_CSS}</style>
            <CategoryNav active={state.active_category()} {on_select} />
            <div class="directory-main">
                <div class="directory-search">
                    <input
                        type="text"
                        placeholder="Search resources..."
                        value={state.search_term().to_string()}
                        {oninput}
                    />
                    <span class="directory-search-icon">{"🔍"}</span>
                </div>
                {body}
            </div>
        </div>
    }
}

const DIRECTORY_CSS: &str = r#"
    .resource-directory {
        position: relative;
    }
    .category-nav {
        position: fixed;
        left: 1rem;
        top: 47vh;
        transform: translateY(-50%);
        z-index: 20;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        padding: 0.75rem;
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.15);
        backdrop-filter: blur(15px);
        -webkit-backdrop-filter: blur(15px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 12px 28px rgba(0, 0, 0, 0.12);
    }
    .category-tab {
        display: flex;
        align-items: center;
        width: 3rem;
        height: 3rem;
        padding-left: 0.75rem;
        overflow: hidden;
        white-space: nowrap;
        border-radius: 0.75rem;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(255, 255, 255, 0.5);
        cursor: pointer;
        transition: width 0.3s ease-out, background 0.3s;
    }
    .category-tab:hover {
        width: 16rem;
        background: rgba(255, 255, 255, 1);
    }
    .category-tab.active {
        background: rgba(255, 255, 255, 0.8);
        border-color: rgba(255, 255, 255, 0.6);
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.12);
    }
    .category-icon {
        min-width: 24px;
        font-size: 1.125rem;
        text-align: center;
    }
    .category-label {
        margin-left: 0.75rem;
        opacity: 0;
        transition: opacity 0.3s;
    }
    .category-tab:hover .category-label {
        opacity: 1;
    }
    .directory-main {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1rem 5rem 5rem;
    }
    .directory-search {
        position: relative;
        max-width: 28rem;
        margin: 0 auto 3rem;
    }
    .directory-search input {
        width: 100%;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        border: 1px solid #d1d5db;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .directory-search-icon {
        position: absolute;
        right: 0.75rem;
        top: 50%;
        transform: translateY(-50%);
    }
    .resource-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
        gap: 1.5rem;
    }
    .resource-card {
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        border-radius: 1rem;
        border: 1px solid #e5e7eb;
        background: #fff;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        transition: transform 0.15s;
    }
    .resource-card:hover {
        transform: translateY(-5px) scale(1.02);
    }
    .resource-icon img {
        width: 3rem;
        height: 3rem;
        object-fit: contain;
        border-radius: 0.5rem;
        margin-bottom: 1rem;
    }
    .resource-description {
        flex-grow: 1;
        display: -webkit-box;
        -webkit-line-clamp: 3;
        -webkit-box-orient: vertical;
        overflow: hidden;
        color: #4b5563;
        font-size: 0.875rem;
    }
    .resource-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }
    .resource-tag {
        padding: 0.25rem 0.5rem;
        border-radius: 9999px;
        font-size: 0.75rem;
        border: 1px solid rgba(0, 0, 0, 0.08);
        color: #4b5563;
    }
    .glass-pill {
        display: inline-block;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.15);
        border: 1px solid rgba(255, 255, 255, 0.3);
        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
        color: #374151;
    }
    .claim-link {
        display: flex;
        justify-content: center;
        margin-top: auto;
        text-decoration: none;
    }
    .directory-status {
        padding: 5rem 0;
        text-align: center;
        font-size: 1.25rem;
        color: #4b5563;
    }
    @media (max-width: 768px) {
        .category-nav {
            top: auto;
            bottom: 1rem;
            left: 50%;
            transform: translateX(-50%);
            flex-direction: row;
            z-index: 100;
        }
        .category-tab:hover {
            width: 3rem;
        }
        .category-label {
            display: none;
        }
        .directory-main {
            padding: 0 1rem 6rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(model: Rc<DirectoryModel>, action: DirectoryAction) -> Rc<DirectoryModel> {
        Reducible::reduce(model, action)
    }

    #[test]
    fn actions_drive_directory_state() {
        let model = Rc::new(DirectoryModel::default());
        let model = reduce(model, DirectoryAction::Search("mentor".to_string()));
        let model = reduce(model, DirectoryAction::SelectCategory(Category::InternshipsAndMentorship));
        assert_eq!(model.0.search_term(), "mentor");
        assert_eq!(model.0.view(), DirectoryView::Loading);

        let catalog = ResourceCatalog::from_json_str(
            r#"{"internships_and_mentorship": [{"Program Name": "Mentor Match", "Apply Link": "https://example.com"}]}"#,
        )
        .unwrap();
        let model = reduce(model, DirectoryAction::Loaded(catalog));
        assert_eq!(model.0.visible().len(), 1);
    }

    #[test]
    fn failed_load_keeps_loading_view() {
        let model = reduce(
            Rc::new(DirectoryModel::default()),
            DirectoryAction::Failed("Catalog request returned status 404".to_string()),
        );
        assert_eq!(model.0.view(), DirectoryView::Loading);
    }
}
