use freetools_core::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryNavProps {
    pub active: Category,
    pub on_select: Callback<Category>,
}

/// One tab per category. Icons only on narrow screens, the label slides out
/// on hover on wide ones.
#[function_component(CategoryNav)]
pub fn category_nav(props: &CategoryNavProps) -> Html {
    html! {
        <nav class="category-nav" aria-label="Resource categories">
            { for Category::ALL.into_iter().map(|category| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(category))
                };
                let active = props.active == category;
                html! {
                    <button
                        key={category.key()}
                        class={classes!("category-tab", active.then_some("active"))}
                        title={category.label()}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        <span class="category-icon">{category.icon()}</span>
                        <span class="category-label">{category.label()}</span>
                    </button>
                }
            }) }
        </nav>
    }
}
