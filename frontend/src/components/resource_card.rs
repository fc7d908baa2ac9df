use freetools_core::{Resource, TagPreview};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResourceCardProps {
    pub resource: Resource,
}

#[function_component(ResourceCard)]
pub fn resource_card(props: &ResourceCardProps) -> Html {
    let resource = &props.resource;
    // A broken icon only hides itself, the rest of the card renders as usual.
    let icon_failed = use_state(|| false);

    let icon = match resource.icon_url() {
        Some(url) if !*icon_failed => {
            let onerror = {
                let icon_failed = icon_failed.clone();
                Callback::from(move |_: Event| icon_failed.set(true))
            };
            html! {
                <div class="resource-icon">
                    <img src={url.to_string()} alt={resource.name.clone()} {onerror} />
                </div>
            }
        }
        _ => html! {},
    };

    let preview = TagPreview::new(&resource.tags, TagPreview::DEFAULT_LIMIT);
    let more = match preview.overflow_label() {
        Some(label) => html! { <span class="resource-tag resource-tag-more">{label}</span> },
        None => html! {},
    };

    html! {
        <div class="resource-card">
            {icon}
            <h3 class="resource-name">{resource.name.clone()}</h3>
            <div class="resource-value">
                <span class="glass-pill">{resource.value.clone()}</span>
            </div>
            <p class="resource-description">{resource.description.clone()}</p>
            <div class="resource-tags">
                { for preview.shown.iter().map(|tag| html! {
                    <span class="resource-tag">{tag.clone()}</span>
                }) }
                {more}
            </div>
            <div class="resource-apply">
                <a
                    class="glass-pill claim-link"
                    href={resource.apply_link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Claim Now"}
                </a>
            </div>
        </div>
    }
}
