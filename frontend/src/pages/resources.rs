use crate::components::resource_directory::ResourceDirectory;
use yew::prelude::*;

#[function_component(Resources)]
pub fn resources() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="resources-page">
            <section class="resources-header">
                <h1>{"Explore Resources"}</h1>
                <p>{"Discover 100+ of free tools, courses, and opportunities designed specifically for students"}</p>
            </section>
            <ResourceDirectory />
        </div>
    }
}
