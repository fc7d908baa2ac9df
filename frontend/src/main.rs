use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod category_nav;
    pub mod hero_words;
    pub mod resource_card;
    pub mod resource_directory;
}
mod pages {
    pub mod landing;
    pub mod resources;
}
mod utils {
    pub mod api;
}

use pages::landing::Landing;
use pages::resources::Resources;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/resources")]
    Resources,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Resources => html! { <Resources /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
