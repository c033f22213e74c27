use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod navigation;
mod portfolio;
mod slider;
mod theme;
mod components {
    pub mod icon;
    pub mod in_view;
    pub mod nav;
    pub mod before_after;
    pub mod testimonial;
    pub mod section_heading;
    pub mod scroll_progress;
}
mod pages {
    pub mod studio;
    pub mod academy;
    pub mod not_found;
}

use pages::{
    studio::Studio,
    academy::Academy,
    not_found::NotFound,
};
use theme::GlobalStyle;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Studio,
    #[at("/academie")]
    Academy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Studio => {
            info!("Rendering Studio page");
            html! { <Studio /> }
        },
        Route::Academy => {
            info!("Rendering Academy page");
            html! { <Academy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyle />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
