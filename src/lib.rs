use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod plans;
pub mod components {
    pub mod icons;
    pub mod paywall_sheet;
    pub mod plan_card;
    pub mod sheet_state;
    pub mod trust_footer;
}
pub mod pages {
    pub mod screen;
}

use pages::screen::Screen;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Screen /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
