use components::{
    home_page::HomePage, itinerary_planner::ItineraryPlanner, not_found::NotFound,
    place_selector::PlaceSelector,
};
use gloo_console::{error, info};
use travel_planner_lib::config::AppConfig;
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

mod api;
mod components;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/place-selector")]
    PlaceSelector,
    #[at("/event-planner")]
    EventPlanner,
    #[not_found]
    #[at("/404")]
    Invalid,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::PlaceSelector => html! { <PlaceSelector /> },
        Route::EventPlanner => html! { <ItineraryPlanner /> },
        Route::Invalid => {
            error!("Invalid route");
            html! { <NotFound /> }
        }
    }
}

struct Model {
    config: AppConfig,
}

impl Component for Model {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        // Baked in at build time, e.g. `MAPS_API_KEY=... trunk build`
        let config = AppConfig::new(
            option_env!("TRAVELMATE_API_BASE").unwrap_or_default(),
            option_env!("MAPS_API_KEY").unwrap_or_default(),
        );

        if config.maps_api_key.is_empty() {
            error!("MAPS_API_KEY was not set at build time, photos and maps will not load");
        }
        info!(format!("Backend endpoint: {}", config.endpoint("/api")));

        Self { config }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<AppConfig> context={self.config.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<AppConfig>>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
