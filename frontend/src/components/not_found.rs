use yew::prelude::*;
use yew_router::components::Link;

use crate::{components::header::Header, Route};

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div class="stylecontainer">
            <Header />
            <div class="panel component-container">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Plan a new trip"}</Link<Route>>
            </div>
        </div>
    }
}
