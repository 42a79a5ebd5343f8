use gloo_console::info;
use travel_planner_lib::brief::TripBrief;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{
    components::{brief_form::BriefForm, header::Header},
    Route,
};

#[function_component]
pub fn HomePage() -> Html {
    let navigator = use_navigator();
    let brief = use_state(TripBrief::default);

    let on_change = {
        let brief = brief.clone();
        Callback::from(move |next: TripBrief| brief.set(next))
    };

    let on_recommend = {
        let brief = brief.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else {
                return;
            };
            info!(format!("Recommending places for {:?}", *brief));
            navigator.push_with_state(&Route::PlaceSelector, (*brief).clone());
        })
    };

    html! {
        <div class="banner-text">
            <Header />
            <BriefForm {on_change} />
            <button onclick={on_recommend} class="btn btn-primary">{"Recommend Places"}</button>
        </div>
    }
}
