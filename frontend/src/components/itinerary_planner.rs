use gloo_console::{error, info};
use travel_planner_lib::{
    config::AppConfig,
    itinerary::{stop_image_url, timeline, ItineraryRequest, ItineraryStop},
    selection::ItineraryHandoff,
};
use yew::prelude::*;
use yew_router::hooks::use_location;

use crate::{
    api::{self, FetchGuard},
    components::{
        event_card::{Connector, EventCard},
        header::Header,
        LOADING_IMAGE,
    },
};

#[function_component]
pub fn ItineraryPlanner() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let handoff = use_location().and_then(|location| location.state::<ItineraryHandoff>());
    let selected_places = use_memo(handoff.clone(), |handoff| {
        handoff.as_ref().map(|handoff| handoff.selected_places()).unwrap_or_default()
    });
    let stops = use_state(Vec::<ItineraryStop>::new);
    let loading = use_state(|| true);

    // Generated once per visit, later navigation state changes are ignored
    {
        let config = config.clone();
        let selected_places = selected_places.clone();
        let stops = stops.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let guard = match handoff.as_deref() {
                Some(handoff) if !selected_places.is_empty() => {
                    let request = ItineraryRequest::new(&selected_places, &handoff.brief);
                    info!(format!("Requesting itinerary for {} places", selected_places.len()));
                    Some(FetchGuard::spawn(
                        move |signal| api::get_itinerary(config, request, signal),
                        move |result| {
                            match result {
                                Ok(plan) => {
                                    info!(format!("Itinerary has {} stops", plan.len()));
                                    stops.set(plan);
                                }
                                Err(err) => error!(format!("Error fetching event plan: {err}")),
                            }
                            loading.set(false);
                        },
                    ))
                }
                _ => {
                    info!("No selected places or trip brief, skipping itinerary generation");
                    loading.set(false);
                    None
                }
            };
            move || drop(guard)
        });
    }

    html! {
        <div class="event-planner-container">
            <Header sticky={true} show_languages={false} />
            <div class="event-planner-content">
                if *loading {
                    <div class="loading-container">
                        <img src={LOADING_IMAGE} alt="Loading..." class="loading-animation" />
                    </div>
                } else {
                    <div class="itinerary-container">
                        <h2 class="itinerary-title">{"Your Travel Itinerary"}</h2>
                        if stops.is_empty() {
                            <p class="itinerary-empty">{"No itinerary to show."}</p>
                        }
                        <div class="itinerary-timeline">
                            { for timeline(&stops).into_iter().map(|entry| html! {
                                <div key={entry.position} class="itinerary-item">
                                    <div class="event-card-wrapper">
                                        <EventCard
                                            stop={entry.stop.clone()}
                                            position={entry.position}
                                            image={stop_image_url(entry.stop, &selected_places, &config)}
                                        />
                                    </div>
                                    if entry.connector {
                                        <Connector position={entry.position} />
                                    }
                                </div>
                            }) }
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
