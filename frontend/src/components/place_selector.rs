use gloo_console::{error, info};
use travel_planner_lib::{
    brief::TripBrief,
    config::AppConfig,
    place::Place,
    selection::PlaceSelection,
};
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};

use crate::{
    api::{self, FetchGuard},
    components::{
        alert,
        header::Header,
        LOADING_IMAGE,
        modal::Modal,
        place_card::{PlaceCard, RATING_ICON},
    },
    Route,
};

#[function_component]
pub fn PlaceSelector() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigator = use_navigator();
    let brief = use_location().and_then(|location| location.state::<TripBrief>());
    let selection = use_state(PlaceSelection::default);
    let loading = use_state(|| brief.is_some());
    let details = use_state(|| None::<Place>);

    {
        let config = config.clone();
        let selection = selection.clone();
        let loading = loading.clone();
        use_effect_with(brief.clone(), move |brief| {
            let guard = match brief.clone() {
                Some(brief) => {
                    info!(format!("Fetching places for {}", brief.destination));
                    Some(FetchGuard::spawn(
                        move |signal| api::get_top_places(config, (*brief).clone(), signal),
                        move |result| {
                            match result {
                                Ok(places) => {
                                    info!(format!("Places fetched: {}", places.len()));
                                    selection.set(PlaceSelection::new(places));
                                }
                                Err(err) => error!(format!("Error fetching places: {err}")),
                            }
                            loading.set(false);
                        },
                    ))
                }
                None => {
                    info!("No trip brief in navigation state, nothing to fetch");
                    None
                }
            };
            move || drop(guard)
        });
    }

    let on_toggle = {
        let selection = selection.clone();
        move |place_id: String| {
            let selection = selection.clone();
            Callback::from(move |()| {
                let mut next = (*selection).clone();
                next.toggle(&place_id);
                selection.set(next);
            })
        }
    };

    let on_details = {
        let details = details.clone();
        move |place: Place| {
            let details = details.clone();
            Callback::from(move |()| details.set(Some(place.clone())))
        }
    };

    let close_details = {
        let details = details.clone();
        Callback::from(move |()| details.set(None))
    };

    let on_advance = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let brief = brief.as_deref().cloned().unwrap_or_default();
            match selection.handoff(brief) {
                Ok(handoff) => {
                    info!(format!("Selected places: {:?}", handoff.selected_ids));
                    if let Some(navigator) = &navigator {
                        navigator.push_with_state(&Route::EventPlanner, handoff);
                    }
                }
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    let nothing_selected = !selection.has_selection();

    html! {
        <div class="stylecontainer">
            <Header show_languages={false} />
            <main class="places-list">
                if *loading {
                    <img src={LOADING_IMAGE} alt="Loading..." class="loading-animation" />
                } else {
                    <div class="card-container">
                        if selection.places().is_empty() {
                            <p>{"No places found."}</p>
                        } else {
                            { for selection.places().iter().map(|place| html! {
                                <PlaceCard
                                    key={place.place_id.clone()}
                                    title={place.name.clone()}
                                    description={place.formatted_address.clone()}
                                    rating={place.rating_label()}
                                    image={config.place_photo_url(place)}
                                    selected={place.selected}
                                    on_select={on_toggle(place.place_id.clone())}
                                    on_details={on_details(place.clone())}
                                />
                            }) }
                        }
                    </div>
                }

                <Modal open={details.is_some()} on_close={close_details}>
                    if let Some(place) = &*details {
                        <PlaceDetails place={place.clone()} />
                    }
                </Modal>

                <div class="event-planner-section">
                    <button
                        class={classes!("event-planner-btn", nothing_selected.then_some("disabled"))}
                        onclick={on_advance}
                        disabled={nothing_selected}
                    >
                        {"Itinerary Planner"}
                    </button>
                </div>
            </main>
        </div>
    }
}

#[derive(PartialEq, Properties, Clone)]
struct PlaceDetailsProps {
    place: Place,
}

#[function_component]
fn PlaceDetails(props: &PlaceDetailsProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let place = &props.place;
    let rated_by = place
        .user_ratings_total
        .map_or_else(|| "an unknown number of".to_owned(), |total| total.to_string());

    html! {
        <div class="place-details">
            <h2><b>{place.name.clone()}</b></h2>
            <p><b>{"Address: "}</b>{place.formatted_address.clone()}</p>
            <div class="rating">
                <p>{format!("Rated {}/5", place.rating_label())}</p>
                <img class="rating-icon" src={RATING_ICON} />
                <p>{format!(" by {rated_by} people.")}</p>
            </div>
            <p>{format!("Known For: {}", place.types.join(", "))}</p>
            <iframe
                width="450"
                height="300"
                frameborder="0"
                referrerpolicy="no-referrer-when-downgrade"
                src={config.map_embed_url(&place.formatted_address)}
                allowfullscreen=true
            />
        </div>
    }
}
