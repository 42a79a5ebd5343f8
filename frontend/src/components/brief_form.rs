use chrono::{Local, NaiveDate};
use gloo_console::{error, info};
use gloo_events::EventListener;
use travel_planner_lib::{
    brief::{BriefDraft, BriefEdit, BriefError, TripBrief},
    config::AppConfig,
    destination::{suggest, Suggestion},
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, Node};
use yew::prelude::*;

use crate::{
    api::{self, FetchGuard},
    components::flex_cards::FlexCards,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    /// Receives the whole brief after every edit
    pub on_change: Callback<TripBrief>,
}

#[function_component]
pub fn BriefForm(props: &Props) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let draft = use_state(BriefDraft::default);
    let known_destinations = use_state(Vec::<String>::new);
    let show_dropdown = use_state(|| false);
    let destination_area = use_node_ref();
    let today = Local::now().date_naive();

    {
        let known_destinations = known_destinations.clone();
        use_effect_with((), move |_| {
            let guard = FetchGuard::spawn(
                move |signal| api::get_known_destinations(config, signal),
                move |result| match result {
                    Ok(destinations) => {
                        info!(format!("Fetched {} destinations", destinations.len()));
                        known_destinations.set(destinations);
                    }
                    Err(err) => {
                        error!(format!("Error fetching destinations: {err}"));
                        known_destinations.set(Vec::new());
                    }
                },
            );
            move || drop(guard)
        });
    }

    // Close the suggestions on any click outside the destination area
    {
        let show_dropdown = show_dropdown.clone();
        let destination_area = destination_area.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo_utils::document(), "mousedown", move |event| {
                let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                let inside = match (destination_area.cast::<Node>(), target) {
                    (Some(area), Some(target)) => area.contains(Some(&target)),
                    _ => false,
                };
                if !inside {
                    show_dropdown.set(false);
                }
            });
            move || drop(listener)
        });
    }

    let edit = {
        let draft = draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |edit: BriefEdit| {
            let mut next = (*draft).clone();
            match next.apply(edit, today) {
                Ok(()) => {
                    on_change.emit(next.brief());
                    draft.set(next);
                }
                Err(err) => info!(format!("Ignored edit: {err}")),
            }
        })
    };

    let on_destination_input = {
        let edit = edit.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            show_dropdown.set(true);
            edit.emit(BriefEdit::Destination(input.value()));
        })
    };

    let on_destination_focus = {
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |_: FocusEvent| show_dropdown.set(true))
    };

    // A rejected date stays out of the draft, so the picker is reset to the draft's value
    let date_input = |make: fn(Option<NaiveDate>) -> BriefEdit, shown: fn(&BriefDraft) -> Option<NaiveDate>| {
        let draft = draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let date = NaiveDate::parse_from_str(&input.value(), DATE_FORMAT).ok();
            match apply_date_edit(&draft, make(date), today, shown) {
                Ok(next) => {
                    on_change.emit(next.brief());
                    draft.set(next);
                }
                Err((err, restore)) => {
                    info!(format!("Ignored edit: {err}"));
                    input.set_value(&restore);
                }
            }
        })
    };

    let pick = |suggestion: Suggestion| {
        let edit = edit.clone();
        let show_dropdown = show_dropdown.clone();
        Callback::from(move |_: MouseEvent| {
            edit.emit(BriefEdit::PickSuggestion(suggestion.clone()));
            show_dropdown.set(false);
        })
    };

    let suggestions = suggest(&known_destinations, &draft.destination);
    let departure = format_date(draft.departure_date);
    let min_return = draft.min_return_date(today).format(DATE_FORMAT).to_string();

    html! {
        <div class="form-section">
            <div class="form-content">
                <h1 class="form-title">{"Travel Discover"}</h1>
                <p class="form-description">
                    {"If you are looking for inspiration and authentic holiday experiences \
                      tailored to your needs, you've come to the right place."}
                </p>
                <div>
                    <label for="source" class="Form-label">{"Source Location"}</label>
                    <input
                        type="text"
                        id="source"
                        class="Form-input"
                        placeholder="Enter the Source"
                        value={draft.source.clone()}
                        oninput={text_input(&edit, BriefEdit::Source)}
                    />
                </div>
                <div class="destination-container" ref={destination_area}>
                    <label for="destination" class="Form-label">{"Destination Location"}</label>
                    <input
                        type="text"
                        id="destination"
                        class="Form-input"
                        placeholder="Enter the Destination"
                        autocomplete="off"
                        value={draft.destination.clone()}
                        oninput={on_destination_input}
                        onfocus={on_destination_focus}
                    />
                    if *show_dropdown && !suggestions.is_empty() {
                        <div class="destination-dropdown">
                            { for suggestions.into_iter().enumerate().map(|(index, suggestion)| html! {
                                <div
                                    key={index}
                                    class={classes!("dropdown-item", suggestion.is_custom().then_some("custom"))}
                                    onclick={pick(suggestion.clone())}
                                >
                                    {suggestion.label().to_owned()}
                                </div>
                            }) }
                        </div>
                    }
                    if draft.custom_mode {
                        <div class="custom-destination">
                            <label for="customDestination" class="Form-label">{"Custom Destination"}</label>
                            <input
                                type="text"
                                id="customDestination"
                                class="Form-input"
                                placeholder="Enter your custom destination"
                                value={draft.custom_destination.clone()}
                                oninput={text_input(&edit, BriefEdit::CustomDestination)}
                            />
                        </div>
                    }
                </div>
                <div>
                    <label for="departureDate" class="Form-label">{"Departure Date"}</label>
                    <input
                        type="date"
                        id="departureDate"
                        class="Form-input"
                        min={today.format(DATE_FORMAT).to_string()}
                        value={departure}
                        oninput={date_input(BriefEdit::DepartureDate, |draft| draft.departure_date)}
                    />
                </div>
                <div>
                    <label for="returnDate" class="Form-label">{"Return Date"}</label>
                    <input
                        type="date"
                        id="returnDate"
                        class="Form-input"
                        min={min_return}
                        value={format_date(draft.return_date)}
                        disabled={draft.departure_date.is_none()}
                        oninput={date_input(BriefEdit::ReturnDate, |draft| draft.return_date)}
                    />
                </div>
                <div>
                    <label for="budget" class="Form-label">{"Budget"}</label>
                    <input
                        type="text"
                        id="budget"
                        class="Form-input"
                        placeholder="Enter budget"
                        value={draft.budget.clone()}
                        oninput={text_input(&edit, BriefEdit::Budget)}
                    />
                </div>
                <div>
                    <label for="description" class="Form-label-describe">{"Your Interests"}</label>
                    <textarea
                        id="description"
                        class="Form-input"
                        placeholder="Describe your interests"
                        value={draft.description.clone()}
                        oninput={edit.reform(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            BriefEdit::Description(input.value())
                        })}
                    />
                </div>
            </div>
            <div class="form-hero">
                <pre>{"Don't Have any destination in mind?\nLet us help you find the best!!"}</pre>
                <FlexCards />
            </div>
        </div>
    }
}

fn text_input(edit: &Callback<BriefEdit>, make: fn(String) -> BriefEdit) -> Callback<InputEvent> {
    edit.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        make(input.value())
    })
}

/// Applies a picker edit. On rejection, also yields the value the picker must show again.
fn apply_date_edit(
    draft: &BriefDraft,
    edit: BriefEdit,
    today: NaiveDate,
    shown: fn(&BriefDraft) -> Option<NaiveDate>,
) -> Result<BriefDraft, (BriefError, String)> {
    let mut next = draft.clone();
    match next.apply(edit, today) {
        Ok(()) => Ok(next),
        Err(err) => Err((err, format_date(shown(draft)))),
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 5, 1)
    }

    fn draft_with_dates() -> BriefDraft {
        let mut draft = BriefDraft::default();
        draft.apply(BriefEdit::DepartureDate(Some(date(2025, 6, 1))), today()).unwrap();
        draft.apply(BriefEdit::ReturnDate(Some(date(2025, 6, 5))), today()).unwrap();
        draft
    }

    #[test]
    fn rejected_return_resets_picker_to_reported_date() {
        let draft = draft_with_dates();
        let result = apply_date_edit(
            &draft,
            BriefEdit::ReturnDate(Some(date(2025, 5, 20))),
            today(),
            |draft| draft.return_date,
        );

        let (_, restore) = result.unwrap_err();
        assert_eq!(restore, "2025-06-05");
        assert_eq!(draft.brief().return_date, Some(date(2025, 6, 5)));
    }

    #[test]
    fn rejected_departure_resets_picker() {
        let draft = BriefDraft::default();
        let result = apply_date_edit(
            &draft,
            BriefEdit::DepartureDate(Some(date(2025, 4, 1))),
            today(),
            |draft| draft.departure_date,
        );

        assert_eq!(
            result,
            Err((BriefError::DepartureInPast { date: date(2025, 4, 1), today: today() }, String::new()))
        );
    }

    #[test]
    fn accepted_date_edit_returns_next_draft() {
        let next = apply_date_edit(
            &draft_with_dates(),
            BriefEdit::DepartureDate(Some(date(2025, 6, 10))),
            today(),
            |draft| draft.departure_date,
        )
        .unwrap();

        assert_eq!(next.departure_date, Some(date(2025, 6, 10)));
        assert_eq!(next.return_date, None);
    }
}
