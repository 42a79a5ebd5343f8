use travel_planner_lib::itinerary::ItineraryStop;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub stop: ItineraryStop,
    /// Zero-based position in the plan
    pub position: usize,
    pub image: AttrValue,
}

#[function_component]
pub fn EventCard(props: &Props) -> Html {
    let stop = &props.stop;

    html! {
        <div class="event-card">
            <div class="event-card-image">
                <img src={props.image.clone()} alt={stop.name.clone()} />
                <div class="event-number">{(props.position + 1).to_string()}</div>
            </div>
            <div class="event-card-content">
                <h2 class="event-card-title">{stop.name.clone()}</h2>
                <div class="event-card-description">
                    <p>{stop.details.clone()}</p>
                </div>
                <div class="event-card-details">
                    { detail("⏱️", "Timing:", Some(&stop.timing)) }
                    { detail("⌛", "Duration:", Some(&stop.total_duration)) }
                    { detail("🚗", "Transport:", Some(&stop.recommended_transport)) }
                    { detail("🎯", "Activity:", stop.famous_activity.as_ref()) }
                </div>
                if let Some(notes) = stop.additional_notes.as_ref().filter(|notes| !notes.is_empty()) {
                    <div class="event-card-notes">
                        <h4>{"Notes"}</h4>
                        <p>{notes.clone()}</p>
                    </div>
                }
            </div>
        </div>
    }
}

fn detail(icon: &'static str, label: &'static str, value: Option<&String>) -> Html {
    match value.filter(|value| !value.is_empty()) {
        Some(value) => html! {
            <div class="detail-item">
                <div class="detail-icon">{icon}</div>
                <div class="detail-text">
                    <span class="detail-label">{label}</span>
                    <span class="detail-value">{value.clone()}</span>
                </div>
            </div>
        },
        None => html! {},
    }
}

#[derive(PartialEq, Properties, Clone)]
pub struct ConnectorProps {
    pub position: usize,
}

/// Arrow pointing from one stop to the next.
#[function_component]
pub fn Connector(props: &ConnectorProps) -> Html {
    let gradient = format!("arrowGradient-{}", props.position);

    html! {
        <div class="arrow-container">
            <div class="animated-arrow">
                <svg width="40" height="100" xmlns="http://www.w3.org/2000/svg">
                    <defs>
                        <linearGradient id={gradient.clone()} x1="0%" y1="0%" x2="0%" y2="100%">
                            <stop offset="0%" stop-color="#4e54c8" stop-opacity="0.8">
                                <animate attributeName="stop-opacity" values="0.8;1;0.8" dur="2s" repeatCount="indefinite" />
                            </stop>
                            <stop offset="100%" stop-color="#8f94fb" stop-opacity="0.9">
                                <animate attributeName="stop-opacity" values="0.9;1;0.9" dur="2s" repeatCount="indefinite" />
                            </stop>
                        </linearGradient>
                    </defs>
                    <path
                        d="M20,5 L20,75 M8,65 L20,85 L32,65"
                        stroke={format!("url(#{gradient})")}
                        stroke-width="5"
                        fill="none"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </div>
        </div>
    }
}
