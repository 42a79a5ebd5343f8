use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    brief::TripBrief,
    config::AppConfig,
    lenient::{lenient_opt_text, lenient_records, lenient_text},
    place::Place,
};

/// One stop of the generated plan. Stops come back in visiting order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(from = "RawStop")]
pub struct ItineraryStop {
    pub name: String,
    pub details: String,
    pub timing: String,
    pub total_duration: String,
    pub recommended_transport: String,
    pub famous_activity: Option<String>,
    pub additional_notes: Option<String>,
    pub image_url: Option<String>,
    pub place_id: Option<String>,
}

// Generated stops are loosely typed and may spell the activity key either way
#[derive(Deserialize)]
struct RawStop {
    #[serde(default, deserialize_with = "lenient_text")]
    name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    details: String,
    #[serde(default, deserialize_with = "lenient_text")]
    timing: String,
    #[serde(default, deserialize_with = "lenient_text")]
    total_duration: String,
    #[serde(default, deserialize_with = "lenient_text")]
    recommended_transport: String,
    #[serde(default, rename = "Famous Activity", deserialize_with = "lenient_opt_text")]
    famous_activity_label: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    famous_activity: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    additional_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_text")]
    place_id: Option<String>,
}

impl From<RawStop> for ItineraryStop {
    fn from(raw: RawStop) -> Self {
        Self {
            name: raw.name,
            details: raw.details,
            timing: raw.timing,
            total_duration: raw.total_duration,
            recommended_transport: raw.recommended_transport,
            famous_activity: raw.famous_activity_label.or(raw.famous_activity),
            additional_notes: raw.additional_notes,
            image_url: raw.image_url,
            place_id: raw.place_id,
        }
    }
}

/// The generated plan. Stops that are not objects are skipped.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Itinerary {
    #[serde(deserialize_with = "lenient_records")]
    pub stops: Vec<ItineraryStop>,
}

/// Body of the itinerary generation request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub selected_places: String,
    pub user_input: String,
}

impl ItineraryRequest {
    pub fn new(places: &[Place], brief: &TripBrief) -> Self {
        Self {
            selected_places: places.iter().map(describe_place).collect::<Vec<_>>().join("\n"),
            user_input: planner_instruction(brief),
        }
    }
}

fn describe_place(place: &Place) -> String {
    let mut line = format!(
        "NAME: '{}' (place_id: {}) is located in {}, and has a rating of {}. It was chosen by the user",
        place.name,
        place.place_id,
        place.formatted_address,
        place.rating_label()
    );
    if !place.types.is_empty() {
        line.push_str(" because of the following reasons: ");
        line.push_str(&place.types.join(", "));
    }
    line
}

fn planner_instruction(brief: &TripBrief) -> String {
    format!(
        "You are an event planner and your task is to plan a series of events for a group of tourists visiting the region of {} between {} to {}. They have a budget of {}, so plan accordingly.",
        brief.destination,
        date_label(brief.departure_date),
        date_label(brief.return_date),
        brief.budget
    )
}

fn date_label(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "an unspecified date".to_owned(), |date| date.format("%Y-%m-%d").to_string())
}

/// The selected place a stop refers to.
///
/// An echoed `place_id` is authoritative. Without one, names are compared
/// case-insensitively: an equal name wins over a containment match in either
/// direction, and among equally good matches the first selected place wins.
pub fn match_place<'a>(stop: &ItineraryStop, selected: &'a [Place]) -> Option<&'a Place> {
    if let Some(id) = &stop.place_id {
        if let Some(place) = selected.iter().find(|place| &place.place_id == id) {
            return Some(place);
        }
    }

    let stop_name = stop.name.trim().to_lowercase();
    if stop_name.is_empty() {
        return None;
    }

    let names: Vec<(String, &Place)> = selected
        .iter()
        .map(|place| (place.name.trim().to_lowercase(), place))
        .filter(|(name, _)| !name.is_empty())
        .collect();

    names
        .iter()
        .find(|(name, _)| *name == stop_name)
        .or_else(|| {
            names
                .iter()
                .find(|(name, _)| stop_name.contains(name.as_str()) || name.contains(stop_name.as_str()))
        })
        .map(|(_, place)| *place)
}

/// Picture for a stop: the matched place's photo, then the stop's own image, then a placeholder.
pub fn stop_image_url(stop: &ItineraryStop, selected: &[Place], config: &AppConfig) -> String {
    if let Some(reference) = match_place(stop, selected).and_then(Place::photo_reference) {
        return config.photo_url(reference);
    }

    match stop.image_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => placeholder_image_url(&stop.name),
    }
}

pub fn placeholder_image_url(name: &str) -> String {
    format!("/api/placeholder/400/320?text={}", urlencoding::encode(&slugify(name)))
}

fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEntry<'a> {
    pub position: usize,
    pub stop: &'a ItineraryStop,
    /// Draw an arrow towards the next stop
    pub connector: bool,
}

pub fn timeline(stops: &[ItineraryStop]) -> Vec<TimelineEntry<'_>> {
    stops
        .iter()
        .enumerate()
        .map(|(position, stop)| TimelineEntry {
            position,
            stop,
            connector: position + 1 < stops.len(),
        })
        .collect()
}
