use crate::place::Place;

pub const PHOTO_SERVICE_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed/v1/place";
pub const PLACEHOLDER_PHOTO_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRq7tDgp_TYwdGlzX5KjF8KTQzJh8zQp6ow2g&s";

pub const KNOWN_DESTINATIONS_PATH: &str = "/api/places";
pub const TOP_PLACES_PATH: &str = "/api/top-places";
pub const EVENT_PLANNER_PATH: &str = "/api/event-planner";

/// Everything the screens need from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Backend origin, empty for same-origin requests
    pub api_base: String,
    pub maps_api_key: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>, maps_api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            maps_api_key: maps_api_key.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    pub fn photo_url(&self, photo_reference: &str) -> String {
        format!(
            "{PHOTO_SERVICE_URL}?maxwidth=400&photoreference={}&key={}",
            urlencoding::encode(photo_reference),
            self.maps_api_key
        )
    }

    /// Photo of the place, or the generic placeholder when it has none.
    pub fn place_photo_url(&self, place: &Place) -> String {
        place
            .photo_reference()
            .map_or_else(|| PLACEHOLDER_PHOTO_URL.to_owned(), |reference| self.photo_url(reference))
    }

    pub fn map_embed_url(&self, address: &str) -> String {
        format!("{MAP_EMBED_URL}?key={}&q={}", self.maps_api_key, urlencoding::encode(address))
    }
}
