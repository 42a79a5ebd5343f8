use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient::{lenient_f64, lenient_flag, lenient_records, lenient_strings, lenient_text, lenient_u64};

/// A candidate point of interest, as returned by the place search backend.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Place {
    pub place_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub formatted_address: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub user_ratings_total: Option<u64>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "lenient_photos")]
    pub photos: Vec<PlacePhoto>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub selected: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PlacePhoto {
    #[serde(default)]
    pub photo_reference: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

/// Places that fail to decode, e.g. without a `place_id`, are skipped.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct PlacesResponse {
    #[serde(default, deserialize_with = "lenient_records")]
    pub places: Vec<Place>,
}

impl Place {
    pub fn new(place_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Reference of the first photo, if that photo has one.
    pub fn photo_reference(&self) -> Option<&str> {
        self.photos
            .first()
            .and_then(|photo| photo.photo_reference.as_deref())
            .filter(|reference| !reference.is_empty())
    }

    pub fn rating_label(&self) -> String {
        self.rating.map_or_else(|| "unknown".to_owned(), |rating| rating.to_string())
    }
}

// Photo metadata is advisory: anything unexpected becomes "no photo" rather than a decode failure
fn lenient_photos<'de, D>(deserializer: D) -> Result<Vec<PlacePhoto>, D::Error>
where
    D: Deserializer<'de>,
{
    let photos = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };
    Ok(photos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn place_json(photos: Value) -> Value {
        json!({
            "place_id": "p1",
            "name": "Louvre Museum",
            "formatted_address": "Rue de Rivoli, 75001 Paris",
            "rating": 4.7,
            "user_ratings_total": 320000,
            "types": ["museum", "tourist_attraction"],
            "photos": photos,
        })
    }

    #[test]
    fn decodes_backend_place() {
        let place: Place = serde_json::from_value(place_json(json!([
            {"photo_reference": "ref-1", "width": 400, "height": 300, "html_attributions": []},
            {"photo_reference": "ref-2"}
        ])))
        .unwrap();

        assert_eq!(place.place_id, "p1");
        assert_eq!(place.rating, Some(4.7));
        assert_eq!(place.user_ratings_total, Some(320000));
        assert_eq!(place.types, vec!["museum", "tourist_attraction"]);
        assert_eq!(place.photo_reference(), Some("ref-1"));
        assert!(!place.selected);
    }

    #[test]
    fn malformed_photos_mean_no_photo() {
        for photos in [json!(null), json!([]), json!([{}]), json!("oops"), json!([42]), json!({"a": 1})] {
            let place: Place = serde_json::from_value(place_json(photos.clone())).unwrap();
            assert_eq!(place.photo_reference(), None, "photos: {photos}");
        }

        let mut missing = place_json(json!(null));
        missing.as_object_mut().unwrap().remove("photos");
        let place: Place = serde_json::from_value(missing).unwrap();
        assert_eq!(place.photo_reference(), None);
    }

    #[test]
    fn selected_flag_accepts_bools_and_numbers() {
        for (raw, expected) in [
            (json!(true), true),
            (json!(1), true),
            (json!("1"), true),
            (json!(false), false),
            (json!(0), false),
            (json!(null), false),
        ] {
            let mut value = place_json(json!([]));
            value["selected"] = raw.clone();
            let place: Place = serde_json::from_value(value).unwrap();
            assert_eq!(place.selected, expected, "selected: {raw}");
        }
    }

    #[test]
    fn places_response_defaults_to_empty() {
        let response: PlacesResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.places.is_empty());

        let response: PlacesResponse =
            serde_json::from_value(json!({"places": [{"place_id": "p9"}]})).unwrap();
        assert_eq!(response.places, vec![Place::new("p9", "")]);
    }

    #[test]
    fn one_bad_place_does_not_sink_the_response() {
        let response: PlacesResponse = serde_json::from_value(json!({"places": [
            place_json(json!([])),
            {"place_id": "p2", "name": null, "types": null, "rating": "4.2", "user_ratings_total": null},
            {"name": "No id"},
            "garbage",
        ]}))
        .unwrap();

        let ids: Vec<&str> = response.places.iter().map(|place| place.place_id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(response.places[1].name, "");
        assert!(response.places[1].types.is_empty());
        assert_eq!(response.places[1].rating, Some(4.2));
        assert_eq!(response.places[1].user_ratings_total, None);
    }

    #[test]
    fn numeric_names_and_scalar_types_are_kept_as_text() {
        let place: Place =
            serde_json::from_value(json!({"place_id": "p3", "name": 1789, "types": "museum"})).unwrap();
        assert_eq!(place.name, "1789");
        assert_eq!(place.types, vec!["museum"]);
    }

    #[test]
    fn rating_label() {
        let mut place = Place::new("p1", "A");
        assert_eq!(place.rating_label(), "unknown");
        place.rating = Some(4.0);
        assert_eq!(place.rating_label(), "4");
        place.rating = Some(4.5);
        assert_eq!(place.rating_label(), "4.5");
    }
}
