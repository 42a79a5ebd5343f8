use std::collections::BTreeSet;

use thiserror::Error;

use crate::{brief::TripBrief, place::Place};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Choose at least 1 place to visit!")]
    NothingSelected,
}

/// Candidate places plus the ids the user picked.
/// The `selected` flag of every place always agrees with the id set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceSelection {
    places: Vec<Place>,
    selected: BTreeSet<String>,
}

/// Navigation payload from the place selector to the itinerary screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryHandoff {
    pub selected_ids: BTreeSet<String>,
    pub places: Vec<Place>,
    pub brief: TripBrief,
}

impl PlaceSelection {
    /// Starts from whatever the backend already recommended.
    pub fn new(places: Vec<Place>) -> Self {
        let selected = places
            .iter()
            .filter(|place| place.selected)
            .map(|place| place.place_id.clone())
            .collect();

        Self { places, selected }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, place_id: &str) -> bool {
        self.selected.contains(place_id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Flips the place's selection. Unknown ids are ignored.
    pub fn toggle(&mut self, place_id: &str) {
        let Some(place) = self.places.iter_mut().find(|place| place.place_id == place_id) else {
            return;
        };

        place.selected = !place.selected;
        if place.selected {
            self.selected.insert(place.place_id.clone());
        } else {
            self.selected.remove(place_id);
        }
    }

    pub fn handoff(&self, brief: TripBrief) -> Result<ItineraryHandoff, SelectionError> {
        if self.selected.is_empty() {
            return Err(SelectionError::NothingSelected);
        }

        Ok(ItineraryHandoff {
            selected_ids: self.selected.clone(),
            places: self.places.clone(),
            brief,
        })
    }
}

impl ItineraryHandoff {
    /// Selected places in the order the backend listed them.
    pub fn selected_places(&self) -> Vec<Place> {
        self.places
            .iter()
            .filter(|place| self.selected_ids.contains(&place.place_id))
            .cloned()
            .collect()
    }
}
