use gloo_console::error;

pub mod brief_form;
pub mod event_card;
pub mod flex_cards;
pub mod header;
pub mod home_page;
pub mod itinerary_planner;
pub mod modal;
pub mod not_found;
pub mod place_card;
pub mod place_selector;

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Err(err) = gloo_utils::window().alert_with_message(message) {
        error!("Failed to show alert", err);
    }
}

// Bundled from `frontend/images` by trunk's copy-dir
pub const LOADING_IMAGE: &str = "/images/loading-animation.svg";
pub const LOGO_IMAGE: &str = "/images/logo_main.svg";
