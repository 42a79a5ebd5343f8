pub mod brief;
pub mod config;
pub mod destination;
pub mod itinerary;
mod lenient;
pub mod place;
pub mod selection;
