use std::{cell::Cell, future::Future, rc::Rc};

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use travel_planner_lib::{
    brief::TripBrief,
    config::{AppConfig, EVENT_PLANNER_PATH, KNOWN_DESTINATIONS_PATH, TOP_PLACES_PATH},
    itinerary::{Itinerary, ItineraryRequest, ItineraryStop},
    place::{Place, PlacesResponse},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(gloo_net::Error),
    #[error("backend answered with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(gloo_net::Error),
}

async fn make_request<ReturnType>(request: Request) -> Result<ReturnType, ApiError>
where
    ReturnType: DeserializeOwned,
{
    let response = request.send().await.map_err(ApiError::Network)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response.json::<ReturnType>().await.map_err(ApiError::Decode)
}

pub async fn get_known_destinations(config: AppConfig, signal: Option<AbortSignal>) -> Result<Vec<String>, ApiError> {
    let request = Request::get(&config.endpoint(KNOWN_DESTINATIONS_PATH))
        .abort_signal(signal.as_ref())
        .build()
        .map_err(ApiError::Network)?;
    make_request(request).await
}

pub async fn get_top_places(config: AppConfig, brief: TripBrief, signal: Option<AbortSignal>) -> Result<Vec<Place>, ApiError> {
    let request = Request::post(&config.endpoint(TOP_PLACES_PATH))
        .abort_signal(signal.as_ref())
        .json(&brief)
        .map_err(ApiError::Network)?;
    let response: PlacesResponse = make_request(request).await?;
    Ok(response.places)
}

pub async fn get_itinerary(
    config: AppConfig,
    request: ItineraryRequest,
    signal: Option<AbortSignal>,
) -> Result<Vec<ItineraryStop>, ApiError> {
    let request = Request::post(&config.endpoint(EVENT_PLANNER_PATH))
        .abort_signal(signal.as_ref())
        .json(&request)
        .map_err(ApiError::Network)?;
    let plan: Itinerary = make_request(request).await?;
    Ok(plan.stops)
}

/// A request owned by a mounted screen. Dropping the guard aborts the request
/// and guarantees its result is never delivered.
pub struct FetchGuard {
    controller: Option<AbortController>,
    gate: Gate,
}

impl FetchGuard {
    pub fn spawn<T, F, Fut, A>(request: F, apply: A) -> Self
    where
        T: 'static,
        F: FnOnce(Option<AbortSignal>) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
        A: FnOnce(Result<T, ApiError>) + 'static,
    {
        let controller = AbortController::new().ok();
        let future = request(controller.as_ref().map(AbortController::signal));

        let gate = Gate::open();
        spawn_local(gate.clone().deliver(future, apply));

        Self { controller, gate }
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.gate.close();
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Shared between a guard and its pending request; once closed, the result is discarded.
#[derive(Clone)]
struct Gate(Rc<Cell<bool>>);

impl Gate {
    fn open() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn close(&self) {
        self.0.set(false);
    }

    async fn deliver<T>(self, future: impl Future<Output = T>, apply: impl FnOnce(T)) {
        let result = future.await;
        if self.0.get() {
            apply(result);
        }
    }
}
