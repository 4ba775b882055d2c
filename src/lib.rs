//! Price calculation service for therapist and massage bookings.
//!
//! Exposes `/calculate-price`, which prices a service for a requested
//! duration and booking time using duration and time-of-day uplift rules
//! stored in the platform database.

pub mod config;
pub mod db;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{routing::get, Router};
use chrono_tz::Tz;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::pricing::PricingRepository;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn PricingRepository>,
    /// Zone used to derive a booking's local day and time-of-day
    pub time_zone: Tz,
    /// Upper bound on one price calculation, data reads included
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(repository: Arc<dyn PricingRepository>, time_zone: Tz, request_timeout: Duration) -> Self {
        Self {
            repository,
            time_zone,
            request_timeout,
        }
    }
}

/// Build the application router.
///
/// CORS is fully permissive since the endpoint is called from browser clients
/// on other origins.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(pricing::router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
