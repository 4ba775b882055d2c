//! Pricing engine module for therapist bookings.
//!
//! Computes the price of a service for a requested duration and booking time,
//! with an itemized breakdown of the uplifts applied.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod repository;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, PriceBreakdown, PriceQuote};
pub use repository::{InMemoryPricingRepository, PgPricingRepository, PricingRepository};
pub use routes::router;
pub use services::PricingError;
