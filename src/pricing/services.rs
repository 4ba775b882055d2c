//! Pricing service functions with data access.
//!
//! These functions read reference data through a `PricingRepository` and hand
//! it to the pure calculators. Nothing here writes or retries.

use uuid::Uuid;

use crate::error::AppError;

use super::calculators::{self, PriceInputs, PriceQuote};
use super::repository::PricingRepository;
use super::requests::CalculatePriceRequest;

/// Pricing calculation error types
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Service not found: {service_id}")]
    ServiceNotFound { service_id: String },

    #[error(transparent)]
    Upstream(#[from] AppError),
}

/// Calculate the price for a validated request.
///
/// The service is looked up first so an unknown id fails before any rule
/// reads. Duration and time rules are then fetched concurrently.
pub async fn calculate_price(
    repository: &dyn PricingRepository,
    request: &CalculatePriceRequest,
) -> Result<PriceQuote, PricingError> {
    let not_found = || PricingError::ServiceNotFound {
        service_id: request.service_id.clone(),
    };

    // A non-UUID id cannot match any catalog entry
    let service_id = Uuid::parse_str(&request.service_id).map_err(|_| not_found())?;

    let service = repository
        .get_service(service_id)
        .await?
        .ok_or_else(not_found)?;

    let day_of_week = request.day_of_week();
    let time_of_day = request.time_of_day();

    let (duration_rules, time_rules) = tokio::try_join!(
        repository.get_duration_rules(),
        repository.get_time_rules(day_of_week),
    )?;

    tracing::debug!(
        "Loaded {} duration rules and {} time rules for day {}",
        duration_rules.len(),
        time_rules.len(),
        day_of_week
    );

    let quote = calculators::calculate_price(&PriceInputs {
        service: &service,
        duration_minutes: request.duration_minutes,
        day_of_week,
        time_of_day,
        duration_rules: &duration_rules,
        time_rules: &time_rules,
    });

    tracing::info!(
        service_id = %service.id,
        duration = request.duration_minutes,
        price = %quote.price,
        "Price calculated"
    );

    Ok(quote)
}
