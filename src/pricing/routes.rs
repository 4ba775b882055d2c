//! HTTP handlers for the pricing engine

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::AppState;

use super::requests::{CalculatePriceRequest, PriceBody, PriceQuery};
use super::responses::{PriceResponse, PricingErrorResponse};
use super::services::{self, PricingError};

/// Pricing routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/calculate-price",
        get(calculate_price_query).post(calculate_price_body),
    )
}

/// `GET /calculate-price?service_id=..&booking_time=..&duration=..`
pub async fn calculate_price_query(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, PricingError> {
    calculate(&state, query).await
}

/// `POST /calculate-price` with the same fields as a JSON body.
///
/// Body rejections are reported in the same JSON error shape as any other
/// invalid parameter.
pub async fn calculate_price_body(
    State(state): State<AppState>,
    body: Result<Json<PriceBody>, JsonRejection>,
) -> Result<Json<PriceResponse>, PricingError> {
    let Json(body) = body.map_err(|rejection| PricingError::InvalidParameter {
        name: "body",
        reason: rejection.body_text(),
    })?;
    calculate(&state, body.into()).await
}

async fn calculate(state: &AppState, query: PriceQuery) -> Result<Json<PriceResponse>, PricingError> {
    let request = CalculatePriceRequest::parse(query, state.time_zone)?;

    let quote = tokio::time::timeout(
        state.request_timeout,
        services::calculate_price(state.repository.as_ref(), &request),
    )
    .await
    .map_err(|_| {
        AppError::Unavailable(format!(
            "price calculation timed out after {:?}",
            state.request_timeout
        ))
    })??;

    Ok(Json(quote.into()))
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PricingError::MissingParameter { .. } | PricingError::InvalidParameter { .. } => {
                tracing::debug!("Rejected price request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            PricingError::ServiceNotFound { .. } => {
                tracing::debug!("{}", self);
                (StatusCode::NOT_FOUND, self.to_string())
            }
            PricingError::Upstream(e) => {
                tracing::error!("Price calculation failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to calculate price".to_string(),
                )
            }
        };

        (status, Json(PricingErrorResponse { error: message })).into_response()
    }
}
