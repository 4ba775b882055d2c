//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{PriceBreakdown, PriceQuote};

/// Response for price calculation
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub breakdown: PriceBreakdownResponse,
}

/// Breakdown as shown in the admin and booking clients
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub service: String,
    pub duration: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub duration_uplift: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub time_uplift: Decimal,
    pub time_uplift_label: Option<String>,
}

impl From<PriceBreakdown> for PriceBreakdownResponse {
    fn from(b: PriceBreakdown) -> Self {
        Self {
            base_price: b.base_price,
            service: b.service,
            duration: b.duration,
            duration_uplift: b.duration_uplift,
            time_uplift: b.time_uplift,
            time_uplift_label: b.time_uplift_label,
        }
    }
}

impl From<PriceQuote> for PriceResponse {
    fn from(q: PriceQuote) -> Self {
        Self {
            price: q.price,
            breakdown: q.breakdown.into(),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error: String,
}
