#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use booking_pricing::error::AppError;
use booking_pricing::pricing::models::{DurationUpliftRule, ServiceCatalogEntry, TimeUpliftRule};
use booking_pricing::pricing::{InMemoryPricingRepository, PricingRepository};
use booking_pricing::{app, AppState};
use chrono::NaiveTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use uuid::Uuid;

pub const SWEDISH_ID: &str = "3a9c1f52-7d84-4b2e-a1c6-5e0f9d2b7c31";
pub const HOT_STONE_ID: &str = "b7e2d4a9-1c35-4f68-9b0a-2d6e8f1c4a57";

/// Friday, outside every time rule
pub const FRIDAY_MORNING: &str = "2024-03-01T10:00:00Z";
/// Friday, inside both evening rules
pub const FRIDAY_EVENING: &str = "2024-03-01T19:15:00Z";

pub fn service(id: &str, name: &str, base_price: Decimal) -> ServiceCatalogEntry {
    ServiceCatalogEntry {
        id: Uuid::parse_str(id).unwrap(),
        name: name.to_string(),
        base_price,
    }
}

pub fn duration_rule(id: u128, minutes: i32, pct: Decimal) -> DurationUpliftRule {
    DurationUpliftRule {
        id: Uuid::from_u128(id),
        duration_minutes: minutes,
        uplift_percentage: pct,
        is_active: true,
    }
}

pub fn time_rule(id: u128, day: i32, start: u32, end: u32, pct: Decimal, label: &str) -> TimeUpliftRule {
    TimeUpliftRule {
        id: Uuid::from_u128(id),
        day_of_week: day,
        start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
        uplift_percentage: pct,
        label: label.to_string(),
        is_active: true,
    }
}

/// Catalog used across the API tests
pub fn fixture_repository() -> InMemoryPricingRepository {
    InMemoryPricingRepository::new()
        .with_service(service(SWEDISH_ID, "Swedish Massage", Decimal::from(100)))
        .with_service(service(HOT_STONE_ID, "Hot Stone Massage", Decimal::from(80)))
        .with_duration_rule(duration_rule(1, 90, Decimal::from(10)))
        .with_time_rule(time_rule(10, 5, 17, 22, Decimal::from(15), "Evening"))
        .with_time_rule(time_rule(11, 5, 18, 21, Decimal::from(25), "Friday Prime Time"))
}

pub fn test_app(repository: Arc<dyn PricingRepository>) -> Router {
    test_app_with(repository, Tz::UTC, Duration::from_secs(5))
}

pub fn test_app_with(repository: Arc<dyn PricingRepository>, time_zone: Tz, timeout: Duration) -> Router {
    app(AppState::new(repository, time_zone, timeout))
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Repository whose every read fails
pub struct UnreachableRepository;

#[async_trait]
impl PricingRepository for UnreachableRepository {
    async fn get_service(&self, _: Uuid) -> Result<Option<ServiceCatalogEntry>, AppError> {
        Err(AppError::Unavailable("password authentication failed for user \"pricing\"".to_string()))
    }

    async fn get_duration_rules(&self) -> Result<Vec<DurationUpliftRule>, AppError> {
        Err(AppError::Unavailable("timeout".to_string()))
    }

    async fn get_time_rules(&self, _: i32) -> Result<Vec<TimeUpliftRule>, AppError> {
        Err(AppError::Unavailable("timeout".to_string()))
    }
}

/// Repository that answers correctly but only after `delay`
pub struct SlowRepository {
    pub inner: InMemoryPricingRepository,
    pub delay: Duration,
}

#[async_trait]
impl PricingRepository for SlowRepository {
    async fn get_service(&self, id: Uuid) -> Result<Option<ServiceCatalogEntry>, AppError> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_service(id).await
    }

    async fn get_duration_rules(&self) -> Result<Vec<DurationUpliftRule>, AppError> {
        self.inner.get_duration_rules().await
    }

    async fn get_time_rules(&self, day_of_week: i32) -> Result<Vec<TimeUpliftRule>, AppError> {
        self.inner.get_time_rules(day_of_week).await
    }
}
