//! Database queries for pricing engine.
//!
//! Read-only lookups against the booking platform's reference tables.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::models::{DurationUpliftRule, ServiceCatalogEntry, TimeUpliftRule};

/// Get a service by id
pub async fn get_service(
    pool: &PgPool,
    service_id: Uuid,
) -> Result<Option<ServiceCatalogEntry>, AppError> {
    let service = sqlx::query_as::<_, ServiceCatalogEntry>(
        r#"
        SELECT id, name, base_price
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(service_id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

/// Get all active duration uplift rules
pub async fn get_active_duration_rules(pool: &PgPool) -> Result<Vec<DurationUpliftRule>, AppError> {
    let rules = sqlx::query_as::<_, DurationUpliftRule>(
        r#"
        SELECT id, duration_minutes, uplift_percentage, is_active
        FROM duration_pricing
        WHERE is_active = true
        ORDER BY duration_minutes, id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rules)
}

/// Get active time uplift rules for a day of week (0 = Sunday)
pub async fn get_active_time_rules(
    pool: &PgPool,
    day_of_week: i32,
) -> Result<Vec<TimeUpliftRule>, AppError> {
    let rules = sqlx::query_as::<_, TimeUpliftRule>(
        r#"
        SELECT
            id, day_of_week, start_time, end_time,
            uplift_percentage, label, is_active
        FROM time_pricing_rules
        WHERE day_of_week = $1
          AND is_active = true
        ORDER BY start_time, id
        "#,
    )
    .bind(day_of_week)
    .fetch_all(pool)
    .await?;

    Ok(rules)
}
