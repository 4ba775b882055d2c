//! Data access abstraction for the pricing engine.
//!
//! The calculator only ever reads three record sets. `PricingRepository`
//! hides where they come from so the service layer can run against Postgres
//! in production and against fixtures in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::models::{DurationUpliftRule, ServiceCatalogEntry, TimeUpliftRule};
use super::queries;

/// Read-only source of pricing reference data
#[async_trait]
pub trait PricingRepository: Send + Sync {
    /// Fetch one service by id
    async fn get_service(&self, service_id: Uuid) -> Result<Option<ServiceCatalogEntry>, AppError>;

    /// Fetch all active duration uplift rules
    async fn get_duration_rules(&self) -> Result<Vec<DurationUpliftRule>, AppError>;

    /// Fetch active time uplift rules for a day of week (0 = Sunday)
    async fn get_time_rules(&self, day_of_week: i32) -> Result<Vec<TimeUpliftRule>, AppError>;
}

/// Postgres-backed repository
#[derive(Clone)]
pub struct PgPricingRepository {
    pool: PgPool,
}

impl PgPricingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingRepository for PgPricingRepository {
    async fn get_service(&self, service_id: Uuid) -> Result<Option<ServiceCatalogEntry>, AppError> {
        queries::get_service(&self.pool, service_id).await
    }

    async fn get_duration_rules(&self) -> Result<Vec<DurationUpliftRule>, AppError> {
        queries::get_active_duration_rules(&self.pool).await
    }

    async fn get_time_rules(&self, day_of_week: i32) -> Result<Vec<TimeUpliftRule>, AppError> {
        queries::get_active_time_rules(&self.pool, day_of_week).await
    }
}

/// Fixture-backed repository.
///
/// Applies the same filtering as the SQL queries (active only, day filter).
#[derive(Debug, Clone, Default)]
pub struct InMemoryPricingRepository {
    services: Vec<ServiceCatalogEntry>,
    duration_rules: Vec<DurationUpliftRule>,
    time_rules: Vec<TimeUpliftRule>,
}

impl InMemoryPricingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service: ServiceCatalogEntry) -> Self {
        self.services.push(service);
        self
    }

    pub fn with_duration_rule(mut self, rule: DurationUpliftRule) -> Self {
        self.duration_rules.push(rule);
        self
    }

    pub fn with_time_rule(mut self, rule: TimeUpliftRule) -> Self {
        self.time_rules.push(rule);
        self
    }
}

#[async_trait]
impl PricingRepository for InMemoryPricingRepository {
    async fn get_service(&self, service_id: Uuid) -> Result<Option<ServiceCatalogEntry>, AppError> {
        Ok(self.services.iter().find(|s| s.id == service_id).cloned())
    }

    async fn get_duration_rules(&self) -> Result<Vec<DurationUpliftRule>, AppError> {
        let mut rules: Vec<DurationUpliftRule> = self
            .duration_rules
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        rules.sort_by(|a, b| {
            a.duration_minutes
                .cmp(&b.duration_minutes)
                .then(a.id.cmp(&b.id))
        });
        Ok(rules)
    }

    async fn get_time_rules(&self, day_of_week: i32) -> Result<Vec<TimeUpliftRule>, AppError> {
        let mut rules: Vec<TimeUpliftRule> = self
            .time_rules
            .iter()
            .filter(|r| r.is_active && r.day_of_week == day_of_week)
            .cloned()
            .collect();
        rules.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
        Ok(rules)
    }
}
