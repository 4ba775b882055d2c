//! Database models for pricing queries.
//!
//! These models use sqlx's FromRow derive for direct database deserialization.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Service from services (base price is per 60 minutes)
#[derive(Debug, Clone, FromRow)]
pub struct ServiceCatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub base_price: Decimal,
}

/// Duration uplift from duration_pricing
#[derive(Debug, Clone, FromRow)]
pub struct DurationUpliftRule {
    pub id: Uuid,
    pub duration_minutes: i32,
    pub uplift_percentage: Decimal,
    pub is_active: bool,
}

/// Time-of-day uplift from time_pricing_rules
#[derive(Debug, Clone, FromRow)]
pub struct TimeUpliftRule {
    pub id: Uuid,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub uplift_percentage: Decimal,
    pub label: String,
    pub is_active: bool,
}

impl TimeUpliftRule {
    /// Check if the rule window covers the given local time-of-day.
    ///
    /// The window is half-open `[start_time, end_time)`. A window whose end is
    /// before its start (e.g. 22:00-02:00) never matches.
    pub fn covers(&self, time_of_day: NaiveTime) -> bool {
        self.start_time <= time_of_day && time_of_day < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rule(start: (u32, u32), end: (u32, u32)) -> TimeUpliftRule {
        TimeUpliftRule {
            id: Uuid::nil(),
            day_of_week: 5,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            uplift_percentage: dec!(20),
            label: "Evening Premium".to_string(),
            is_active: true,
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_covers_is_half_open() {
        let evening = rule((18, 0), (21, 0));
        assert!(evening.covers(at(18, 0)));
        assert!(evening.covers(at(20, 59)));
        assert!(!evening.covers(at(21, 0)));
        assert!(!evening.covers(at(17, 59)));
    }

    #[test]
    fn test_midnight_spanning_window_never_matches() {
        let late = rule((22, 0), (2, 0));
        assert!(!late.covers(at(23, 0)));
        assert!(!late.covers(at(1, 0)));
        assert!(!late.covers(at(22, 0)));
    }

    #[test]
    fn test_empty_window_never_matches() {
        let empty = rule((9, 0), (9, 0));
        assert!(!empty.covers(at(9, 0)));
    }
}
