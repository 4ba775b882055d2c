//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no database access.
//! All intermediate values keep full decimal precision; rounding happens
//! once, on the final price.

use chrono::NaiveTime;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::pricing::models::{DurationUpliftRule, ServiceCatalogEntry, TimeUpliftRule};

/// Minutes covered by a service's base price
pub const BASE_DURATION_MINUTES: i32 = 60;

/// Round to specified decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(100.005), 2), dec!(100.01));
/// assert_eq!(round_money(dec!(100.004), 2), dec!(100.00));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Find the active duration rule for an exact duration.
///
/// No interpolation: a 75 minute booking does not pick up a 60 or 90 minute rule.
/// If several active rules share the duration, the first one wins.
pub fn find_duration_rule(
    rules: &[DurationUpliftRule],
    duration_minutes: i32,
) -> Option<&DurationUpliftRule> {
    rules
        .iter()
        .find(|r| r.is_active && r.duration_minutes == duration_minutes)
}

/// Pick the winning time rule for a local day and time-of-day.
///
/// Only active rules for the day whose window covers the time and whose
/// uplift is positive are considered. The highest uplift wins; ties go to
/// the earliest start time, then the lowest id.
pub fn select_time_rule(
    rules: &[TimeUpliftRule],
    day_of_week: i32,
    time_of_day: NaiveTime,
) -> Option<&TimeUpliftRule> {
    rules
        .iter()
        .filter(|r| r.is_active && r.day_of_week == day_of_week)
        .filter(|r| r.covers(time_of_day))
        .filter(|r| r.uplift_percentage > Decimal::ZERO)
        .min_by(|a, b| {
            b.uplift_percentage
                .cmp(&a.uplift_percentage)
                .then(a.start_time.cmp(&b.start_time))
                .then(a.id.cmp(&b.id))
        })
}

/// Multiply a price by `(1 + percentage / 100)`
pub fn apply_uplift(price: Decimal, percentage: Decimal) -> Decimal {
    price * (Decimal::ONE + percentage / Decimal::ONE_HUNDRED)
}

/// Scale a per-hour price to the requested number of minutes
pub fn scale_to_duration(price: Decimal, duration_minutes: i32) -> Decimal {
    price * Decimal::from(duration_minutes) / Decimal::from(BASE_DURATION_MINUTES)
}

/// Inputs for a single price calculation
#[derive(Debug, Clone)]
pub struct PriceInputs<'a> {
    pub service: &'a ServiceCatalogEntry,
    pub duration_minutes: i32,
    pub day_of_week: i32,
    pub time_of_day: NaiveTime,
    pub duration_rules: &'a [DurationUpliftRule],
    pub time_rules: &'a [TimeUpliftRule],
}

/// Itemized explanation of a calculated price
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub service: String,
    pub duration: i32,
    /// Duration uplift actually applied (0 if none)
    pub duration_uplift: Decimal,
    /// Time uplift actually applied (0 if none)
    pub time_uplift: Decimal,
    pub time_uplift_label: Option<String>,
}

/// Final rounded price plus its breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price: Decimal,
    pub breakdown: PriceBreakdown,
}

/// Calculate the price for a service, duration and local booking time.
///
/// Order matters and is fixed:
/// 1. start from the base price
/// 2. apply the exact-duration uplift, if any
/// 3. scale by `duration / 60`
/// 4. apply the single best time-of-day uplift, if any
/// 5. round to cents
pub fn calculate_price(inputs: &PriceInputs<'_>) -> PriceQuote {
    let base_price = inputs.service.base_price;
    let mut price = base_price;

    let duration_uplift = match find_duration_rule(inputs.duration_rules, inputs.duration_minutes) {
        Some(rule) if rule.uplift_percentage > Decimal::ZERO => {
            price = apply_uplift(price, rule.uplift_percentage);
            rule.uplift_percentage
        }
        _ => Decimal::ZERO,
    };

    price = scale_to_duration(price, inputs.duration_minutes);

    let (time_uplift, time_uplift_label) =
        match select_time_rule(inputs.time_rules, inputs.day_of_week, inputs.time_of_day) {
            Some(rule) => {
                price += price * (rule.uplift_percentage / Decimal::ONE_HUNDRED);
                (rule.uplift_percentage, Some(rule.label.clone()))
            }
            None => (Decimal::ZERO, None),
        };

    PriceQuote {
        price: round_money(price, 2),
        breakdown: PriceBreakdown {
            base_price,
            service: inputs.service.name.clone(),
            duration: inputs.duration_minutes,
            duration_uplift,
            time_uplift,
            time_uplift_label,
        },
    }
}
