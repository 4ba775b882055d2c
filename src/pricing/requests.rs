//! Request DTOs for pricing API endpoints.
//!
//! Parameters arrive untyped (query strings or loose JSON) and are validated
//! into a `CalculatePriceRequest` before any pricing logic runs.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use chrono_tz::Tz;
use serde::Deserialize;

use super::calculators::BASE_DURATION_MINUTES;
use super::services::PricingError;

/// Naive timestamp layouts accepted as local time
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Query parameters for `GET /calculate-price`
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

/// JSON body for `POST /calculate-price`
#[derive(Debug, Default, Deserialize)]
pub struct PriceBody {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub duration: Option<DurationParam>,
}

/// Duration as sent by browser clients: a number or a string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationParam {
    Minutes(i64),
    Fractional(f64),
    Text(String),
}

impl From<PriceBody> for PriceQuery {
    fn from(body: PriceBody) -> Self {
        PriceQuery {
            service_id: body.service_id,
            booking_time: body.booking_time,
            duration: body.duration.map(|d| match d {
                DurationParam::Minutes(n) => n.to_string(),
                DurationParam::Fractional(f) => f.to_string(),
                DurationParam::Text(s) => s,
            }),
        }
    }
}

/// Validated price calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatePriceRequest {
    /// Opaque service identifier as supplied by the caller
    pub service_id: String,
    /// Booking time in the deployment's local time zone
    pub booking_time: NaiveDateTime,
    pub duration_minutes: i32,
}

impl CalculatePriceRequest {
    /// Validate raw parameters, interpreting timestamps in `time_zone`.
    pub fn parse(query: PriceQuery, time_zone: Tz) -> Result<Self, PricingError> {
        let service_id = non_empty(query.service_id)
            .ok_or(PricingError::MissingParameter { name: "service_id" })?;
        let raw_time = non_empty(query.booking_time)
            .ok_or(PricingError::MissingParameter { name: "booking_time" })?;

        let booking_time = parse_booking_time(&raw_time, time_zone).ok_or_else(|| {
            PricingError::InvalidParameter {
                name: "booking_time",
                reason: format!("'{}' is not a recognised timestamp", raw_time),
            }
        })?;
        let duration_minutes = parse_duration(query.duration.as_deref())?;

        Ok(Self {
            service_id,
            booking_time,
            duration_minutes,
        })
    }

    /// Day of week in local time, 0 = Sunday
    pub fn day_of_week(&self) -> i32 {
        self.booking_time.weekday().num_days_from_sunday() as i32
    }

    /// Local time-of-day truncated to the minute
    pub fn time_of_day(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.booking_time.hour(), self.booking_time.minute(), 0)
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a duration in minutes.
///
/// Leading digits are used (`"90min"` is 90). Anything without a positive
/// leading number falls back to 60.
pub fn parse_duration(raw: Option<&str>) -> Result<i32, PricingError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(BASE_DURATION_MINUTES);
    };

    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() || negative {
        return Ok(BASE_DURATION_MINUTES);
    }

    match digits.parse::<i32>() {
        Ok(0) => Ok(BASE_DURATION_MINUTES),
        Ok(minutes) => Ok(minutes),
        Err(_) => Err(PricingError::InvalidParameter {
            name: "duration",
            reason: format!("'{}' minutes is out of range", raw),
        }),
    }
}

/// Parse a booking timestamp into local time.
///
/// RFC 3339 timestamps are converted into `time_zone`, using the offset in
/// force at that instant. Naive timestamps are taken as already local and a
/// bare date is UTC midnight.
pub fn parse_booking_time(raw: &str, time_zone: Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&time_zone).naive_local());
    }

    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().with_timezone(&time_zone).naive_local())
}
