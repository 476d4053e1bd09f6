//! Request parameter parsing and validation.
//!
//! Checks run in a fixed order and the first failure wins.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::entities::{NewRide, MAX_SAFE_INTEGER};
use crate::error::{validation_error, Error};

pub const DEFAULT_PAGE: f64 = 1.0;
pub const DEFAULT_LIMIT: f64 = 10.0;

const PAGINATION_KEYS: [&str; 2] = ["page", "limit"];

/// Lenient numeric coercion used for coordinates. Anything that does not
/// yield a finite number is `None`.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().ok()?
            }
        }
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => return None,
    };

    number.is_finite().then(|| number)
}

fn in_range(lat: Option<f64>, long: Option<f64>) -> bool {
    matches!(
        (lat, long),
        (Some(lat), Some(long)) if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long)
    )
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Validates a create-ride body. A body that is not a JSON object is treated
/// as an empty one.
pub fn parse_new_ride(body: &Value) -> Result<NewRide, Error> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let start_lat = coerce_number(fields.get("start_lat"));
    let start_long = coerce_number(fields.get("start_long"));
    let end_lat = coerce_number(fields.get("end_lat"));
    let end_long = coerce_number(fields.get("end_long"));

    if !in_range(start_lat, start_long) {
        return Err(validation_error(
            "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively",
        ));
    }

    if !in_range(end_lat, end_long) {
        return Err(validation_error(
            "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively",
        ));
    }

    let rider_name = non_empty_string(fields.get("rider_name"))
        .ok_or_else(|| validation_error("Rider name must be a non empty string"))?;
    let driver_name = non_empty_string(fields.get("driver_name"))
        .ok_or_else(|| validation_error("Driver name must be a non empty string"))?;
    let driver_vehicle = non_empty_string(fields.get("driver_vehicle"))
        .ok_or_else(|| validation_error("Driver vehicle must be a non empty string"))?;

    Ok(NewRide {
        // in_range only passes for Some
        start_lat: start_lat.unwrap_or_default(),
        start_long: start_long.unwrap_or_default(),
        end_lat: end_lat.unwrap_or_default(),
        end_long: end_long.unwrap_or_default(),
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

fn field_error(key: &str, reason: &str) -> Error {
    validation_error(format!(
        "child \"{key}\" fails because [\"{key}\" {reason}]",
        key = key,
        reason = reason
    ))
}

fn positive_number(key: &str, raw: &str) -> Result<f64, Error> {
    let raw = raw.trim();
    let number: f64 = match raw.parse() {
        Ok(n) if !raw.is_empty() && f64::is_finite(n) => n,
        _ => return Err(field_error(key, "must be a number")),
    };

    if number <= 0.0 {
        return Err(field_error(key, "must be a positive number"));
    }

    Ok(number)
}

/// Floors to a whole row count. `as` saturates, so huge values clamp to `i64::MAX`.
fn row_count(n: f64) -> i64 {
    n.floor().max(0.0) as i64
}

/// `page` and `limit` are kept as given so they can be echoed back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pagination {
    pub page: f64,
    pub limit: f64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        row_count((self.page - 1.0) * self.limit)
    }

    pub fn row_limit(&self) -> i64 {
        row_count(self.limit)
    }
}

pub fn parse_pagination(query: &HashMap<String, String>) -> Result<Pagination, Error> {
    let mut pagination = Pagination::default();

    if let Some(raw) = query.get("page") {
        pagination.page = positive_number("page", raw)?;
    }

    if let Some(raw) = query.get("limit") {
        pagination.limit = positive_number("limit", raw)?;
    }

    let mut unknown: Vec<&String> = query
        .keys()
        .filter(|key| !PAGINATION_KEYS.contains(&key.as_str()))
        .collect();
    unknown.sort();

    if let Some(key) = unknown.first() {
        return Err(validation_error(format!("\"{}\" is not allowed", key)));
    }

    Ok(pagination)
}

/// Validates a ride id. `Ok(None)` means the id is a valid number that no
/// stored ride can have (fractional or beyond the exact integer range).
pub fn parse_ride_id(raw: &str) -> Result<Option<i64>, Error> {
    let id = positive_number("id", raw)?;

    Ok((id.fract() == 0.0 && id <= MAX_SAFE_INTEGER).then(|| id as i64))
}
