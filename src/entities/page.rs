use serde::{Deserialize, Serialize, Serializer};

use crate::entities::Ride;

/// Largest integer an `f64` holds exactly.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RidePage {
    pub data: Vec<Ride>,
    pub meta: PageMeta,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(serialize_with = "serialize_number")]
    pub page: f64,
    #[serde(serialize_with = "serialize_number")]
    pub limit: f64,
    pub total_data: i64,
    #[serde(serialize_with = "serialize_number")]
    pub total_page: f64,
}

impl PageMeta {
    pub fn new(page: f64, limit: f64, total_data: i64) -> Self {
        Self {
            page,
            limit,
            total_data,
            total_page: (total_data as f64 / limit).ceil(),
        }
    }
}

/// Whole numbers are written as JSON integers, anything else as a float.
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}
