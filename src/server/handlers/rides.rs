use std::collections::HashMap;

use axum::extract::{Extension, Json, Path, Query};
use serde_json::Value;

use crate::entities::{PageMeta, Ride, RidePage};
use crate::error::{rides_not_found_error, Error};
use crate::server::params::{parse_new_ride, parse_pagination, parse_ride_id};
use crate::server::DynAPI;

/// Responds with a one-element list holding the stored ride.
pub async fn create(
    Extension(api): Extension<DynAPI>,
    body: Option<Json<Value>>,
) -> Result<Json<Vec<Ride>>, Error> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let ride = parse_new_ride(&body)?;

    let id = api.insert_ride(ride).await?;
    let rides = api.find_ride(id).await?;

    Ok(rides.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<RidePage>, Error> {
    let pagination = parse_pagination(&query)?;

    let data = api
        .find_rides(pagination.offset(), pagination.row_limit())
        .await?;
    let total_data = api.count_rides().await?;

    if total_data == 0 {
        return Err(rides_not_found_error());
    }

    Ok(RidePage {
        data,
        meta: PageMeta::new(pagination.page, pagination.limit, total_data),
    }
    .into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Ride>, Error> {
    let rides = match parse_ride_id(&id)? {
        Some(id) => api.find_ride(id).await?,
        None => Vec::new(),
    };

    let ride = rides
        .into_iter()
        .next()
        .ok_or_else(rides_not_found_error)?;

    Ok(ride.into())
}
