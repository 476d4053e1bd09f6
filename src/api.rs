use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{NewRide, Ride};
use crate::error::Error;

/// Persistence boundary for rides. Every operation is a single statement.
#[async_trait]
pub trait RideAPI {
    /// Stores a ride and returns the id assigned to it.
    async fn insert_ride(&self, ride: NewRide) -> Result<i64, Error>;
    /// Returns the rides matching `id`: zero or one element.
    async fn find_ride(&self, id: i64) -> Result<Vec<Ride>, Error>;
    async fn find_rides(&self, offset: i64, limit: i64) -> Result<Vec<Ride>, Error>;
    async fn count_rides(&self) -> Result<i64, Error>;
}

pub trait API: RideAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
