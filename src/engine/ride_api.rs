use super::helpers::{ride_from_row, RIDE_COLUMNS};
use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};

use crate::{
    api::RideAPI,
    entities::{NewRide, Ride},
    error::Error,
};

#[async_trait]
impl RideAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn insert_ride(&self, ride: NewRide) -> Result<i64, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(
                sqlx::query(
                    "INSERT INTO Rides (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle) VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(ride.start_lat)
                .bind(ride.start_long)
                .bind(ride.end_lat)
                .bind(ride.end_long)
                .bind(&ride.rider_name)
                .bind(&ride.driver_name)
                .bind(&ride.driver_vehicle),
            )
            .await?;

        let id = result.last_insert_rowid();
        tracing::info!(ride_id = id, "ride created");

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn find_ride(&self, id: i64) -> Result<Vec<Ride>, Error> {
        let mut conn = self.pool.acquire().await?;

        let query = format!("SELECT {} FROM Rides WHERE rideID = ?", RIDE_COLUMNS);
        let rows = conn.fetch_all(sqlx::query(&query).bind(id)).await?;

        let rides: Vec<Ride> = rows.iter().map(ride_from_row).collect::<Result<_, _>>()?;

        Ok(rides)
    }

    #[tracing::instrument(skip(self))]
    async fn find_rides(&self, offset: i64, limit: i64) -> Result<Vec<Ride>, Error> {
        let mut conn = self.pool.acquire().await?;

        let query = format!(
            "SELECT {} FROM Rides ORDER BY rideID LIMIT ? OFFSET ?",
            RIDE_COLUMNS
        );
        let rows = conn
            .fetch_all(sqlx::query(&query).bind(limit).bind(offset))
            .await?;

        let rides: Vec<Ride> = rows.iter().map(ride_from_row).collect::<Result<_, _>>()?;

        Ok(rides)
    }

    #[tracing::instrument(skip(self))]
    async fn count_rides(&self) -> Result<i64, Error> {
        let mut conn = self.pool.acquire().await?;

        let count: i64 = conn
            .fetch_one(sqlx::query("SELECT count(*) AS count FROM Rides"))
            .await?
            .try_get("count")?;

        Ok(count)
    }
}
