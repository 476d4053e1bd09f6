use sqlx::{sqlite::SqliteRow, Row};

use crate::entities::Ride;

pub const RIDE_COLUMNS: &str = "rideID, startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle, created";

pub fn ride_from_row(row: &SqliteRow) -> Result<Ride, sqlx::Error> {
    Ok(Ride {
        ride_id: row.try_get("rideID")?,
        start_lat: row.try_get("startLat")?,
        start_long: row.try_get("startLong")?,
        end_lat: row.try_get("endLat")?,
        end_long: row.try_get("endLong")?,
        rider_name: row.try_get("riderName")?,
        driver_name: row.try_get("driverName")?,
        driver_vehicle: row.try_get("driverVehicle")?,
        created: row.try_get("created")?,
    })
}
