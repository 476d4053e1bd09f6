use serde::{Deserialize, Serialize};

/// A persisted ride. Field names match the `Rides` table columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: String,
}

/// A validated ride that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}
