mod helpers;
mod ride_api;

use sqlx::{Executor, Pool, Sqlite};

use crate::{api::API, error::Error};

type Database = Sqlite;

/// SQLite-backed ride store. The pool is shared by every request.
#[derive(Debug, Clone)]
pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS Rides (
                rideID INTEGER PRIMARY KEY AUTOINCREMENT,
                startLat REAL NOT NULL,
                startLong REAL NOT NULL,
                endLat REAL NOT NULL,
                endLong REAL NOT NULL,
                riderName TEXT NOT NULL,
                driverName TEXT NOT NULL,
                driverVehicle TEXT NOT NULL,
                created TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
