use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub struct DbPool(pub Pool<Sqlite>);

impl DbPool {
    /// Opens the shared pool. Connections are never recycled so an in-memory
    /// database lives as long as the pool does.
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(db_uri)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self(pool))
    }
}
