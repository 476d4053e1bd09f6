mod handlers;
pub mod params;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::error::{server_error, Error};
use crate::server::handlers::{health, rides};

pub use crate::api::{DynAPI, API};

/// Builds the router. The store is attached once and shared by every request.
pub fn app<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/health", get(health::check))
        .route("/rides", post(rides::create).get(rides::list))
        .route("/rides/:id", get(rides::find))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = app(api);

    let server = axum::Server::try_bind(&addr).map_err(|err| {
        tracing::error!(error = %err, %addr, "failed to bind");
        server_error()
    })?;

    tracing::info!("listening on {}", addr);

    server.serve(app.into_make_service()).await.map_err(|err| {
        tracing::error!(error = %err, "server error");
        server_error()
    })
}
