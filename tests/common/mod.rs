#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::{Pool, Sqlite};
use tokio_test::assert_ok;
use tower::ServiceExt;

use rides::db::DbPool;
use rides::engine::Engine;
use rides::server::app;

pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
}

/// A router backed by a fresh in-memory database.
pub async fn spawn() -> TestApp {
    let DbPool(pool) = assert_ok!(DbPool::new("sqlite::memory:", 1).await);
    let engine = assert_ok!(Engine::new(pool.clone()).await);

    TestApp {
        router: app(engine),
        pool,
    }
}

pub fn ride_body(rider_name: &str) -> Value {
    json!({
        "start_lat": 0,
        "start_long": 0,
        "end_lat": 0,
        "end_long": 1,
        "rider_name": rider_name,
        "driver_name": "andi",
        "driver_vehicle": "avanza"
    })
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = self.router.clone().oneshot(req).await.expect("resp");
        let status = resp.status();
        let body = hyper::body::to_bytes(resp.into_body()).await.expect("body");

        (status, body.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("req");
        let (status, body) = self.send(req).await;

        (status, serde_json::from_slice(&body).expect("json"))
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("req");
        let (status, body) = self.send(req).await;

        (status, serde_json::from_slice(&body).expect("json"))
    }

    pub async fn create_rides(&self, count: usize) {
        for i in 0..count {
            let (_, body) = self.post_json("/rides", &ride_body(&format!("rider-{}", i))).await;
            assert!(body.is_array(), "unexpected create response: {}", body);
        }
    }

    pub async fn drop_rides_table(&self) {
        assert_ok!(sqlx::query("DROP TABLE Rides").execute(&self.pool).await);
    }
}

pub fn assert_error(status: StatusCode, body: &Value, code: &str, message: &str) {
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error_code"], code, "body: {}", body);
    assert_eq!(body["message"], message, "body: {}", body);
}
