use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use dossier_api::config::ServerConfig;
use dossier_api::router::build_app_router;
use dossier_api::state::AppState;
use dossier_core::profile::ImagePolicy;

/// Absolute path to a file bundled with this crate, so tests pass
/// regardless of the working directory.
pub fn crate_path(rel: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(rel)
}

/// Build a test `ServerConfig` with safe defaults and crate-anchored paths.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        templates_dir: crate_path("templates"),
        static_dir: crate_path("favicon"),
        sample_fixture: crate_path("fixtures/sample.json"),
        sample_path: "/test".to_string(),
        profile_prefix: "/profile".to_string(),
        image_placeholder: ImagePolicy::Placeholder,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A lazily-connecting pool for routes that never touch the database.
///
/// No connection is attempted until a query runs, so these tests pass
/// without a Postgres server.
pub fn detached_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/dossier_unused")
        .expect("lazy pool from a well-formed URL")
}

/// Perform a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
