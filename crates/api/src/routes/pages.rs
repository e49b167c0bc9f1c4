//! Route definitions for the biography pages.
//!
//! Paths come from configuration so a deployment can keep whichever of
//! the historical route shapes it was serving:
//!
//! ```text
//! GET /                          -> home
//! GET {sample_path}              -> sample        (default /test)
//! GET {profile_prefix}/{charid}  -> profile       (default /profile/{charid})
//! GET /favicon/*                 -> static files
//! ```

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::handlers::pages;
use crate::state::AppState;

/// Build the page routes from the configured paths.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let profile_path = format!("{}/{{charid}}", config.profile_prefix);

    Router::new()
        .route("/", get(pages::home))
        .route(&config.sample_path, get(pages::sample))
        .route(&profile_path, get(pages::profile))
        .nest_service("/favicon", ServeDir::new(&config.static_dir))
}
