use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the process's single long-lived store handle; handlers receive
/// it through extraction rather than reaching for a global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dossier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
