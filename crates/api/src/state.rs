use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and everything else is
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: souk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Carries search index updates to the background indexer.
    pub event_bus: Arc<souk_events::EventBus>,
}
