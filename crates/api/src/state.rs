use std::sync::Arc;

use folio_core::store::RecordStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the record store is read-only after load and shared
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// The dataset, loaded once at startup.
    pub store: Arc<RecordStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
