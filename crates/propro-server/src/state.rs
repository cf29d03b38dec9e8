use std::time::Instant;

use propro_store::Database;

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            started_at: Instant::now(),
        }
    }
}
