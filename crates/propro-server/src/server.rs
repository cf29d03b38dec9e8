use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use propro_store::Database;

use crate::config::ServerConfig;
use crate::health;
use crate::routes;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::notes::router())
        .merge(routes::links::router())
        .merge(routes::tasks::router())
        .merge(routes::expenses::router())
        .route("/api/health", get(health::health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Create and start the server. Returns a handle to shut it down.
pub async fn start(config: ServerConfig, db: Database) -> Result<ServerHandle, std::io::Error> {
    let state = AppState::new(db);
    let router = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    let token = CancellationToken::new();
    let shutdown = token.clone();
    let task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .ok();
    });

    tracing::info!(port = local_addr.port(), "ProductivePro server started");

    Ok(ServerHandle {
        port: local_addr.port(),
        token,
        task,
    })
}

/// Handle returned by `start()` — keeps the serve task alive.
pub struct ServerHandle {
    pub port: u16,
    token: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Signal the server to stop accepting connections and drain.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Wait for the serve task to finish.
    pub async fn stopped(self) {
        self.task.await.ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn server_starts_and_serves_health() {
        let db = Database::in_memory().unwrap();
        let config = ServerConfig::default(); // port 0

        let handle = start(config, db).await.unwrap();
        assert!(handle.port > 0);

        let url = format!("http://127.0.0.1:{}/api/health", handle.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "ok");

        handle.shutdown();
        handle.stopped().await;
    }

    #[test]
    fn build_router_creates_routes() {
        let state = AppState::new(Database::in_memory().unwrap());
        let _router = build_router(state);
        // If this doesn't panic, the router was built successfully
    }
}
