use std::path::PathBuf;

use clap::Parser;

use propro_server::ServerConfig;
use propro_store::Database;

#[derive(Parser, Debug)]
#[command(name = "propro", about = "ProductivePro REST API server")]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 4000)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let db_path = args.db.unwrap_or_else(default_db_path);
    let db = Database::open(&db_path).expect("failed to open database");

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    let handle = propro_server::start(config, db)
        .await
        .expect("failed to start server");

    tracing::info!(port = handle.port, "ProductivePro ready");

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");

    tracing::info!("shutting down");
    handle.shutdown();
    handle.stopped().await;
}

fn default_db_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join(".propro")
        .join("propro.db")
}
