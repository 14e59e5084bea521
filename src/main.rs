use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use isletme_api::config::{init_tracing, load_config};
use isletme_api::db;
use isletme_api::storage::{MemStorage, SqlStorage, Storage};
use isletme_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.log_level, config.log_json);

    let storage: Arc<dyn Storage> = match config.database_url.as_deref() {
        Some(url) => {
            let conn = db::establish_connection(url)
                .await
                .context("database connection failed")?;
            if config.auto_migrate {
                db::run_migrations(&conn)
                    .await
                    .context("database migration failed")?;
            }
            info!("storage backend: database");
            Arc::new(SqlStorage::new(Arc::new(conn)))
        }
        None => {
            warn!("DATABASE_URL not set; using the seeded in-memory store (data is not persisted)");
            Arc::new(MemStorage::seeded())
        }
    };

    let addr = config.bind_addr();
    let state = AppState::new(storage, config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to install ctrl-c handler: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => warn!("failed to install SIGTERM handler: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
