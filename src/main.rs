//! Student service binary: loads config, opens SQLite, ensures the `students` table, serves HTTP.

use student_service::{build_app, connect, ensure_students_table, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_service=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.database).await?;
    ensure_students_table(&pool).await?;

    let app = build_app(AppState::new(pool.clone()), &config);
    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
