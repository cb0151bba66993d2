use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;

use ubuntu_reportd::config::Config;
use ubuntu_reportd::logging;
use ubuntu_reportd::submission::recorder::FileRecorder;
use ubuntu_reportd::submission::validate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Flushes the log file on drop, so it lives until main returns
    let _log_guard = logging::init(&config)?;

    tracing::info!("Starting ubuntu-reportd {}", env!("CARGO_PKG_VERSION"));

    validate::init()?;

    let recorder = FileRecorder::open(&config.record_file).await?;
    tracing::info!("Recording submissions to {}", recorder.path().display());

    let addr = SocketAddr::new(config.host, config.port);
    let app = ubuntu_reportd::build_app(config, Arc::new(recorder));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
