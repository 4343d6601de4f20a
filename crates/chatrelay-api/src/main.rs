//! Chatrelay REST API entry point.
//!
//! Binary name: `chatrelay`
//!
//! Loads environment configuration, initializes the database gateway,
//! and serves the chat API until Ctrl+C or SIGTERM.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatrelay_api::http;
use chatrelay_api::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "chatrelay", about = "HTTP API for chat sessions and messages")]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "CHATRELAY_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "CHATRELAY_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the variables may come from the
    // process environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Fails here if SUPABASE_URL or SUPABASE_KEY is absent.
    let state = AppState::init()?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Chat API listening on http://{addr}");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
