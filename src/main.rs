use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use contact_relay::config::Config;
use contact_relay::mailer::mailgun::MailgunMailer;
use contact_relay::store::mongo::MongoStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting contact-relay");
    tracing::info!(
        "Allowing cross-origin requests from {}",
        config.frontend_url.to_str().unwrap_or("-")
    );

    // A malformed URI is a configuration error and aborts. An unreachable
    // server is not: the ping outcome is logged and requests arriving while
    // the database is down fail at the persistence step instead.
    let store = MongoStore::connect(&config.mongodb_uri)
        .await
        .expect("Invalid MONGODB_URI");
    match store.ping().await {
        Ok(()) => tracing::info!("MongoDB connected"),
        Err(e) => tracing::error!("Error connecting to MongoDB: {e}"),
    }

    let mailer = MailgunMailer::new(config.mailgun_api_key.clone(), config.mailgun_domain.clone());

    let addr = SocketAddr::new(config.host, config.port);
    let app = contact_relay::build_app(Arc::new(store), Arc::new(mailer), config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Backend server running on http://{addr}");

    axum::serve(listener, app)
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
