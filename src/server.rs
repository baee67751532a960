//! Web server startup using axum

use crate::config::Config;
use crate::email::EmailService;
use crate::routes::{self, AppState};

/// Start the web server
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let email = EmailService::new(&config.email)?;

    // Verify transport configuration in the background; requests are
    // accepted either way.
    let diagnostic = email.clone();
    tokio::task::spawn_blocking(move || diagnostic.verify_connection());

    tracing::info!(images_dir = %config.server.images_dir, "Serving images");
    if config.server.production {
        tracing::info!(
            bundle_dir = %config.server.client_bundle_dir,
            "Production mode, serving client bundle"
        );
    }

    let state = AppState { config, email };
    let app = routes::router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
