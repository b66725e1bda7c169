//! # Back Office Server
//!
//! Entry point: loads configuration, initializes logging, connects the
//! employee store and serves the admin HTTP API.

use anyhow::Result;
use tracing::info;

use backoffice_server::config::Settings;
use backoffice_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    backoffice_server::telemetry::init_tracing(&settings.log);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
