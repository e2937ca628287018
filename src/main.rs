use person_service::config::PersonConfig;
use person_service::observability::init_tracing;
use person_service::services::init_metrics;
use person_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Recorder must be installed before any metrics are recorded.
    init_metrics();
    init_tracing("info");

    let config = PersonConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
