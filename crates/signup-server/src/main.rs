mod form_data;
mod response;
mod routes;

use anyhow::{Context, Result};
use signup::{Config, FormState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let (config, config_error) = match Config::load_default() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(e) = config_error {
        warn!("Failed to load config: {:#}, using defaults", e);
    }
    let config = config.with_env_overrides(|key| std::env::var(key).ok());

    info!(
        reset_policy = ?config.form.reset_policy,
        "{} starting",
        config.project.name
    );

    let state = AppState::new(
        FormState::with_reset_policy(config.form.reset_policy),
        &config.project.name,
    );
    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
