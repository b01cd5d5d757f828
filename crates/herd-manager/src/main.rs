//! Herd manager entry point.
mod config;
mod listener;
mod manager;

use std::sync::Arc;

use anyhow::Result;
use pasture_core::Field;

use config::ManagerConfig;
use listener::LoggingListener;
use manager::{HerdManager, WalkingHerd};

fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ManagerConfig::from_env();
    let field = Field::from_config(&config.pasture)?;
    field.add_listener(Arc::new(LoggingListener::new("field")));

    tracing::info!(
        columns = field.columns(),
        rows = field.rows(),
        animation = %field.animation(),
        "field ready"
    );

    let manager = WalkingHerd::default();
    manager.set_up_field(&field)?;
    manager.manage_herd(&field)?;

    tracing::info!(
        cattle = field.cattle().len(),
        calves = field.calves().len(),
        grass = field.grass().len(),
        "herd managed"
    );
    Ok(())
}
