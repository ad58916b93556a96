use std::error::Error;
use std::path::Path;

use tracing::info;

use telecare::config::load_config;
use telecare::storage::FileStorageAdapter;
use telecare::store::AppStore;

/// Smoke binary: bootstraps the store against on-disk storage and logs a
/// summary of what a UI would see. The real consumer is a mobile shell that
/// links the library.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = load_config(Path::new("config.yaml"))?;
    info!(path = %config.storage.path, "starting telecare core");

    let adapter = FileStorageAdapter::new(&config.storage.path)?;
    let store = AppStore::new(adapter);
    store.load().await;

    match store.current_user() {
        Some(user) => info!(id = user.id(), name = user.name(), "active session"),
        None => info!("no active session"),
    }
    info!(
        appointments = store.all_appointments().len(),
        visible = store.my_appointments().len(),
        metrics = store.health_metrics().len(),
        lab_results = store.lab_results().len(),
        health_records = store.health_records().len(),
        "state loaded"
    );

    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
