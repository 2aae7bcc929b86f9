use std::sync::Arc;
use tracing::{error, info};

use trip_planner::config::Config;
use trip_planner::geocoding::OpenCageClient;
use trip_planner::ui::{make_config, App, AppContext};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Set OPENCAGE_API_KEY in the environment or in a .env file");
            std::process::exit(1);
        }
    };

    info!(
        "Starting trip planner against {} (limit {})",
        config.opencage_base_url, config.suggestion_limit
    );

    let geocoder = Arc::new(OpenCageClient::from_config(&config));
    let app_context = AppContext::new(config, geocoder);

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}
