//! TUI-less "health" command.

use std::error::Error;

use tracing::warn;

use crate::api::HttpBackend;

pub async fn run_health(server_url: String) -> Result<(), Box<dyn Error>> {
    let backend = HttpBackend::new(server_url);
    match backend.health().await {
        Ok(health) => {
            println!("{}: {}", backend.base_url(), health.status);
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, "Health check failed");
            eprintln!("❌ {} is not healthy: {err}", backend.base_url());
            std::process::exit(1);
        }
    }
}
