//! Tracing initialization for the console binary.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize console logging once. `RUST_LOG` overrides the default filter;
/// the default stays quiet so diagnostics never interrupt a session.
pub fn init_telemetry(service_name: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::debug!(service.name = service_name, "telemetry initialized");
    });
}
