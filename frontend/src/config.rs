//! Startup configuration for the page.

use neonfolio_core::config::AppConfig;
use tracing::{info, warn};

/// Environment on native, compile-time values on wasm. A bad value never
/// stops the page: it is logged and only that key falls back to its default.
pub fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let loaded = AppConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let loaded = AppConfig::from_baked();

    for rejected in &loaded.rejected {
        warn!(key = %rejected.key, error = %rejected.error, "configuration value rejected, using its default");
    }
    let config = loaded.config;
    info!(
        theme = ?config.theme,
        scroll_offset = config.scroll_offset,
        rejected = loaded.rejected.len(),
        "configuration loaded"
    );
    config
}
