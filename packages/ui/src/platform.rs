//! Shared constructors for all platforms.
//!
//! - **Web** (WASM + `web` feature): the session lives in `localStorage` via [`store::LocalStore`]
//! - **Desktop** (native): one file per key under the platform data directory via [`store::FileStore`]

use store::ClientConfig;

/// Create the platform-appropriate session store.
pub fn make_session_store() -> impl store::SessionStore + Clone {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("whisper");
        store::FileStore::new(base)
    }
}

/// Resolve the client configuration, falling back to defaults when it cannot be read.
pub fn resolve_config() -> ClientConfig {
    match api::load_client_config() {
        Ok(config) => {
            tracing::debug!(url = %config.api.registration_url, "loaded client configuration");
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}
