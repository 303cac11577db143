//! Resolution of the client configuration.
//!
//! Native builds read `whisper.toml` from the working directory when it exists
//! and then let the environment (including a `.env` file) override the
//! registration endpoint. Browser builds have neither a filesystem nor an
//! environment at runtime, so the endpoint override is captured at build time.

use std::path::Path;

use store::ClientConfig;
use thiserror::Error;

/// Environment variable that overrides `[api] registration_url`.
pub const REGISTRATION_URL_ENV: &str = "WHISPER_REGISTRATION_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Load `path` if it exists, otherwise start from the defaults.
pub fn load_file(path: &Path) -> Result<ClientConfig, ConfigError> {
    if !path.exists() {
        return Ok(ClientConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    ClientConfig::from_toml(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Apply an endpoint override. Blank values are ignored.
pub fn with_registration_url(mut config: ClientConfig, url: Option<&str>) -> ClientConfig {
    if let Some(url) = url.map(str::trim).filter(|url| !url.is_empty()) {
        config.api.registration_url = url.to_string();
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let config = load_file(Path::new(ClientConfig::filename()))?;
    let url = std::env::var(REGISTRATION_URL_ENV).ok();
    Ok(with_registration_url(config, url.as_deref()))
}

#[cfg(target_arch = "wasm32")]
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    Ok(with_registration_url(
        ClientConfig::default(),
        option_env!("WHISPER_REGISTRATION_URL"),
    ))
}
