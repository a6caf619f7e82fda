use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Errors raised while assembling the layered configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layering strategy:
/// 1. **Base file**: settings from a file (e.g. `server.toml`), when one exists.
///    The file is optional; every field has a serde default, so a bare
///    checkout starts with no configuration at all.
/// 2. **Environment overrides**: values from variables prefixed with `IHUB__`.
///    Nested keys use double underscores (e.g. `IHUB__SERVER__PORT` maps to
///    `server.port`).
///
/// # Errors
/// Returns an error if the file content or an override does not match the
/// structure of `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix("IHUB").separator("__").convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}
