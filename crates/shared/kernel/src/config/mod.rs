use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[ihub_derive::ihub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `service.toml`). If no path is provided,
///    it defaults to `"service"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with
///    `IHUB__`. Nested structures are accessed using double underscores
///    (e.g., `IHUB__SLOTS__IMS1` maps to `slots.ims1`).
///
/// This is how the persisted per-slot enablement flags reach the registry: the settings
/// layer owns the file, the registry only ever reads the deserialized snapshot.
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use ihub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ServiceConfig {
///     verbose: bool,
/// }
///
/// let cfg: ServiceConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("service"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("IHUB")
                .separator("__")
                .convert_case(config::Case::Snake), // Env var overrides (e.g., IHUB__SLOTS__IMS1)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
