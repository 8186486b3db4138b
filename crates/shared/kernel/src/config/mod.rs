use config::{Config, Environment, File};
use jdash_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[jdash_derive::jdash_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering environment overrides over a file.
///
/// 1. **Base File**: `path`, or `dashboard` (any extension `config` understands)
///    in the working directory when `None`. The file is required.
/// 2. **Environment Overrides**: variables prefixed with `JDASH__`, nested keys
///    separated by `__` (`JDASH__DISCORD__CLIENT_ID` maps to `discord.client_id`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if
/// the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust,no_run
/// use jdash_kernel::config::load_config;
/// use jdash_kernel::domain::config::DashboardConfig;
///
/// let cfg: DashboardConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("discord.scopes")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
