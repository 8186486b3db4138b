//! # Logger
//!
//! Global `tracing` subscriber setup for the native dashboard tools.
//!
//! Console output goes to **stderr** so that command output on stdout stays
//! machine-readable. An optional rolling log directory can be added; file
//! writes are non-blocking and flushed when the returned [`Logger`] drops.
//! `RUST_LOG` directives override the configured default level.
//!
//! ## Example
//!
//! ```rust
//! use jdash_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("jdash-shell")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    name: String,
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    #[cfg(feature = "json")]
    json: bool,
    env_filter: Option<String>,
}

/// Builder state: console output only.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Builder state: a log directory was configured.
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl private::Sealed for ConsoleOnly {}
impl private::Sealed for WithFile {}

/// Configures and installs the global tracing subscriber.
///
/// File-only knobs (`rotation`, `max_files`, `json`) are available once
/// [`LoggerBuilder::path`] has been called.
#[derive(Debug)]
pub struct LoggerBuilder<F: private::Sealed = ConsoleOnly> {
    config: LoggerConfig,
    file_state: PhantomData<F>,
}

impl<F: private::Sealed> LoggerBuilder<F> {
    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] say otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `jdash_admin_reveal=debug`).
    ///
    /// An invalid directive makes [`Self::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Writes rolling log files into `path`, named `<name>.<date>.log`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> LoggerBuilder<WithFile> {
        self.config.path = Some(path.into());
        LoggerBuilder { config: self.config, file_state: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. Keep it alive for the lifetime of the program;
    /// dropping it stops the non-blocking file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter directive, or when no output is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let config = self.config;
        validate_config(&config)?;
        let env_filter = build_env_filter(&config)?;

        let mut layers = Vec::new();

        if config.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = match &config.path {
            Some(path) => {
                fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create path: {}", path.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(config.rotation.clone())
                    .filename_prefix(&config.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(config.max_files)
                    .build(path)
                    .context("Failed to build rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                #[cfg(feature = "json")]
                let boxed = if config.json { file_layer.json().boxed() } else { file_layer.boxed() };
                #[cfg(not(feature = "json"))]
                let boxed = file_layer.boxed();

                layers.push(boxed);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %config.name, "Logger initialized");
        Ok(Logger { guard })
    }
}

impl LoggerBuilder<WithFile> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Structured JSON lines in the log files. Console output stays compact.
    #[cfg(feature = "json")]
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig {
                name: name.into(),
                console: true,
                path: None,
                level: LevelFilter::INFO,
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                #[cfg(feature = "json")]
                json: false,
                env_filter: None,
            },
            file_state: PhantomData,
        }
    }

    /// The file writer guard, present only when a log directory was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig) -> Result<(), LoggerError> {
    if config.name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
