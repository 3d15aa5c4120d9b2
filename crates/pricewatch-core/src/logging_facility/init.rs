//! Logging installation
//!
//! The subscriber is installed as the default for the constructing thread
//! and removed again when the returned [`LoggingFacility`] is dropped.
//! Nothing is registered globally, so tests and embedders can install
//! their own facility side by side.

use crate::errors::{io_error, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No console output; pair with test capture
    Test,
}

impl Profile {
    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "pricewatch=debug",
            Profile::Production | Profile::Test => "pricewatch=info",
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown log profile: {}", other)),
        }
    }
}

/// Installed logging facility
///
/// Holds the subscriber guard. Dropping the facility uninstalls the
/// subscriber and closes the log file.
pub struct LoggingFacility {
    profile: Profile,
    _guard: DefaultGuard,
}

impl LoggingFacility {
    /// Install the subscriber for `profile`, optionally mirroring events
    /// into `log_file` (opened in append mode, parents created).
    ///
    /// # Errors
    ///
    /// - `Io`: the log file or its directory cannot be created
    pub fn install(profile: Profile, log_file: Option<&Path>) -> Result<Self> {
        let file_writer = match log_file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)
                            .map_err(|e| io_error("create_log_dir", e))?;
                    }
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| io_error("open_log_file", e))?;
                Some(Mutex::new(file))
            }
            None => None,
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));

        let guard = match profile {
            Profile::Development => tracing::subscriber::set_default(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .with(file_writer.map(file_layer)),
            ),
            Profile::Production => tracing::subscriber::set_default(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .with(file_writer.map(file_layer)),
            ),
            Profile::Test => tracing::subscriber::set_default(
                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_writer.map(file_layer)),
            ),
        };

        Ok(Self {
            profile,
            _guard: guard,
        })
    }

    /// The profile this facility was installed with
    pub fn profile(&self) -> Profile {
        self.profile
    }
}

/// Plain-text layer for the mirrored log file, built per subscriber stack
fn file_layer<S>(writer: Mutex<File>) -> fmt::Layer<S, DefaultFields, Format, Mutex<File>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
}
