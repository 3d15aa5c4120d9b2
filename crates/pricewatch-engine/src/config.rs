//! Application and FTP configuration
//!
//! Both structs are loaded through the `config` crate and validated once at
//! load time; everything downstream receives an already-checked value.
//!
//! Precedence for [`AppConfig`], lowest first: built-in defaults, the
//! optional `pricewatch.toml` (or an explicit file), `PRICEWATCH_*`
//! environment variables. Nested keys use `__`, e.g.
//! `PRICEWATCH_REPORT__EMPTY_SECTIONS=show_with_count`.

use chrono::format::{Item, StrftimeItems};
use config::{Config, ConfigError, Environment, File};
use pricewatch_core::errors::{PriceWatchError, PwError, Result};
use pricewatch_core::report::ReportStyle;
use pricewatch_core_types::Sensitive;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://fantasy.premierleague.com/api/bootstrap-static/";
pub const DEFAULT_CONFIG_FILE: &str = "pricewatch";
pub const ENV_PREFIX: &str = "PRICEWATCH";
pub const FTP_ENV_PREFIX: &str = "FTP";
pub const DEFAULT_FTP_PORT: u16 = 21;

/// Environment overrides used instead of the process environment (tests)
pub type EnvOverrides = config::Map<String, String>;

/// How the report log is opened at the start of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogMode {
    /// Keep the history of every run
    #[default]
    Append,
    /// Keep only the latest run
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feed URL returning `{ "elements": [...], "teams": [...] }`
    pub endpoint: String,
    pub snapshot_dir: PathBuf,
    pub report_log: PathBuf,
    pub report_log_mode: LogMode,
    /// Where to write the HTML rendering of the report, if anywhere
    pub html_output: Option<PathBuf>,
    pub html_title: String,
    pub http_timeout_secs: u64,
    /// `dev`, `prod` or `test`
    pub log_profile: String,
    /// Diagnostic log file; the report log is separate
    pub log_file: Option<PathBuf>,
    pub report: ReportStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            snapshot_dir: PathBuf::from("fpl_snapshots"),
            report_log: PathBuf::from("logs/fpl_price_changes.log"),
            report_log_mode: LogMode::Append,
            html_output: None,
            html_title: "FPL Price Changes".to_string(),
            http_timeout_secs: 30,
            log_profile: "dev".to_string(),
            log_file: None,
            report: ReportStyle::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default file, an explicit file, and the process environment
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when a source cannot be read or a value fails validation.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_with(file, None)
    }

    /// Like [`AppConfig::load`], with an explicit environment map in place
    /// of the process environment
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::load`].
    pub fn load_with(file: Option<&Path>, env: Option<EnvOverrides>) -> Result<Self> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let cfg: AppConfig = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| config_error("app", e))?;

        cfg.validate()?;
        tracing::debug!(?cfg, "Configuration loaded");
        Ok(cfg)
    }

    /// Check the invariants every run relies on
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(invalid("endpoint", "must not be empty"));
        }
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(invalid("snapshot_dir", "must not be empty"));
        }
        if self.report_log.as_os_str().is_empty() {
            return Err(invalid("report_log", "must not be empty"));
        }
        if self.http_timeout_secs == 0 {
            return Err(invalid("http_timeout_secs", "must be greater than zero"));
        }
        if StrftimeItems::new(&self.report.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid(
                "report.date_format",
                &format!("`{}` is not a valid date format", self.report.date_format),
            ));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Credentials and address of the FTP server receiving uploads
#[derive(Debug, Clone)]
pub struct FtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Sensitive<String>,
}

#[derive(Deserialize)]
struct RawFtpConfig {
    host: Option<String>,
    port: Option<u16>,
    user: Option<String>,
    pass: Option<Sensitive<String>>,
}

impl FtpConfig {
    /// Load from `FTP_HOST`, `FTP_PORT`, `FTP_USER` and `FTP_PASS`
    ///
    /// # Errors
    ///
    /// - `MissingConfig`: a required variable is unset or empty
    /// - `InvalidConfig`: `FTP_PORT` is not a port number
    pub fn from_env() -> Result<Self> {
        Self::from_source(None)
    }

    /// Load from an explicit variable map (keys like `FTP_HOST`)
    ///
    /// # Errors
    ///
    /// Same as [`FtpConfig::from_env`].
    pub fn from_source(env: Option<EnvOverrides>) -> Result<Self> {
        let raw: RawFtpConfig = Config::builder()
            .add_source(Environment::with_prefix(FTP_ENV_PREFIX).source(env))
            .build()
            .and_then(|c| c.try_deserialize::<RawFtpConfig>())
            .map_err(|e| config_error("ftp", e))?;

        let host = required(raw.host, "FTP_HOST")?;
        let user = required(raw.user, "FTP_USER")?;
        let password = match raw.pass {
            Some(pass) if !pass.expose().is_empty() => pass,
            _ => return Err(missing("FTP_PASS")),
        };

        Ok(Self {
            host,
            port: raw.port.unwrap_or(DEFAULT_FTP_PORT),
            user,
            password,
        })
    }

    /// `host:port`, as handed to the FTP connector
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(value: Option<String>, key: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(key)),
    }
}

fn missing(key: &str) -> PwError {
    PriceWatchError::MissingConfig {
        key: key.to_string(),
    }
    .into()
}

fn invalid(key: &str, reason: &str) -> PwError {
    PriceWatchError::InvalidConfig {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn config_error(scope: &str, err: ConfigError) -> PwError {
    invalid(scope, &err.to_string())
}
