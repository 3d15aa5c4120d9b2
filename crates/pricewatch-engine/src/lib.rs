//! pricewatch engine - orchestration layer
//!
//! Coordinates the pure core with the outside world:
//! - [`fetch`]: the HTTP snapshot fetcher
//! - [`pipeline`]: fetch → persist → load prior → diff → report
//! - [`sink`]: where report text goes (stdout, report log, HTML file)
//! - [`config`]: validated application and FTP configuration
//! - [`upload`] and [`env_dump`]: operational collaborators

pub mod config;
pub mod env_dump;
pub mod fetch;
pub mod pipeline;
pub mod sink;
pub mod upload;

pub use self::config::{AppConfig, FtpConfig, LogMode};
pub use fetch::{FetchedData, HttpFetcher, SnapshotFetcher};
pub use pipeline::{run_pipeline, RunContext, RunOutcome, NO_PRIOR_MESSAGE};
pub use sink::{ConsoleFileSink, MemorySink, ReportLevel, ReportSink};
