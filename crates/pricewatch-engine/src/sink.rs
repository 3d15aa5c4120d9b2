//! Report sinks
//!
//! A sink is built once at process start and handed to the pipeline. It
//! receives the rendered report and the pipeline's user-facing messages.

use crate::config::LogMode;
use pricewatch_core::errors::{io_error, Result};
use pricewatch_core::report::render_html;
use pricewatch_store::snapshot::atomic_write;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
}

/// Destination for report text
pub trait ReportSink {
    /// Emit one message
    ///
    /// # Errors
    ///
    /// `Io` when a destination cannot be written.
    fn emit(&mut self, level: ReportLevel, text: &str) -> Result<()>;

    /// Emit a complete rendered report
    ///
    /// # Errors
    ///
    /// Same as [`ReportSink::emit`].
    fn publish(&mut self, report: &str) -> Result<()> {
        self.emit(ReportLevel::Info, report)
    }
}

/// Where and under which title the HTML rendering is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTarget {
    pub path: PathBuf,
    pub title: String,
}

/// Console + report log file, plus an optional HTML page
pub struct ConsoleFileSink<W: Write = Stdout> {
    console: Option<W>,
    log: File,
    log_path: PathBuf,
    html: Option<HtmlTarget>,
}

impl ConsoleFileSink<Stdout> {
    /// Sink writing to stdout
    ///
    /// # Errors
    ///
    /// `Io` when the report log cannot be opened.
    pub fn open(log_path: &Path, mode: LogMode, html: Option<HtmlTarget>) -> Result<Self> {
        Self::with_console(io::stdout(), log_path, mode, html)
    }
}

impl<W: Write> ConsoleFileSink<W> {
    /// Sink writing to an arbitrary console writer
    ///
    /// # Errors
    ///
    /// `Io` when the report log cannot be opened.
    pub fn with_console(
        console: W,
        log_path: &Path,
        mode: LogMode,
        html: Option<HtmlTarget>,
    ) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| io_error("open_report_log", e).with_path(parent))?;
            }
        }

        let mut options = OpenOptions::new();
        match mode {
            LogMode::Append => options.create(true).append(true),
            LogMode::Truncate => options.create(true).write(true).truncate(true),
        };
        let log = options
            .open(log_path)
            .map_err(|e| io_error("open_report_log", e).with_path(log_path))?;

        Ok(Self {
            console: Some(console),
            log,
            log_path: log_path.to_path_buf(),
            html,
        })
    }

    /// Stop echoing to the console; the report log and HTML still receive output
    pub fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    fn write_log(&mut self, text: &str) -> Result<()> {
        writeln!(self.log, "{}", text)
            .and_then(|()| self.log.flush())
            .map_err(|e| io_error("write_report_log", e).with_path(&self.log_path))
    }

    fn write_console(&mut self, text: &str) -> Result<()> {
        if let Some(console) = self.console.as_mut() {
            writeln!(console, "{}", text)
                .and_then(|()| console.flush())
                .map_err(|e| io_error("write_console", e))?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleFileSink<W> {
    fn emit(&mut self, level: ReportLevel, text: &str) -> Result<()> {
        match level {
            ReportLevel::Info => tracing::info!(lines = text.lines().count(), "Report output"),
            ReportLevel::Warning => tracing::warn!("{}", text),
        }
        self.write_console(text)?;
        self.write_log(text)
    }

    fn publish(&mut self, report: &str) -> Result<()> {
        self.emit(ReportLevel::Info, report)?;

        if let Some(target) = &self.html {
            let page = render_html(report, &target.title);
            atomic_write(&target.path, page.as_bytes())
                .map_err(|e| e.with_op("write_html_report").with_path(&target.path))?;
            tracing::info!(path = %target.path.display(), "HTML report written");
        }
        Ok(())
    }
}

/// In-memory sink for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub messages: Vec<(ReportLevel, String)>,
    pub reports: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|(level, _)| *level == ReportLevel::Warning)
            .map(|(_, text)| text.as_str())
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, level: ReportLevel, text: &str) -> Result<()> {
        self.messages.push((level, text.to_string()));
        Ok(())
    }

    fn publish(&mut self, report: &str) -> Result<()> {
        self.reports.push(report.to_string());
        self.emit(ReportLevel::Info, report)
    }
}
