//! Daily run command

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use pricewatch_core::logging_facility::{LoggingFacility, Profile};
use pricewatch_core::report::{render_json, EmptySections};
use pricewatch_engine::sink::HtmlTarget;
use pricewatch_engine::{
    run_pipeline, AppConfig, ConsoleFileSink, HttpFetcher, RunContext, RunOutcome,
    NO_PRIOR_MESSAGE,
};
use pricewatch_store::FsSnapshotStore;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Configuration file (default: ./pricewatch.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Feed URL
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    #[arg(long)]
    pub report_log: Option<PathBuf>,

    /// Run as if today were DATE (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Also write the report as an HTML page
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Render both sections even when one is empty
    #[arg(long)]
    pub show_empty: bool,

    /// Print the structured diff as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RunArgs, profile: Option<Profile>) -> Result<()> {
    let cfg = resolve_config(&args)?;

    let profile = match profile {
        Some(profile) => profile,
        None => cfg.log_profile.parse().map_err(anyhow::Error::msg)?,
    };
    let _logging = LoggingFacility::install(profile, cfg.log_file.as_deref())?;

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let fetcher = HttpFetcher::new(cfg.endpoint.clone(), cfg.http_timeout())?;
    let store = FsSnapshotStore::new(&cfg.snapshot_dir);

    let html = cfg.html_output.clone().map(|path| HtmlTarget {
        path,
        title: cfg.html_title.clone(),
    });
    let mut sink = ConsoleFileSink::open(&cfg.report_log, cfg.report_log_mode, html)?;
    if args.json {
        sink = sink.without_console();
    }

    let ctx = RunContext::new(today, cfg.report.clone());
    let outcome = run_pipeline(&ctx, &fetcher, &store, &mut sink)
        .with_context(|| format!("Price check for {} failed", today))?;

    if args.json {
        match &outcome {
            RunOutcome::Compared { diff, .. } => println!("{}", render_json(diff)?),
            RunOutcome::NoPriorSnapshot { .. } => println!("{}", NO_PRIOR_MESSAGE),
        }
    }
    Ok(())
}

fn resolve_config(args: &RunArgs) -> Result<AppConfig> {
    let mut cfg = AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(endpoint) = &args.endpoint {
        cfg.endpoint = endpoint.clone();
    }
    if let Some(dir) = &args.snapshot_dir {
        cfg.snapshot_dir = dir.clone();
    }
    if let Some(log) = &args.report_log {
        cfg.report_log = log.clone();
    }
    if let Some(html) = &args.html {
        cfg.html_output = Some(html.clone());
    }
    if args.show_empty {
        cfg.report.empty_sections = EmptySections::ShowWithCount;
    }

    cfg.validate()?;
    Ok(cfg)
}
