//! Daily run pipeline
//!
//! fetch → persist today → load yesterday → diff → render → emit
//!
//! "Yesterday" is always the calendar day before `today`, never the most
//! recent earlier run. When that day has no usable snapshot the run ends
//! with a warning and the diff engine is never invoked.

use crate::fetch::SnapshotFetcher;
use crate::sink::{ReportLevel, ReportSink};
use chrono::NaiveDate;
use pricewatch_core::errors::Result;
use pricewatch_core::model::prior_date;
use pricewatch_core::report::{render_text, ReportStyle};
use pricewatch_core::types::RunId;
use pricewatch_core::{diff, log_op_end, log_op_error, log_op_start, DiffResult};
use pricewatch_store::{FsSnapshotStore, StoredSnapshot};
use std::time::Instant;

pub const NO_PRIOR_MESSAGE: &str = "No snapshot available for yesterday; cannot compare.";

/// Inputs of one run
#[derive(Debug, Clone)]
pub struct RunContext {
    pub today: NaiveDate,
    pub style: ReportStyle,
    pub run_id: RunId,
}

impl RunContext {
    pub fn new(today: NaiveDate, style: ReportStyle) -> Self {
        Self {
            today,
            style,
            run_id: RunId::new(),
        }
    }
}

/// How a run ended when nothing failed
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Today's snapshot was stored; there was nothing to compare it with
    NoPriorSnapshot { stored: StoredSnapshot },
    /// Today's snapshot was compared with yesterday's and reported
    Compared {
        stored: StoredSnapshot,
        diff: DiffResult,
        report: String,
    },
}

impl RunOutcome {
    pub fn stored(&self) -> &StoredSnapshot {
        match self {
            RunOutcome::NoPriorSnapshot { stored } | RunOutcome::Compared { stored, .. } => stored,
        }
    }
}

/// Execute one run for `ctx.today`
///
/// # Errors
///
/// Fetch, store and sink faults propagate unchanged. A missing or empty
/// prior snapshot is not an error.
pub fn run_pipeline(
    ctx: &RunContext,
    fetcher: &dyn SnapshotFetcher,
    store: &FsSnapshotStore,
    sink: &mut dyn ReportSink,
) -> Result<RunOutcome> {
    let span = tracing::info_span!("run", run_id = %ctx.run_id, today = %ctx.today);
    let _entered = span.enter();

    let start = Instant::now();
    log_op_start!("run_pipeline", snapshot_date = %ctx.today);

    let result = run_inner(ctx, fetcher, store, sink);
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(RunOutcome::Compared { diff, .. }) => log_op_end!(
            "run_pipeline",
            duration_ms = duration_ms,
            risers = diff.risers.len(),
            fallers = diff.fallers.len()
        ),
        Ok(RunOutcome::NoPriorSnapshot { .. }) => {
            log_op_end!("run_pipeline", duration_ms = duration_ms, compared = false)
        }
        Err(e) => log_op_error!("run_pipeline", e, duration_ms = duration_ms),
    }
    result
}

fn run_inner(
    ctx: &RunContext,
    fetcher: &dyn SnapshotFetcher,
    store: &FsSnapshotStore,
    sink: &mut dyn ReportSink,
) -> Result<RunOutcome> {
    let fetched = fetcher.fetch()?;
    let stored = store.write(ctx.today, &fetched.entities)?;

    let previous = match prior_date(ctx.today) {
        Some(yesterday) => store.read(yesterday)?,
        None => None,
    };
    let previous = match previous {
        Some(entities) if !entities.is_empty() => entities,
        _ => {
            sink.emit(ReportLevel::Warning, NO_PRIOR_MESSAGE)?;
            return Ok(RunOutcome::NoPriorSnapshot { stored });
        }
    };

    let diff = diff(&previous, &fetched.entities);
    let report = render_text(&diff, &fetched.groups, ctx.today, &ctx.style);
    sink.publish(&report)?;

    Ok(RunOutcome::Compared {
        stored,
        diff,
        report,
    })
}
