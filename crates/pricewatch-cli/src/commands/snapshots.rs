//! Snapshot inspection commands

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use pricewatch_core::model::format_price;
use pricewatch_engine::AppConfig;
use pricewatch_store::FsSnapshotStore;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SnapshotsArgs {
    #[command(subcommand)]
    pub command: SnapshotsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SnapshotsCommand {
    /// List the dates that have a stored snapshot
    List(StoreArgs),
    /// Print the entities stored for one date
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Snapshot directory (default: from configuration)
    #[arg(long)]
    pub snapshot_dir: Option<PathBuf>,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Snapshot date (YYYY-MM-DD)
    pub date: NaiveDate,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub fn execute(args: SnapshotsArgs) -> Result<()> {
    match args.command {
        SnapshotsCommand::List(store_args) => execute_list(store_args),
        SnapshotsCommand::Show(show_args) => execute_show(show_args),
    }
}

fn open_store(args: &StoreArgs) -> Result<FsSnapshotStore> {
    let root = match &args.snapshot_dir {
        Some(dir) => dir.clone(),
        None => {
            AppConfig::load(args.config.as_deref())
                .context("Failed to load configuration")?
                .snapshot_dir
        }
    };
    Ok(FsSnapshotStore::new(root))
}

fn execute_list(args: StoreArgs) -> Result<()> {
    let store = open_store(&args)?;
    let dates = store.dates()?;

    if dates.is_empty() {
        println!("No snapshots in {}", store.root().display());
        return Ok(());
    }
    for date in dates {
        println!("{}", date);
    }
    Ok(())
}

fn execute_show(args: ShowArgs) -> Result<()> {
    let store = open_store(&args.store)?;
    let Some(entities) = store.read(args.date)? else {
        bail!("No snapshot stored for {}", args.date);
    };

    for entity in &entities {
        println!(
            "{:>6}  {:<24} team {:>3}  {}",
            entity.id,
            entity.web_name,
            entity.team,
            format_price(entity.now_cost)
        );
    }
    println!("{} entities", entities.len());
    Ok(())
}
