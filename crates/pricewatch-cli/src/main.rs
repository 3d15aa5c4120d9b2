//! pricewatch CLI
//!
//! Daily price-change check for the FPL feed, plus the operational helpers
//! that run alongside it.

use clap::{Parser, Subcommand};
use pricewatch_core::logging_facility::{LoggingFacility, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "pricewatch")]
#[command(about = "pricewatch - daily FPL price change reports", long_about = None)]
struct Cli {
    /// Log profile: dev, prod or test (run defaults to the configured one)
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch today's snapshot and report changes since yesterday
    Run(commands::run::RunArgs),
    /// Inspect stored snapshots
    Snapshots(commands::snapshots::SnapshotsArgs),
    /// Upload a file to the configured FTP server
    Upload(commands::upload::UploadArgs),
    /// Write the process environment and arguments to a file
    EnvDump(commands::env_dump::EnvDumpArgs),
}

fn main() {
    // A missing .env file is the normal case
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args, cli.log_profile),
        Commands::Snapshots(args) => {
            logged(cli.log_profile, || commands::snapshots::execute(args))
        }
        Commands::Upload(args) => logged(cli.log_profile, || commands::upload::execute(args)),
        Commands::EnvDump(args) => logged(cli.log_profile, || commands::env_dump::execute(args)),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn logged(
    profile: Option<Profile>,
    command: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let _logging = LoggingFacility::install(profile.unwrap_or(Profile::Development), None)?;
    command()
}
