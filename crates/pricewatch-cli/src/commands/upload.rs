//! FTP upload command
//!
//! Upload problems are reported in the log and never fail the process: the
//! upload runs after the report and must not mark a good run as failed.

use anyhow::Result;
use clap::Args;
use pricewatch_engine::upload::{upload_file, FtpTransfer};
use pricewatch_engine::FtpConfig;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Local file to upload
    pub local: PathBuf,

    /// Name to store the file under on the server
    pub remote: String,
}

pub fn execute(args: UploadArgs) -> Result<()> {
    let config = match FtpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(err.code = e.code(), "FTP upload skipped: {}", e);
            return Ok(());
        }
    };

    let mut transfer = FtpTransfer::new(config);
    if let Err(e) = upload_file(&mut transfer, &args.local, &args.remote) {
        tracing::error!(err.code = e.code(), "Error uploading file to FTP: {}", e);
    }
    Ok(())
}
