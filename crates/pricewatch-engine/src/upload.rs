//! File upload to an FTP server

use crate::config::FtpConfig;
use pricewatch_core::errors::{io_error, PwError, PwErrorKind, Result};
use pricewatch_core::{log_op_end, log_op_error, log_op_start};
use std::fs::File;
use std::path::Path;
use std::time::Instant;
use suppaftp::types::FileType;
use suppaftp::{FtpError, FtpStream};

/// Moves a local file to a remote name
pub trait FileTransfer {
    /// # Errors
    ///
    /// `Io` when the local file cannot be opened; `ExternalService` when the
    /// remote side rejects the transfer.
    fn upload(&mut self, local: &Path, remote_name: &str) -> Result<()>;
}

/// One connection per upload: connect, login, store, quit
#[derive(Debug, Clone)]
pub struct FtpTransfer {
    config: FtpConfig,
}

impl FtpTransfer {
    pub fn new(config: FtpConfig) -> Self {
        Self { config }
    }
}

impl FileTransfer for FtpTransfer {
    fn upload(&mut self, local: &Path, remote_name: &str) -> Result<()> {
        let mut file =
            File::open(local).map_err(|e| io_error("ftp_upload", e).with_path(local))?;

        let mut ftp = FtpStream::connect(self.config.address())
            .map_err(|e| ftp_error("ftp_connect", e))?;
        ftp.login(self.config.user.as_str(), self.config.password.expose().as_str())
            .map_err(|e| ftp_error("ftp_login", e))?;

        let cwd = ftp.pwd().map_err(|e| ftp_error("ftp_pwd", e))?;
        tracing::info!(host = %self.config.host, "Current FTP directory: {}", cwd);

        ftp.transfer_type(FileType::Binary)
            .map_err(|e| ftp_error("ftp_upload", e))?;
        let bytes = ftp
            .put_file(remote_name, &mut file)
            .map_err(|e| ftp_error("ftp_upload", e))?;
        tracing::info!(
            bytes = bytes,
            "Uploaded {} to FTP as {}.",
            local.display(),
            remote_name
        );

        ftp.quit().map_err(|e| ftp_error("ftp_quit", e))
    }
}

/// Upload with operation logging around the transfer
///
/// # Errors
///
/// Whatever the transfer reports.
pub fn upload_file(
    transfer: &mut dyn FileTransfer,
    local: &Path,
    remote_name: &str,
) -> Result<()> {
    let start = Instant::now();
    log_op_start!("upload_file", path = %local.display(), remote = remote_name);

    let result = transfer.upload(local, remote_name);
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("upload_file", duration_ms = duration_ms),
        Err(e) => log_op_error!("upload_file", e, duration_ms = duration_ms),
    }
    result
}

fn ftp_error(op: &str, err: FtpError) -> PwError {
    PwError::new(PwErrorKind::ExternalService)
        .with_op(op)
        .with_message(err.to_string())
}
