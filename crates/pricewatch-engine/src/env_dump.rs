//! Environment dump for diagnosing scheduled runs

use pricewatch_core::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub const DEFAULT_DUMP_PATH: &str = "logs/env_vars.txt";
pub const DUMP_DONE_MESSAGE: &str = "Environment variables logged.";

/// Write every `KEY=VALUE` pair, then the argument list, to `path`
///
/// Parent directories are created; an existing file is replaced. Returns
/// the number of variables written.
///
/// # Errors
///
/// `Io` when the file cannot be created or written.
pub fn dump_environment<I>(path: &Path, vars: I, args: &[String]) -> Result<usize>
where
    I: IntoIterator<Item = (String, String)>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| io_error("env_dump", e).with_path(parent))?;
        }
    }

    let mut out = Vec::new();
    let mut count = 0;
    for (key, value) in vars {
        // Writing to a Vec cannot fail
        let _ = writeln!(out, "{}={}", key, value);
        count += 1;
    }
    let _ = writeln!(out, "Arguments: {:?}", args);

    fs::write(path, out).map_err(|e| io_error("env_dump", e).with_path(path))?;
    tracing::info!(path = %path.display(), variables = count, "Environment dumped");
    Ok(count)
}
