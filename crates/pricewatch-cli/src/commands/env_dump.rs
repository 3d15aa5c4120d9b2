//! Environment dump command

use anyhow::Result;
use clap::Args;
use pricewatch_engine::env_dump::{dump_environment, DEFAULT_DUMP_PATH, DUMP_DONE_MESSAGE};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EnvDumpArgs {
    #[arg(long, default_value = DEFAULT_DUMP_PATH)]
    pub output: PathBuf,

    /// Extra arguments, recorded with the rest of the command line
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn execute(args: EnvDumpArgs) -> Result<()> {
    tracing::debug!(extra = ?args.args, "Dumping environment");
    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let vars = std::env::vars_os().map(|(k, v)| {
        (
            k.to_string_lossy().into_owned(),
            v.to_string_lossy().into_owned(),
        )
    });
    dump_environment(&args.output, vars, &argv)?;
    println!("{}", DUMP_DONE_MESSAGE);
    Ok(())
}
