mod args;
mod value_enum;

pub use args::{Args, Command};
use stair_ways_shared_kernel::Result;
pub use value_enum::{CliOutputFormat, CliStrategy};

use crate::config::{Config, FileConfig};

/// Merge CLI flags over the config file over built-in defaults.
///
/// # Errors
///
/// Returns `Err` when `--config` points at an unreadable or malformed file.
pub fn build_config(args: &Args) -> Result<Config> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    Ok(resolve(args, file))
}

fn resolve(args: &Args, file: FileConfig) -> Config {
    let strategy = match &args.command {
        Command::Count { strategy: Some(cli), .. } => (*cli).into(),
        _ => file.strategy.unwrap_or_default(),
    };

    Config {
        format: args.format.map(Into::into).or(file.format).unwrap_or_default(),
        strategy,
        limits: file.limits,
        output: args.output.clone(),
    }
}
