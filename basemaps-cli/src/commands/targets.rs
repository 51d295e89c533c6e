//! Targets command - print the bodies a STAC document describes.

use std::path::PathBuf;

use super::common::{read_stac, targets_for};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the targets command.
pub struct TargetsArgs {
    pub input: PathBuf,
    pub debug: bool,
}

/// Run the targets command.
pub fn run(args: TargetsArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug)?;
    runner.log_startup("targets");

    let stac = read_stac(&args.input)?;
    for target in targets_for(stac.as_ref()) {
        println!("{}", target);
    }

    Ok(())
}
