//! Bodies command - list the bodies known to the registry.

use std::path::PathBuf;

use basemaps::registry::BasemapRegistry;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the bodies command.
pub struct BodiesArgs {
    pub registry: Option<PathBuf>,
    pub debug: bool,
}

/// Run the bodies command.
pub fn run(args: BodiesArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug)?;
    runner.log_startup("bodies");

    let registry = runner.registry(args.registry.as_deref())?;
    print!("{}", format_bodies(&registry));

    Ok(())
}

fn format_bodies(registry: &BasemapRegistry) -> String {
    let mut out = String::new();
    for body in registry.bodies() {
        let count = registry.get(body).map_or(0, <[_]>::len);
        out.push_str(&format!("{:<12} {} basemap(s)\n", body, count));
    }

    let projections = registry.custom_projections();
    if !projections.is_empty() {
        let projections: Vec<&str> = projections.into_iter().collect();
        out.push_str(&format!(
            "\nProjections requiring registration: {}\n",
            projections.join(", ")
        ));
    }
    out
}
