//! Resolve command - print the basemaps for a STAC document.

use std::path::PathBuf;

use basemaps::basemap::BasemapDefinition;
use basemaps::catalog::CatalogResource;
use basemaps::configure::configure_basemap;
use tracing::info;

use super::common::{read_stac, targets_for};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the resolve command.
pub struct ResolveArgs {
    pub input: PathBuf,
    pub registry: Option<PathBuf>,
    pub locale: Option<String>,
    pub json: bool,
    pub debug: bool,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug)?;
    runner.log_startup("resolve");

    let registry = runner.registry(args.registry.as_deref())?;
    let locale = runner.locale(args.locale);
    let stac = read_stac(&args.input)?;

    let layers = configure_basemap(
        stac.as_ref().map(|s| s as &dyn CatalogResource),
        &locale,
        &registry,
    );
    info!(layers = layers.len(), "Basemaps resolved");

    if args.json {
        let output = serde_json::to_string_pretty(&layers).map_err(CliError::Output)?;
        println!("{}", output);
        return Ok(());
    }

    println!("Targets: {}", targets_for(stac.as_ref()).join(", "));
    println!();
    print!("{}", format_layers(&layers));

    Ok(())
}

/// Human-readable listing of resolved basemaps.
fn format_layers(layers: &[&BasemapDefinition]) -> String {
    if layers.is_empty() {
        return "No basemaps registered for these targets\n".to_string();
    }

    let mut out = format!("Basemaps ({}):\n", layers.len());
    for (i, layer) in layers.iter().enumerate() {
        let projection_note = if layer.uses_custom_projection() {
            " (must be registered)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {}. {} [{}]\n",
            i + 1,
            layer.title,
            layer.source_type
        ));
        out.push_str(&format!("     URL:        {}\n", layer.url));
        out.push_str(&format!(
            "     Projection: {}{}\n",
            layer.projection, projection_note
        ));
        if !layer.attributions.is_empty() {
            out.push_str(&format!("     Credit:     {}\n", layer.attributions));
        }
        if let Some(params) = &layer.params {
            let params: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            out.push_str(&format!("     Params:     {}\n", params.join("&")));
        }
    }
    out
}
