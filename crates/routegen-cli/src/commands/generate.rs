use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use routegen::{flatten_routes, generate_route_forest_with, RouteSyntax};

use crate::{emit, scan, CatchAllArg, OutputFormat};

pub fn execute(
    pages_dir: &Path,
    ext: &str,
    out: Option<&Path>,
    format: OutputFormat,
    catch_all: CatchAllArg,
    verbose: bool,
) -> Result<()> {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "routegen=debug".into()),
            )
            .init();
    }

    let scanned = scan::scan_pages(pages_dir, ext)?;
    println!(
        "{} {} ({} folders, {} files)",
        "Scanned".green().bold(),
        scanned.base.cyan(),
        scanned.folders.len(),
        scanned.files.len()
    );

    let syntax = RouteSyntax {
        catch_all: catch_all.into(),
    };
    let routes = generate_route_forest_with(&scanned.folders, &scanned.base, &scanned.files, syntax)
        .context("Failed to generate route forest")?;

    // Imports are relative to wherever the configuration file ends up;
    // for stdout that is the page directory itself.
    let import_from = match out.and_then(Path::parent) {
        Some(dir) if dir.as_os_str().is_empty() => scanned.base.clone(),
        Some(dir) => dir.to_string_lossy().replace('\\', "/"),
        None => scanned.base.clone(),
    };

    let output = match format {
        OutputFormat::Ts => emit::typescript(&routes, &import_from)?,
        OutputFormat::Json => emit::json(&routes)?,
    };

    match out {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {} ({} routes)",
                "Generated".green().bold(),
                path.display().to_string().cyan(),
                flatten_routes(&routes).len()
            );
        }
        None => print!("{output}"),
    }

    Ok(())
}
