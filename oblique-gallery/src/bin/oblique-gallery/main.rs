//! oblique-gallery: render rotated globes as oblique map projections
//!
//! Every scenario's rotation is converted to `(lon_p, lat_p, lon_0)` and
//! drawn with the matching oblique projection.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ListArgs, OutputFormat, ParamsArgs, RenderArgs};
use oblique_core::{extract_with_case, RotationSequence};
use oblique_gallery::{builtin_scenarios, load_scenarios, run_gallery, GalleryConfig, Scenario};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Render(args) => render(args),
        Commands::Params(args) => params(args),
        Commands::List(args) => list(args),
    }
}

fn scenarios_from(path: Option<&Path>, with_builtin: bool) -> Result<Vec<Scenario>> {
    match path {
        Some(path) => {
            let mut scenarios = if with_builtin {
                builtin_scenarios()
            } else {
                Vec::new()
            };
            scenarios.extend(
                load_scenarios(path)
                    .with_context(|| format!("loading scenarios from {}", path.display()))?,
            );
            Ok(scenarios)
        }
        None => Ok(builtin_scenarios()),
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let scenarios = scenarios_from(args.scenarios.as_deref(), args.builtin)?;
    let config = GalleryConfig {
        output_dir: args.output_dir.clone(),
        only: args.only.clone(),
        features: args.features.clone(),
    };
    let reports = run_gallery(&scenarios, &config).context("rendering gallery")?;
    tracing::info!(
        figures = reports.len(),
        dir = %config.output_dir.display(),
        "gallery complete"
    );
    Ok(())
}

fn params(args: &ParamsArgs) -> Result<()> {
    let seq: RotationSequence = args
        .rotation
        .parse()
        .with_context(|| format!("parsing rotation '{}'", args.rotation))?;
    let (case, params) = extract_with_case(&seq.compose());

    match args.format {
        OutputFormat::Text => {
            println!("{}", seq);
            println!("case: {}", case);
            println!("{}", params.proj4_summary());
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "rotation": seq.to_string(),
                "case": case,
                "parameters": params,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn list(args: &ListArgs) -> Result<()> {
    let scenarios = scenarios_from(args.scenarios.as_deref(), false)?;
    for scenario in &scenarios {
        println!("{}", scenario.summary_line());
    }
    Ok(())
}
