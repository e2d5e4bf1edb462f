use std::fs;
use std::path::PathBuf;

use oblique_core::{ObliqueParameters, PoleCase};
use oblique_proj::Limits;

use crate::error::{GalleryError, GalleryResult};
use crate::features::{load_features, FeatureLayer};
use crate::render::map_svg;
use crate::scenario::{validate_scenarios, Scenario};

pub const DEFAULT_OUTPUT_DIR: &str = "gallery";

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub output_dir: PathBuf,
    /// Scenario names to render; empty renders all of them.
    pub only: Vec<String>,
    /// GeoJSON land polygons drawn under the graticule.
    pub features: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            only: Vec::new(),
            features: None,
        }
    }
}

/// What was rendered for one scenario.
#[derive(Debug, Clone)]
pub struct FigureReport {
    pub name: String,
    pub parameters: ObliqueParameters,
    /// Extractor branch, `None` when the parameters were given directly.
    pub case: Option<PoleCase>,
    pub summary: String,
    pub path: PathBuf,
    pub limits: Limits,
}

/// Renders each selected scenario to `<output_dir>/<name>.svg`, printing
/// its projection summary line.
pub fn run_gallery(scenarios: &[Scenario], config: &GalleryConfig) -> GalleryResult<Vec<FigureReport>> {
    validate_scenarios(scenarios)?;
    if let Some(missing) = config
        .only
        .iter()
        .find(|name| !scenarios.iter().any(|s| &s.name == *name))
    {
        return Err(GalleryError::UnknownScenario(missing.clone()));
    }

    fs::create_dir_all(&config.output_dir).map_err(|e| GalleryError::io(&config.output_dir, e))?;
    let features = config.features.as_deref().map(load_features).transpose()?;

    scenarios
        .iter()
        .filter(|s| config.only.is_empty() || config.only.contains(&s.name))
        .map(|s| render_scenario(s, config, features.as_ref()))
        .collect()
}

fn render_scenario(
    scenario: &Scenario,
    config: &GalleryConfig,
    features: Option<&FeatureLayer>,
) -> GalleryResult<FigureReport> {
    let (case, parameters) = scenario.rotation.resolve();
    let proj = scenario.build_projection()?;
    let summary = scenario.summary_line();
    println!("{}", summary);

    let path = config.output_dir.join(format!("{}.svg", scenario.name));
    map_svg(&proj, features, scenario.figure_size, &path)
        .map_err(|e| GalleryError::render(&scenario.name, e.to_string()))?;
    tracing::info!(name = %scenario.name, path = %path.display(), ?case, "rendered figure");

    Ok(FigureReport {
        name: scenario.name.clone(),
        parameters,
        case,
        summary,
        path,
        limits: proj.limits(),
    })
}
