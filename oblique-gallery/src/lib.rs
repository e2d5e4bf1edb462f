//! Gallery of oblique map projections.
//!
//! Each [`Scenario`] pairs a globe rotation with a base projection. The
//! rotation is converted to oblique parameters with
//! [`oblique_core::extract_with_case`], the map is built with
//! [`oblique_proj::ObliqueProjection`], and [`run_gallery`] draws the result
//! (boundary, optional land polygons, graticule) to one SVG per scenario.
//!
//! ```no_run
//! use oblique_gallery::{builtin_scenarios, run_gallery, GalleryConfig};
//!
//! let reports = run_gallery(&builtin_scenarios(), &GalleryConfig::default())?;
//! for r in &reports {
//!     println!("{} -> {}", r.name, r.path.display());
//! }
//! # Ok::<(), oblique_gallery::GalleryError>(())
//! ```

pub mod builtin;
pub mod driver;
pub mod error;
pub mod features;
pub mod graticule;
pub mod render;
pub mod scenario;

pub use builtin::builtin_scenarios;
pub use driver::{run_gallery, FigureReport, GalleryConfig, DEFAULT_OUTPUT_DIR};
pub use error::{GalleryError, GalleryResult};
pub use features::{load_features, parse_geojson, FeatureLayer};
pub use graticule::{graticule, project_path, GeoLine, LineKind};
pub use render::{map_svg, map_svg_string};
pub use scenario::{
    load_scenarios, validate_scenarios, ExtentSpec, RotationSpec, Scenario,
    DEFAULT_FIGURE_SIZE,
};
