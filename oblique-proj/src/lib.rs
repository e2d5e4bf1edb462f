pub mod base;
mod common;
pub mod coordinate;
pub mod error;
pub mod extent;
pub mod globe;
pub mod oblique;
pub mod proj4;

pub use base::{BaseProjection, Projection};
pub use coordinate::{GeoCoord, Limits, PlaneCoord, ProjectedCoord};
pub use error::{ProjError, ProjResult};
pub use extent::{rectangle_ring, ExtentCrs, EXTENT_SAMPLES};
pub use globe::Globe;
pub use oblique::{ObliqueMethod, ObliqueProjection, ObliqueProjectionBuilder};
pub use proj4::Proj4Params;
