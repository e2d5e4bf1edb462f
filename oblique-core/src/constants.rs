#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const QUARTER_PI: f64 = 0.7853981633974483096156608;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const SQRT2: f64 = 1.4142135623730950488;

/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 semi-minor axis in meters.
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.314245179;

/// Absolute tolerance on `r22` for routing a rotation to one of the polar cases.
///
/// `r22 = sin(lat_p)`, so a tolerance of 1e-9 corresponds to pole latitudes
/// within roughly 0.0026 degrees of +/-90.
pub const DEGENERACY_TOLERANCE: f64 = 1e-9;

/// Tolerance used when validating that a matrix is a proper rotation.
pub const ROTATION_TOLERANCE: f64 = 1e-9;
