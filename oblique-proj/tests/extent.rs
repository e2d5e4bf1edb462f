use approx::assert_abs_diff_eq;
use oblique_core::ObliqueParameters;
use oblique_proj::{
    BaseProjection, ExtentCrs, GeoCoord, Globe, Limits, ObliqueProjection, ProjError, Projection,
    EXTENT_SAMPLES,
};

fn unit(projection: Projection) -> BaseProjection {
    BaseProjection::new(projection).with_globe(Globe::sphere(1.0).unwrap())
}

fn identity(projection: Projection) -> ObliqueProjection {
    ObliqueProjection::from_parameters(unit(projection), &ObliqueParameters::new(0.0, 90.0, 0.0))
        .unwrap()
}

#[test]
fn test_default_boundary_is_base_boundary() {
    let proj = identity(Projection::mollweide());
    let base = unit(Projection::mollweide());
    assert_eq!(proj.limits(), base.limits());
    assert_eq!(proj.boundary(), base.boundary().as_slice());
}

#[test]
fn test_geodetic_extent_through_full_transform() {
    let mut proj = identity(Projection::plate_carree());
    proj.set_extent([-30.0, 60.0, -10.0, 45.0], ExtentCrs::Geodetic, None)
        .unwrap();

    assert_eq!(proj.boundary().len(), 4 * EXTENT_SAMPLES + 1);
    assert_eq!(proj.boundary().first(), proj.boundary().last());

    let limits = proj.limits();
    assert_abs_diff_eq!(limits.x_min, (-30.0_f64).to_radians(), epsilon = 1e-9);
    assert_abs_diff_eq!(limits.x_max, 60.0_f64.to_radians(), epsilon = 1e-9);
    assert_abs_diff_eq!(limits.y_min, (-10.0_f64).to_radians(), epsilon = 1e-9);
    assert_abs_diff_eq!(limits.y_max, 45.0_f64.to_radians(), epsilon = 1e-9);
}

#[test]
fn test_geodetic_extent_in_rotated_frame() {
    // the same rectangle, read as native coordinates, ignores the rotation
    let params = ObliqueParameters::new(-55.0, 40.0, 120.0);
    let mut proj =
        ObliqueProjection::from_parameters(unit(Projection::plate_carree()), &params).unwrap();
    proj.set_extent([-30.0, 60.0, -10.0, 45.0], ExtentCrs::Geodetic, Some(false))
        .unwrap();
    let limits = proj.limits();
    assert_abs_diff_eq!(limits.x_min, (-30.0_f64).to_radians(), epsilon = 1e-12);
    assert_abs_diff_eq!(limits.y_max, 45.0_f64.to_radians(), epsilon = 1e-12);

    proj.set_extent([-30.0, 60.0, -10.0, 45.0], ExtentCrs::Geodetic, Some(true))
        .unwrap();
    assert!((proj.limits().x_min - (-30.0_f64).to_radians()).abs() > 1e-3);
}

#[test]
fn test_projected_extent_is_a_rectangle() {
    let mut proj = identity(Projection::robinson());
    proj.set_extent([-1.0, 2.0, -0.5, 0.5], ExtentCrs::Projected, None)
        .unwrap();
    assert_eq!(proj.limits(), Limits::new(-1.0, 2.0, -0.5, 0.5));
    assert_eq!(proj.boundary().len(), 5);
}

#[test]
fn test_projected_extent_in_base_crs() {
    // with the identity rotation, base coordinates pass through unchanged
    let mut proj = identity(Projection::plate_carree());
    proj.set_extent([-1.0, 2.0, -0.5, 0.5], ExtentCrs::Projected, Some(true))
        .unwrap();
    let limits = proj.limits();
    assert_abs_diff_eq!(limits.x_min, -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(limits.x_max, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(limits.y_min, -0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(limits.y_max, 0.5, epsilon = 1e-9);
    assert_eq!(proj.boundary().len(), 4 * EXTENT_SAMPLES + 1);
}

#[test]
fn test_unprojectable_edge_points_are_dropped() {
    // part of the rectangle lies on the hidden hemisphere
    let mut proj = identity(Projection::orthographic(0.0));
    proj.set_extent([-120.0, 60.0, -30.0, 30.0], ExtentCrs::Geodetic, None)
        .unwrap();
    let n = proj.boundary().len();
    assert!(n < 4 * EXTENT_SAMPLES + 1);
    assert!(n >= 3);
    for p in proj.boundary() {
        assert!(p.x().hypot(p.y()) <= 1.0 + 1e-12);
    }
}

#[test]
fn test_fully_hidden_extent_is_out_of_bounds() {
    let mut proj = identity(Projection::orthographic(0.0));
    let before = proj.limits();
    let err = proj
        .set_extent([120.0, 170.0, -30.0, 30.0], ExtentCrs::Geodetic, None)
        .unwrap_err();
    assert!(matches!(err, ProjError::OutOfBounds { .. }));
    assert_eq!(proj.limits(), before);
}

#[test]
fn test_reset_extent_restores_base_limits() {
    let mut proj = identity(Projection::miller());
    let before = proj.limits();
    proj.set_extent([0.0, 10.0, 0.0, 10.0], ExtentCrs::Geodetic, None)
        .unwrap();
    assert_ne!(proj.limits(), before);
    proj.reset_extent();
    assert_eq!(proj.limits(), before);
}

#[test]
fn test_invalid_extent() {
    let mut proj = identity(Projection::miller());
    let err = proj
        .set_extent([10.0, 0.0, 0.0, 10.0], ExtentCrs::Geodetic, None)
        .unwrap_err();
    assert!(matches!(err, ProjError::InvalidParameter { .. }));
    assert!(proj
        .forward(GeoCoord::new(0.0, 0.0))
        .map(|p| p.x().abs() < 1e-12)
        .unwrap());
}
