//! The built-in gallery.

use oblique_core::{Axis, RotationSequence};
use oblique_proj::{BaseProjection, Projection};

use crate::scenario::{ExtentSpec, RotationSpec, Scenario};

/// `Rx(x) @ Ry(y) @ ...`, written left to right.
fn rotation(terms: &[(Axis, f64)]) -> RotationSpec {
    let seq = terms
        .iter()
        .fold(RotationSequence::new(), |seq, &(axis, angle)| seq.then(axis, angle));
    RotationSpec::Sequence(seq)
}

fn base(projection: Projection) -> BaseProjection {
    BaseProjection::new(projection)
}

fn lambert_135() -> BaseProjection {
    base(Projection::lambert_conformal()).with_central_longitude(135.0)
}

/// Rotation that tilts Japan (137°E, 37°N) onto the equator, then turns it
/// 135° about the X axis.
fn japan_tilt(outer_y: f64) -> RotationSpec {
    rotation(&[
        (Axis::Y, outer_y),
        (Axis::X, 135.0),
        (Axis::Y, 37.0),
        (Axis::Z, -137.0),
    ])
}

pub fn builtin_scenarios() -> Vec<Scenario> {
    use Axis::{X, Y, Z};

    let sphere_4 = rotation(&[(Z, 60.0), (Y, 45.0), (Z, -120.0)]);

    vec![
        // lon_0 = 120; the old north pole lands at 55W 40N of the native grid
        Scenario::new(
            "fig1",
            RotationSpec::pole(-55.0, 40.0, 120.0),
            base(Projection::mollweide()),
        ),
        Scenario::new("fig2", japan_tilt(-50.0), base(Projection::mollweide())),
        Scenario::new(
            "fig3",
            japan_tilt(-85.0),
            base(Projection::mercator_with_limits(-88.0, 88.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig4",
            rotation(&[(Y, -87.0), (X, 35.0), (Y, 44.0), (Z, -143.0)]),
            base(Projection::mercator_with_limits(-88.0, 88.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new("fig5_extent", japan_tilt(-40.0), lambert_135())
            .with_extent(ExtentSpec::geodetic([100.0, 170.0, 10.0, 60.0], Some(true)))
            .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig11",
            rotation(&[(X, -15.0), (Y, 36.0), (Z, -139.0)]),
            base(Projection::mercator()),
        )
        .with_extent(ExtentSpec::geodetic([-20.0, 20.0, -10.0, 15.0], Some(true)))
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig12",
            rotation(&[(X, 135.0), (Y, 37.0), (Z, -137.0)]),
            base(Projection::mercator()),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig5",
            rotation(&[(Y, -50.0), (X, -70.0), (Y, 90.0), (Z, -120.0)]),
            lambert_135(),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig6",
            rotation(&[(X, 135.0), (Y, 35.0), (Z, -135.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig7",
            rotation(&[(X, 135.0), (Y, 35.0), (Z, -135.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_extent(ExtentSpec::projected(
            [-2_000_000.0, 2_000_000.0, -2_000_000.0, 2_000_000.0],
            None,
        ))
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "sphere_1",
            rotation(&[(Z, 0.0), (Y, 0.0), (Z, 0.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "sphere_2",
            rotation(&[(Z, 0.0), (Y, 0.0), (Z, -120.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "sphere_3",
            rotation(&[(Z, 0.0), (Y, 45.0), (Z, -120.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new("sphere_4", sphere_4.clone(), base(Projection::orthographic(0.0)))
            .with_figure_size(8.0, 8.0),
        Scenario::new("fig13", sphere_4, base(Projection::miller())).with_figure_size(8.0, 8.0),
        Scenario::new(
            "sphere_5",
            rotation(&[(Z, 50.0), (Y, 23.4), (Z, -195.0)]),
            base(Projection::orthographic(0.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig_20",
            rotation(&[(X, 135.0), (Y, 36.695), (Z, -137.211)]),
            base(Projection::azimuthal_equidistant(0.0)),
        )
        .with_extent(ExtentSpec::projected(
            [-3_000_000.0, 3_000_000.0, -3_000_000.0, 3_000_000.0],
            None,
        ))
        .with_figure_size(8.0, 8.0),
        Scenario::new("fig_21", japan_tilt(0.0), base(Projection::robinson())),
        Scenario::new(
            "fig_22",
            japan_tilt(-85.0),
            base(Projection::mercator_with_limits(-89.0, 89.0)),
        )
        .with_figure_size(8.0, 8.0),
        Scenario::new(
            "fig_23",
            rotation(&[(Y, -87.5), (X, 35.0), (Y, 44.0), (Z, -143.0)]),
            base(Projection::mercator_with_limits(-88.5, 88.5)),
        )
        .with_figure_size(8.0, 8.0),
    ]
}
