use approx::assert_abs_diff_eq;
use oblique_core::test_helpers::assert_matrix_close;
use oblique_core::{extract_parameters, ObliqueParameters, RotationSequence, Vector3};
use oblique_proj::{
    BaseProjection, GeoCoord, Globe, ObliqueMethod, ObliqueProjection, ObliqueProjectionBuilder,
    ProjError, Projection,
};

fn unit(projection: Projection) -> BaseProjection {
    BaseProjection::new(projection).with_globe(Globe::sphere(1.0).unwrap())
}

fn assert_invalid_configuration(result: Result<ObliqueProjection, ProjError>, needle: &str) {
    match result {
        Err(ProjError::InvalidConfiguration { message }) => {
            assert!(message.contains(needle), "{:?} lacks {:?}", message, needle)
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_no_parameter_set_is_rejected() {
    let result = ObliqueProjectionBuilder::new(Projection::mercator())
        .central_longitude(10.0)
        .build();
    assert_invalid_configuration(result, "no oblique parameters");
}

#[test]
fn test_partial_parameter_set_is_rejected() {
    let result = ObliqueProjectionBuilder::new(Projection::mercator())
        .pole_latitude(40.0)
        .build();
    assert_invalid_configuration(result, "missing pole_longitude");

    let result = ObliqueProjectionBuilder::new(Projection::mercator())
        .axis_azimuth(30.0)
        .rotation_center_latitude(10.0)
        .build();
    assert_invalid_configuration(result, "rotation_center_longitude");

    let result = ObliqueProjectionBuilder::new(Projection::mercator())
        .point1_longitude(0.0)
        .point1_latitude(10.0)
        .point2_latitude(-20.0)
        .build();
    assert_invalid_configuration(result, "point2_longitude");
}

#[test]
fn test_conflicting_parameter_sets_are_rejected() {
    let result = ObliqueProjectionBuilder::new(Projection::mercator())
        .new_pole(0.0, 45.0)
        .rotate_about_point(30.0, 10.0, 20.0)
        .build();
    assert_invalid_configuration(result, "new pole and rotate about point");

    let builder = ObliqueProjectionBuilder::new(Projection::mercator())
        .rotate_about_point(30.0, 10.0, 20.0)
        .equator_points(GeoCoord::new(0.0, 10.0), GeoCoord::new(40.0, -20.0));
    assert!(builder.validate().is_err());
}

#[test]
fn test_each_method_alone_is_accepted() {
    let pole = ObliqueProjectionBuilder::new(Projection::robinson()).new_pole(-55.0, 40.0);
    assert!(pole.validate().is_ok());

    let about = ObliqueProjectionBuilder::new(Projection::robinson())
        .rotate_about_point(30.0, 10.0, 20.0)
        .build()
        .unwrap();
    assert!(matches!(about.method(), ObliqueMethod::RotateAboutPoint { .. }));

    let equator = ObliqueProjectionBuilder::new(Projection::robinson())
        .equator_points(GeoCoord::new(0.0, 10.0), GeoCoord::new(40.0, -20.0))
        .build()
        .unwrap();
    assert!(matches!(equator.method(), ObliqueMethod::EquatorPoints { .. }));
}

#[test]
fn test_from_parameters_maps_fields() {
    let params = ObliqueParameters::new(-55.0, 40.0, 120.0);
    let proj = ObliqueProjection::from_parameters(Projection::mollweide(), &params).unwrap();
    assert_eq!(*proj.parameters(), params);
    assert_eq!(
        *proj.method(),
        ObliqueMethod::NewPole {
            pole_longitude: -55.0,
            pole_latitude: 40.0
        }
    );
    assert_matrix_close(proj.rotation(), &params.to_rotation(), 0.0, "rotation");
}

#[test]
fn test_extracted_parameters_reproduce_the_rotation() {
    let seq: RotationSequence = "Ry(-50) @ Rx(135) @ Ry(37) @ Rz(-137)".parse().unwrap();
    let r = seq.compose();
    let proj = ObliqueProjection::from_parameters(Projection::robinson(), &extract_parameters(&r))
        .unwrap();
    assert_matrix_close(proj.rotation(), &r, 1e-9, "rebuilt rotation");

    // the native frame is the rotated sphere
    for &(lon, lat) in &[(0.0, 0.0), (-120.0, 35.0), (77.0, -61.0)] {
        let native = proj.to_native(GeoCoord::new(lon, lat));
        let (exp_lon, exp_lat) = r.transform_lonlat(lon, lat);
        assert_abs_diff_eq!(native.lat(), exp_lat, epsilon = 1e-9);
        assert_abs_diff_eq!(native.lon(), exp_lon, epsilon = 1e-9);
    }
}

#[test]
fn test_north_pole_lands_on_pole_parameters() {
    let params = ObliqueParameters::new(-55.0, 40.0, 120.0);
    let proj = ObliqueProjection::from_parameters(unit(Projection::plate_carree()), &params)
        .unwrap();
    let p = proj.forward(GeoCoord::new(0.0, 90.0)).unwrap();
    assert_abs_diff_eq!(p.x(), (-55.0_f64).to_radians(), epsilon = 1e-12);
    assert_abs_diff_eq!(p.y(), 40.0_f64.to_radians(), epsilon = 1e-12);
}

#[test]
fn test_identity_parameters_reduce_to_base() {
    let base = BaseProjection::new(Projection::mollweide());
    let proj = ObliqueProjection::from_parameters(base.clone(), &ObliqueParameters::new(0.0, 90.0, 0.0))
        .unwrap();
    for &(lon, lat) in &[(0.0, 0.0), (100.0, 45.0), (-170.0, -80.0)] {
        let g = GeoCoord::new(lon, lat);
        let a = proj.forward(g).unwrap();
        let b = base.project(g).unwrap();
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = 1e-6);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 1e-6);
    }
}

#[test]
fn test_forward_inverse_round_trip() {
    let params = ObliqueParameters::new(30.0, 25.0, -70.0);
    let bases = [
        Projection::plate_carree(),
        Projection::miller(),
        Projection::mollweide(),
        Projection::robinson(),
        Projection::azimuthal_equidistant(0.0),
    ];
    for projection in bases {
        let name = projection.proj_name();
        let proj = ObliqueProjection::from_parameters(projection, &params).unwrap();
        for &(lon, lat) in &[(0.0, 0.0), (45.0, 30.0), (-100.0, -40.0), (150.0, 70.0)] {
            let g = GeoCoord::new(lon, lat);
            let back = proj.inverse(proj.forward(g).unwrap()).unwrap();
            let cos = Vector3::from_lonlat_degrees(lon, lat)
                .dot(&Vector3::from_lonlat_degrees(back.lon(), back.lat()));
            assert!(cos > 1.0 - 1e-12, "{} ({}, {}) -> {:?}", name, lon, lat, back);
        }
    }
}

#[test]
fn test_unprojectable_points_surface_as_errors() {
    let params = ObliqueParameters::new(0.0, 40.0, 20.0);
    let proj = ObliqueProjection::from_parameters(Projection::orthographic(0.0), &params).unwrap();

    // the native antipode of the view center is on the hidden hemisphere
    let hidden = proj.from_native(GeoCoord::new(180.0, 0.0));
    let err = proj.forward(hidden).unwrap_err();
    assert!(err.is_unprojectable());

    let err = proj.forward(GeoCoord::new(0.0, 95.0)).unwrap_err();
    assert!(matches!(err, ProjError::OutOfBounds { .. }));
}

#[test]
fn test_proj4_merge() {
    let params = ObliqueParameters::new(-55.0, 40.0, 120.0);
    let proj = ObliqueProjection::from_parameters(Projection::mercator(), &params).unwrap();
    assert_eq!(
        proj.proj4_params().to_string(),
        "+proj=ob_tran +ellps=WGS84 +lon_0=120 +x_0=0 +y_0=0 +units=m \
         +o_proj=merc +o_lon_p=-55 +o_lat_p=40"
    );
    assert_eq!(
        proj.summary(),
        "+proj=ob_tran +o_proj=merc +lon_0=120.000 +o_lat_p=40.000 +o_lon_p=-55.000"
    );
}

#[test]
fn test_proj4_with_globe_and_false_origin() {
    let proj = ObliqueProjectionBuilder::new(Projection::lambert_conformal())
        .rotate_about_point(30.0, 10.0, 20.0)
        .false_easting(500.0)
        .globe(Globe::sphere(6_371_000.0).unwrap())
        .build()
        .unwrap();
    let params = proj.proj4_params();
    assert_eq!(params.get("proj"), Some("ob_tran"));
    assert_eq!(params.get("o_proj"), Some("lcc"));
    assert_eq!(params.get("a"), Some("6371000"));
    assert_eq!(params.get("ellps"), None);
    assert_eq!(params.get_f64("o_alpha"), Some(30.0));
    assert_eq!(params.get_f64("x_0"), Some(500.0));
    assert_eq!(params.get_f64("y_0"), Some(0.0));
    assert_eq!(params.get_f64("lat_1"), Some(33.0));
    assert_eq!(proj.globe().radius(), 6_371_000.0);
}

#[test]
fn test_invalid_base_is_reported() {
    let err = ObliqueProjectionBuilder::new(Projection::mercator_with_limits(50.0, 10.0))
        .new_pole(0.0, 45.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, ProjError::InvalidParameter { .. }));
}
