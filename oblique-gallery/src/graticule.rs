//! Graticule lines and projection of geographic polylines.

use oblique_proj::{GeoCoord, Limits, ObliqueProjection};

/// Spacing of the gray grid, degrees.
pub const GRID_STEP: i32 = 15;
/// Sample spacing along lines, degrees.
pub const DENSIFY_STEP: f64 = 1.0;
/// Relative slack when testing points against map limits.
const LIMIT_TOL: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Grid,
    Highlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoLine {
    pub kind: LineKind,
    pub points: Vec<GeoCoord>,
}

fn meridian(lon: f64, kind: LineKind) -> GeoLine {
    GeoLine {
        kind,
        points: (-90..=90).map(|lat| GeoCoord::new(lon, lat as f64)).collect(),
    }
}

fn parallel(lat: f64, kind: LineKind) -> GeoLine {
    GeoLine {
        kind,
        points: (-180..=180).map(|lon| GeoCoord::new(lon as f64, lat)).collect(),
    }
}

/// Meridians at -180..165 and parallels at -75..75 every 15 degrees, then the
/// highlighted prime meridian, antimeridian and equator.
pub fn graticule() -> Vec<GeoLine> {
    let mut lines: Vec<GeoLine> = (-180..180)
        .step_by(GRID_STEP as usize)
        .map(|lon| meridian(lon as f64, LineKind::Grid))
        .collect();
    lines.extend(
        (-90 + GRID_STEP..90)
            .step_by(GRID_STEP as usize)
            .map(|lat| parallel(lat as f64, LineKind::Grid)),
    );
    lines.push(meridian(0.0, LineKind::Highlight));
    lines.push(meridian(180.0, LineKind::Highlight));
    lines.push(parallel(0.0, LineKind::Highlight));
    lines
}

/// Inserts intermediate points so no segment spans more than `step` degrees.
pub fn densify(points: &[GeoCoord], step: f64) -> Vec<GeoCoord> {
    let mut out = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let span = (b.lon() - a.lon()).abs().max((b.lat() - a.lat()).abs());
        let n = (span / step).ceil().max(1.0) as usize;
        out.extend((0..n).map(|i| {
            let t = i as f64 / n as f64;
            GeoCoord::new(
                a.lon() + t * (b.lon() - a.lon()),
                a.lat() + t * (b.lat() - a.lat()),
            )
        }));
    }
    out.extend(points.last().copied());
    out
}

/// Projects a polyline, splitting it where points fail to project, leave
/// `limits`, or jump further than `max_jump` (a wrap across the map seam).
/// Pieces with fewer than two points are dropped.
pub fn project_path(
    proj: &ObliqueProjection,
    points: &[GeoCoord],
    limits: &Limits,
    max_jump: f64,
) -> Vec<Vec<(f64, f64)>> {
    let pad = LIMIT_TOL * limits.width().max(limits.height());
    let padded = Limits::new(
        limits.x_min - pad,
        limits.x_max + pad,
        limits.y_min - pad,
        limits.y_max + pad,
    );
    let mut pieces = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for geo in points {
        let projected = proj.forward(*geo).ok().filter(|p| padded.contains(p));
        match projected {
            Some(p) => {
                let jumped = current.last().map_or(false, |&(x, y)| {
                    (p.x() - x).hypot(p.y() - y) > max_jump
                });
                if jumped {
                    flush(&mut pieces, &mut current);
                }
                current.push((p.x(), p.y()));
            }
            None => flush(&mut pieces, &mut current),
        }
    }
    flush(&mut pieces, &mut current);
    pieces
}

fn flush(pieces: &mut Vec<Vec<(f64, f64)>>, current: &mut Vec<(f64, f64)>) {
    if current.len() >= 2 {
        pieces.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Seam jump threshold for a projection: half the width of its base map.
pub fn seam_threshold(proj: &ObliqueProjection) -> f64 {
    0.5 * proj.base().limits().width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oblique_core::ObliqueParameters;
    use oblique_proj::{BaseProjection, Globe, Projection};

    fn unit(projection: Projection, params: ObliqueParameters) -> ObliqueProjection {
        let base = BaseProjection::new(projection).with_globe(Globe::sphere(1.0).unwrap());
        ObliqueProjection::from_parameters(base, &params).unwrap()
    }

    #[test]
    fn test_graticule_layout() {
        let lines = graticule();
        let grid: Vec<&GeoLine> = lines.iter().filter(|l| l.kind == LineKind::Grid).collect();
        // 24 meridians and 11 parallels
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].points[0], GeoCoord::new(-180.0, -90.0));
        assert_eq!(grid[23].points[0].lon(), 165.0);
        assert_eq!(grid[24].points[0].lat(), -75.0);
        assert_eq!(grid[34].points[0].lat(), 75.0);

        let highlight = lines.len() - grid.len();
        assert_eq!(highlight, 3);
        assert!(lines.iter().all(|l| l.points.len() == 181 || l.points.len() == 361));
    }

    #[test]
    fn test_densify() {
        let pts = [GeoCoord::new(0.0, 0.0), GeoCoord::new(3.0, 0.0), GeoCoord::new(3.0, 0.5)];
        let dense = densify(&pts, 1.0);
        assert_eq!(dense.len(), 5);
        assert_eq!(dense[1], GeoCoord::new(1.0, 0.0));
        assert_eq!(*dense.last().unwrap(), GeoCoord::new(3.0, 0.5));
        assert!(densify(&[], 1.0).is_empty());
    }

    #[test]
    fn test_path_splits_at_seam() {
        // identity rotation: the equator crosses the +/-180 seam
        let proj = unit(Projection::plate_carree(), ObliqueParameters::new(0.0, 90.0, 0.0));
        let pts: Vec<GeoCoord> = (170..=190).map(|lon| GeoCoord::new(lon as f64, 0.0)).collect();
        let pieces = project_path(&proj, &pts, &proj.limits(), seam_threshold(&proj));
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].len() + pieces[1].len(), 21);
    }

    #[test]
    fn test_path_splits_at_hidden_points() {
        let proj = unit(Projection::orthographic(0.0), ObliqueParameters::new(0.0, 90.0, 0.0));
        let pts: Vec<GeoCoord> = (-180..=180).map(|lon| GeoCoord::new(lon as f64, 0.0)).collect();
        let pieces = project_path(&proj, &pts, &proj.limits(), seam_threshold(&proj));
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].len(), 181);
    }
}
