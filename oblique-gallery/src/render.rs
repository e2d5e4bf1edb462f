//! SVG rendering of oblique maps.

use std::path::Path;

use oblique_proj::{Limits, ObliqueProjection};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::features::FeatureLayer;
use crate::graticule::{densify, graticule, project_path, seam_threshold, LineKind, DENSIFY_STEP};

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;
type MapChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Pixels per inch of figure size.
pub const DPI: f64 = 100.0;

const LAND: RGBColor = RGBColor(0x32, 0xCD, 0x32);
const GRID: RGBColor = RGBColor(128, 128, 128);

pub fn figure_pixels(figure_size: (f64, f64)) -> (u32, u32) {
    let px = |inches: f64| (inches * DPI).round().max(1.0) as u32;
    (px(figure_size.0), px(figure_size.1))
}

/// Data ranges covering `limits` with equal scale on both axes, centered in
/// a plot area of `width` x `height` pixels.
pub fn view_ranges(limits: &Limits, width: u32, height: u32) -> ((f64, f64), (f64, f64)) {
    let (w, h) = (width.max(1) as f64, height.max(1) as f64);
    let data_w = limits.width().max(f64::EPSILON);
    let data_h = limits.height().max(f64::EPSILON);
    let scale = (w / data_w).min(h / data_h);

    let cx = 0.5 * (limits.x_min + limits.x_max);
    let cy = 0.5 * (limits.y_min + limits.y_max);
    let half_w = 0.5 * w / scale;
    let half_h = 0.5 * h / scale;
    ((cx - half_w, cx + half_w), (cy - half_h, cy + half_h))
}

pub fn map_svg(
    proj: &ObliqueProjection,
    features: Option<&FeatureLayer>,
    figure_size: (f64, f64),
    path: &Path,
) -> PlotResult {
    let root = SVGBackend::new(path, figure_pixels(figure_size)).into_drawing_area();
    draw_map(&root, proj, features)?;
    root.present()?;
    Ok(())
}

pub fn map_svg_string(
    proj: &ObliqueProjection,
    features: Option<&FeatureLayer>,
    figure_size: (f64, f64),
) -> Result<String, Box<dyn std::error::Error>> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, figure_pixels(figure_size)).into_drawing_area();
        draw_map(&root, proj, features)?;
        root.present()?;
    }
    Ok(svg)
}

fn draw_map<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &ObliqueProjection,
    features: Option<&FeatureLayer>,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let (width, height) = root.dim_in_pixel();
    let (margin_x, margin_y) = (width / 100, height / 100);
    let limits = proj.limits();
    let (x_range, y_range) = view_ranges(
        &limits,
        width.saturating_sub(2 * margin_x),
        height.saturating_sub(2 * margin_y),
    );

    let mut chart = ChartBuilder::on(root)
        .margin_left(margin_x)
        .margin_right(margin_x)
        .margin_top(margin_y)
        .margin_bottom(margin_y)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    let boundary: Vec<(f64, f64)> = proj.boundary().iter().map(|p| (p.x(), p.y())).collect();
    chart.draw_series(std::iter::once(Polygon::new(boundary.clone(), WHITE.filled())))?;

    if let Some(layer) = features {
        draw_features(&mut chart, proj, &limits, layer)?;
    }
    draw_graticule(&mut chart, proj, &limits)?;

    chart.draw_series(std::iter::once(PathElement::new(
        boundary,
        BLACK.stroke_width(1),
    )))?;
    Ok(())
}

fn draw_features<DB: DrawingBackend>(
    chart: &mut MapChart<DB>,
    proj: &ObliqueProjection,
    limits: &Limits,
    layer: &FeatureLayer,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let max_jump = seam_threshold(proj);
    for ring in &layer.polygons {
        let dense = densify(ring, DENSIFY_STEP);
        let pieces = project_path(proj, &dense, limits, max_jump);
        // an unbroken ring can be filled; anything cut by the seam or the
        // limits is drawn as an outline only
        if let [whole] = pieces.as_slice() {
            if whole.len() == dense.len() {
                chart.draw_series(std::iter::once(Polygon::new(whole.clone(), LAND.filled())))?;
            }
        }
        chart.draw_series(
            pieces
                .into_iter()
                .map(|piece| PathElement::new(piece, BLACK.stroke_width(1))),
        )?;
    }
    Ok(())
}

fn draw_graticule<DB: DrawingBackend>(
    chart: &mut MapChart<DB>,
    proj: &ObliqueProjection,
    limits: &Limits,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let max_jump = seam_threshold(proj);
    for line in graticule() {
        let style = match line.kind {
            LineKind::Grid => GRID.mix(0.5).stroke_width(1),
            LineKind::Highlight => RED.stroke_width(1),
        };
        let pieces = project_path(proj, &line.points, limits, max_jump);
        chart.draw_series(pieces.into_iter().map(|piece| PathElement::new(piece, style)))?;
    }
    Ok(())
}
