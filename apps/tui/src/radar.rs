//! Radar geometry: polar placement of dimensions, level rings and layer polygons.
//!
//! Coordinates are relative to the chart centre with y growing downward, so the
//! first dimension sits at the top (-90°) and the rest follow clockwise.
//! Renderers with a y-up canvas must flip the sign of `y`.

use crate::domain::{Dimension, MAX_LEVEL};
use crate::error::ValidationError;
use serde::Serialize;

/// Opaque colour token; the front-end decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerColor {
    Primary,
    Muted,
    Accent,
    CompareFirst,
    CompareSecond,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerPoint {
    pub dimension_id: String,
    pub value: u8,
    pub max: u8,
}

/// One visualized level vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub id: String,
    pub label: String,
    pub color: LayerColor,
    pub visible: bool,
    pub points: Vec<LayerPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub dimension_id: String,
    pub angle_degrees: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub layer_id: String,
    pub dimension_id: String,
    pub x: f64,
    pub y: f64,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelMarker {
    pub dimension_id: String,
    pub level: u8,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelHit {
    pub dimension_id: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarLayout {
    pub grid_circles: [f64; MAX_LEVEL as usize],
    pub axes: Vec<Axis>,
    /// One polygon per visible layer, `dimensions.len()` vertices each. Not closed.
    pub vertices: Vec<Vec<Vertex>>,
    pub markers: Vec<LevelMarker>,
}

/// Angle of the `index`-th of `count` axes, in degrees.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    index as f64 * (360.0 / count as f64) - 90.0
}

/// Distance from the centre for a level on a chart of `canvas_radius`.
pub fn level_radius(level: u8, canvas_radius: f64) -> f64 {
    f64::from(level) / f64::from(MAX_LEVEL) * canvas_radius
}

/// Position of `level` on the `index`-th of `count` axes.
pub fn polar_point(index: usize, count: usize, level: u8, canvas_radius: f64) -> (f64, f64) {
    let angle = axis_angle(index, count).to_radians();
    let radius = level_radius(level, canvas_radius);
    (angle.cos() * radius, angle.sin() * radius)
}

pub fn grid_circles(canvas_radius: f64) -> [f64; MAX_LEVEL as usize] {
    std::array::from_fn(|ring| level_radius(ring as u8 + 1, canvas_radius))
}

pub fn axes(dimensions: &[Dimension], canvas_radius: f64) -> Vec<Axis> {
    let count = dimensions.len();
    dimensions
        .iter()
        .enumerate()
        .map(|(index, dimension)| {
            let (x2, y2) = polar_point(index, count, MAX_LEVEL, canvas_radius);
            Axis {
                dimension_id: dimension.id.clone(),
                angle_degrees: axis_angle(index, count),
                x2,
                y2,
            }
        })
        .collect()
}

/// Clickable level dots, `MAX_LEVEL` per dimension. Independent of any layer.
pub fn level_markers(dimensions: &[Dimension], canvas_radius: f64) -> Vec<LevelMarker> {
    let count = dimensions.len();
    dimensions
        .iter()
        .enumerate()
        .flat_map(|(index, dimension)| {
            (1..=MAX_LEVEL).map(move |level| {
                let (x, y) = polar_point(index, count, level, canvas_radius);
                LevelMarker {
                    dimension_id: dimension.id.clone(),
                    level,
                    x,
                    y,
                }
            })
        })
        .collect()
}

fn layer_vertices(
    layer: &Layer,
    dimensions: &[Dimension],
    canvas_radius: f64,
) -> Result<Vec<Vertex>, ValidationError> {
    let count = dimensions.len();
    dimensions
        .iter()
        .enumerate()
        .map(|(index, dimension)| {
            let point = layer
                .points
                .iter()
                .find(|point| point.dimension_id == dimension.id)
                .ok_or_else(|| ValidationError::MissingDimension {
                    dimension: dimension.id.clone(),
                })?;
            if !(1..=MAX_LEVEL).contains(&point.value) {
                return Err(ValidationError::LevelOutOfRange {
                    dimension: dimension.id.clone(),
                    level: i64::from(point.value),
                    max: MAX_LEVEL,
                });
            }

            let (x, y) = polar_point(index, count, point.value, canvas_radius);
            Ok(Vertex {
                layer_id: layer.id.clone(),
                dimension_id: dimension.id.clone(),
                x,
                y,
                level: point.value,
            })
        })
        .collect()
}

/// Lays out grid, axes, markers and one polygon per visible layer.
pub fn layout(
    layers: &[Layer],
    dimensions: &[Dimension],
    canvas_radius: f64,
) -> Result<RadarLayout, ValidationError> {
    let vertices = if dimensions.is_empty() {
        Vec::new()
    } else {
        layers
            .iter()
            .filter(|layer| layer.visible)
            .map(|layer| layer_vertices(layer, dimensions, canvas_radius))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(RadarLayout {
        grid_circles: grid_circles(canvas_radius),
        axes: axes(dimensions, canvas_radius),
        vertices,
        markers: level_markers(dimensions, canvas_radius),
    })
}

/// Maps a point back to the level marker under it.
///
/// Inverse of [`level_markers`]: a marker's own coordinates always resolve to
/// its `(dimension, level)`. Otherwise the closest marker wins (first in
/// marker order on ties), and points farther than `tolerance` from every
/// marker give `None`.
pub fn hit_test(
    x: f64,
    y: f64,
    dimensions: &[Dimension],
    canvas_radius: f64,
    tolerance: f64,
) -> Option<LevelHit> {
    if canvas_radius <= 0.0 {
        return None;
    }

    let (marker, distance) = level_markers(dimensions, canvas_radius)
        .into_iter()
        .map(|marker| {
            let distance = (x - marker.x).hypot(y - marker.y);
            (marker, distance)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

    (distance <= tolerance).then(|| LevelHit {
        dimension_id: marker.dimension_id,
        level: marker.level,
    })
}
