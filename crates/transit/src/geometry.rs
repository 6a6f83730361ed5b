//! Line assembly and simplification for shape geometry.

use geo::{Coord, LineString, Simplify};

use crate::models::ShapePoint;

/// Reduces the vertex count of a polyline
///
/// Implementations must keep the first and last vertex so that a simplified
/// route still starts and ends where the shape does.
pub trait GeometrySimplifier: Send + Sync {
    fn simplify(&self, line: &LineString, tolerance: f64) -> LineString;
}

/// Ramer-Douglas-Peucker simplification in coordinate units (degrees)
#[derive(Clone, Copy, Debug, Default)]
pub struct RamerDouglasPeucker;

impl GeometrySimplifier for RamerDouglasPeucker {
    fn simplify(&self, line: &LineString, tolerance: f64) -> LineString {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return line.clone();
        }
        line.simplify(&tolerance)
    }
}

/// Keeps every vertex
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSimplification;

impl GeometrySimplifier for NoSimplification {
    fn simplify(&self, line: &LineString, _tolerance: f64) -> LineString {
        line.clone()
    }
}

/// Join the points of one shape into a polyline, ordered by sequence number
///
/// Points sharing a sequence number are ordered by longitude, then latitude,
/// so the result does not depend on the order rows were loaded in.
pub fn assemble_line<'a>(points: impl IntoIterator<Item = &'a ShapePoint>) -> LineString {
    let mut points: Vec<&ShapePoint> = points.into_iter().collect();
    points.sort_by(|a, b| {
        a.sequence
            .cmp(&b.sequence)
            .then_with(|| a.location.x().total_cmp(&b.location.x()))
            .then_with(|| a.location.y().total_cmp(&b.location.y()))
    });

    LineString::new(
        points
            .into_iter()
            .map(|point| Coord {
                x: point.location.x(),
                y: point.location.y(),
            })
            .collect(),
    )
}
