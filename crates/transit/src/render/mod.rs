//! Rendering seam between selected geometry and a map widget.
//!
//! A [`Renderer`] receives a base tile layer, point and line layers, and a
//! legend, then produces its output artifact. [`GeoJsonRenderer`] is the
//! bundled implementation; hosts with their own widget implement the trait.

pub mod geojson_renderer;

use crate::config::TileLayer;
use crate::selection::{ShapeLine, StopPoint};

pub use geojson_renderer::GeoJsonRenderer;

/// Builds one map from layers
pub trait Renderer {
    type Output;

    fn base_layer(&mut self, tiles: &TileLayer);

    fn add_points(&mut self, layer: PointLayer);

    fn add_lines(&mut self, layer: LineLayer);

    fn add_legend(&mut self, legend: Legend);

    fn finish(self) -> Self::Output;
}

/// How a point layer is drawn
#[derive(Clone, Debug, PartialEq)]
pub enum PointStyle {
    /// Default pin marker; clicking shows the stop name
    Marker,
    /// Filled circle
    Circle {
        color: String,
        /// Pixels
        radius: f64,
        fill_opacity: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointLayer {
    pub name: String,
    pub style: PointStyle,
    pub points: Vec<StopPoint>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayer {
    pub name: String,
    pub color: String,
    pub lines: Vec<ShapeLine>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn entry(mut self, label: &str, color: &str) -> Self {
        self.entries.push(LegendEntry {
            label: label.into(),
            color: color.into(),
        });
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }
}

/// Records everything it is given; used to inspect what an operation drew
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub tiles: Option<TileLayer>,
    pub points: Vec<PointLayer>,
    pub lines: Vec<LineLayer>,
    pub legends: Vec<Legend>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    type Output = Self;

    fn base_layer(&mut self, tiles: &TileLayer) {
        self.tiles = Some(tiles.clone());
    }

    fn add_points(&mut self, layer: PointLayer) {
        self.points.push(layer);
    }

    fn add_lines(&mut self, layer: LineLayer) {
        self.lines.push(layer);
    }

    fn add_legend(&mut self, legend: Legend) {
        self.legends.push(legend);
    }

    fn finish(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_builder() {
        let legend = Legend::default().entry("Stops", "red").entry("Route", "blue");

        assert_eq!(legend.labels(), vec!["Stops", "Route"]);
        assert_eq!(legend.entries[1].color, "blue");
    }
}
