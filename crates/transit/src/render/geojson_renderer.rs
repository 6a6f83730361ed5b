//! Renders a map as a GeoJSON `FeatureCollection`.
//!
//! Stops become `Point` features and shapes `LineString` features; styling
//! and metadata go into feature properties. The base tiles and the legend are
//! stored as foreign members (`tiles`, `legend`) and the collection `bbox`
//! covers every geometry so a viewer can fit the map to it.

use geo::{BoundingRect, Coord, Rect};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use super::{Legend, LegendEntry, LineLayer, PointLayer, PointStyle, Renderer};
use crate::config::TileLayer;
use crate::selection::{ShapeLine, StopPoint};

#[derive(Debug, Default)]
pub struct GeoJsonRenderer {
    features: Vec<Feature>,
    tiles: Option<TileLayer>,
    legend: Vec<LegendEntry>,
    bounds: Option<Rect>,
}

impl GeoJsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn extend_bounds(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            Some(current) => Rect::new(
                Coord {
                    x: current.min().x.min(rect.min().x),
                    y: current.min().y.min(rect.min().y),
                },
                Coord {
                    x: current.max().x.max(rect.max().x),
                    y: current.max().y.max(rect.max().y),
                },
            ),
            None => rect,
        });
    }
}

impl Renderer for GeoJsonRenderer {
    type Output = FeatureCollection;

    fn base_layer(&mut self, tiles: &TileLayer) {
        self.tiles = Some(tiles.clone());
    }

    fn add_points(&mut self, layer: PointLayer) {
        for point in &layer.points {
            self.extend_bounds(point.location.bounding_rect());
            self.features.push(point_feature(point, &layer.name, &layer.style));
        }
    }

    fn add_lines(&mut self, layer: LineLayer) {
        for line in &layer.lines {
            if let Some(rect) = line.geometry.bounding_rect() {
                self.extend_bounds(rect);
            }
            self.features.push(line_feature(line, &layer.name, &layer.color));
        }
    }

    fn add_legend(&mut self, legend: Legend) {
        self.legend.extend(legend.entries);
    }

    fn finish(self) -> FeatureCollection {
        let mut foreign_members = JsonObject::new();
        if let Some(tiles) = &self.tiles {
            foreign_members.insert(
                "tiles".to_string(),
                json!({
                    "name": tiles.name,
                    "url": tiles.url_template,
                    "attribution": tiles.attribution,
                }),
            );
        }
        foreign_members.insert(
            "legend".to_string(),
            self.legend
                .iter()
                .map(|entry| json!({ "label": entry.label, "color": entry.color }))
                .collect(),
        );

        FeatureCollection {
            bbox: self
                .bounds
                .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]),
            features: self.features,
            foreign_members: Some(foreign_members),
        }
    }
}

fn point_feature(point: &StopPoint, layer: &str, style: &PointStyle) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("layer".to_string(), json!(layer));
    properties.insert("stop_id".to_string(), json!(point.stop_id.as_str()));
    properties.insert("name".to_string(), json!(&*point.name));

    match style {
        PointStyle::Marker => {
            properties.insert("marker".to_string(), json!("marker"));
            properties.insert("popup".to_string(), json!(&*point.name));
        }
        PointStyle::Circle {
            color,
            radius,
            fill_opacity,
        } => {
            properties.insert("marker".to_string(), json!("circle"));
            properties.insert("color".to_string(), json!(color));
            properties.insert("radius".to_string(), json!(radius));
            properties.insert("fill_opacity".to_string(), json!(fill_opacity));
        }
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![point.lng(), point.lat()]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn line_feature(line: &ShapeLine, layer: &str, color: &str) -> Feature {
    let route = &line.route;
    let agency = &line.agency;

    let mut properties = JsonObject::new();
    properties.insert("layer".to_string(), json!(layer));
    properties.insert("stroke".to_string(), json!(color));
    properties.insert("route_id".to_string(), json!(route.id.as_str()));
    properties.insert("shape_id".to_string(), json!(line.shape_id.as_str()));
    properties.insert("route_short_name".to_string(), json!(route.short_name.as_deref()));
    properties.insert("route_long_name".to_string(), json!(route.long_name.as_deref()));
    properties.insert("route_desc".to_string(), json!(route.description.as_deref()));
    properties.insert("route_type".to_string(), json!(route.route_type.to_gtfs()));
    properties.insert("route_color".to_string(), json!(route.color.as_deref()));
    properties.insert("route_text_color".to_string(), json!(route.text_color.as_deref()));
    properties.insert(
        "agency_id".to_string(),
        json!(agency.id.as_ref().map(|id| id.as_str())),
    );
    properties.insert("agency_name".to_string(), json!(&*agency.name));
    properties.insert("agency_url".to_string(), json!(&*agency.url));
    properties.insert("agency_timezone".to_string(), json!(&*agency.timezone));
    properties.insert("agency_lang".to_string(), json!(agency.lang.as_deref()));
    properties.insert("agency_phone".to_string(), json!(agency.phone.as_deref()));

    let coordinates: Vec<Vec<f64>> = line.geometry.coords().map(|c| vec![c.x, c.y]).collect();

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(coordinates))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
