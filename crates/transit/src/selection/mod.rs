//! Selection of map geometry from feed tables.
//!
//! Every function here is a pure computation over a borrowed [`Feed`]: it
//! checks the tables it needs, filters by id, and returns owned geometry
//! ready for a [`Renderer`](crate::render::Renderer). Nothing is rendered
//! until a selection has fully succeeded.
//!
//! [`Feed`]: crate::feed::Feed

pub mod agency;
pub mod shapes;
pub mod stops;

use geo::{LineString, Point};
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{Agency, Route, Stop};

pub use agency::{agency_route_ids, agency_selection, AgencySelection};
pub use shapes::{route_shape_ids, route_shape_lines};
pub use stops::{route_stop_points, route_trip_ids, stop_point};

/// A stop projected to what a marker needs
#[derive(Clone, Debug, PartialEq)]
pub struct StopPoint {
    pub stop_id: StopIdentifier,
    pub name: Arc<str>,
    /// x = longitude, y = latitude
    pub location: Point,
}

impl StopPoint {
    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }
}

impl From<&Stop> for StopPoint {
    fn from(stop: &Stop) -> Self {
        Self {
            stop_id: stop.id.clone(),
            name: stop.name.clone(),
            location: stop.location,
        }
    }
}

/// One polyline per (route, shape) pair, annotated with its route and agency
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLine {
    pub shape_id: ShapeIdentifier,
    /// (lon, lat) vertices in shape sequence order, after simplification
    pub geometry: LineString,
    pub route: Route,
    pub agency: Agency,
}

impl ShapeLine {
    pub fn route_id(&self) -> &RouteIdentifier {
        &self.route.id
    }
}
