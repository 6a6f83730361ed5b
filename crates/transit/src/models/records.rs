//! Row types for the GTFS tables the selector reads.
//!
//! Only the columns needed to build map geometry and its metadata are kept.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;
use crate::models::types::RouteType;

/// A row of stops.txt
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    /// x = longitude, y = latitude
    pub location: Point,
}

impl Stop {
    pub fn new(id: impl Into<StopIdentifier>, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: Point::new(lon, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// A row of routes.txt
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub id: RouteIdentifier,
    pub short_name: Option<Arc<str>>,
    pub long_name: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
    pub route_type: RouteType,
    /// Hex RGB without the leading '#', e.g. "FF0000"
    pub color: Option<Arc<str>>,
    pub text_color: Option<Arc<str>>,
    pub agency_id: Option<AgencyIdentifier>,
}

impl Route {
    pub fn new(id: impl Into<RouteIdentifier>, route_type: RouteType) -> Self {
        Self {
            id: id.into(),
            short_name: None,
            long_name: None,
            description: None,
            route_type,
            color: None,
            text_color: None,
            agency_id: None,
        }
    }

    pub fn with_agency(mut self, agency_id: impl Into<AgencyIdentifier>) -> Self {
        self.agency_id = Some(agency_id.into());
        self
    }

    pub fn with_names(mut self, short_name: &str, long_name: &str) -> Self {
        self.short_name = Some(short_name.into());
        self.long_name = Some(long_name.into());
        self
    }
}

/// A row of trips.txt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trip {
    pub id: TripIdentifier,
    pub route_id: RouteIdentifier,
    pub shape_id: Option<ShapeIdentifier>,
}

impl Trip {
    pub fn new(
        id: impl Into<TripIdentifier>,
        route_id: impl Into<RouteIdentifier>,
        shape_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            shape_id: shape_id.map(ShapeIdentifier::new),
        }
    }
}

/// A row of stop_times.txt, reduced to the trip/stop relation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: TripIdentifier,
    pub stop_id: StopIdentifier,
}

impl StopTime {
    pub fn new(trip_id: impl Into<TripIdentifier>, stop_id: impl Into<StopIdentifier>) -> Self {
        Self {
            trip_id: trip_id.into(),
            stop_id: stop_id.into(),
        }
    }
}

/// A row of shapes.txt
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePoint {
    pub shape_id: ShapeIdentifier,
    /// x = longitude, y = latitude
    pub location: Point,
    pub sequence: usize,
}

impl ShapePoint {
    pub fn new(shape_id: impl Into<ShapeIdentifier>, lat: f64, lon: f64, sequence: usize) -> Self {
        Self {
            shape_id: shape_id.into(),
            location: Point::new(lon, lat),
            sequence,
        }
    }
}

/// A row of agency.txt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agency {
    /// Optional in GTFS when the feed has a single agency
    pub id: Option<AgencyIdentifier>,
    pub name: Arc<str>,
    pub url: Arc<str>,
    pub timezone: Arc<str>,
    pub lang: Option<Arc<str>>,
    pub phone: Option<Arc<str>>,
}

impl Agency {
    pub fn new(id: Option<&str>, name: &str) -> Self {
        Self {
            id: id.map(AgencyIdentifier::new),
            name: name.into(),
            url: "".into(),
            timezone: "".into(),
            lang: None,
            phone: None,
        }
    }
}
