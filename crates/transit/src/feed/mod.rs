//! In-memory GTFS feed.
//!
//! A feed is a set of already parsed tables. Each table is optional: `None`
//! means the loader never provided it, which is different from a provided but
//! empty table. Operations check the tables they need up front and fail with
//! [`MapError::InvalidFeed`] before doing any filtering.

#[cfg(feature = "gtfs")]
mod gtfs;

use crate::models::{Agency, MapError, Result, Route, ShapePoint, Stop, StopTime, Table, Trip};

/// Read-only snapshot of the six GTFS tables used for mapping
///
/// Feeds are never mutated by lookups and can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    agencies: Option<Vec<Agency>>,
    routes: Option<Vec<Route>>,
    trips: Option<Vec<Trip>>,
    stop_times: Option<Vec<StopTime>>,
    stops: Option<Vec<Stop>>,
    shapes: Option<Vec<ShapePoint>>,
}

impl Feed {
    /// Create a feed with no tables
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agencies(mut self, agencies: Vec<Agency>) -> Self {
        self.agencies = Some(agencies);
        self
    }

    pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = Some(routes);
        self
    }

    pub fn with_trips(mut self, trips: Vec<Trip>) -> Self {
        self.trips = Some(trips);
        self
    }

    pub fn with_stop_times(mut self, stop_times: Vec<StopTime>) -> Self {
        self.stop_times = Some(stop_times);
        self
    }

    pub fn with_stops(mut self, stops: Vec<Stop>) -> Self {
        self.stops = Some(stops);
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<ShapePoint>) -> Self {
        self.shapes = Some(shapes);
        self
    }

    pub fn has_table(&self, table: Table) -> bool {
        match table {
            Table::Agency => self.agencies.is_some(),
            Table::Routes => self.routes.is_some(),
            Table::Trips => self.trips.is_some(),
            Table::StopTimes => self.stop_times.is_some(),
            Table::Stops => self.stops.is_some(),
            Table::Shapes => self.shapes.is_some(),
        }
    }

    /// Fail on the first of `tables` the feed does not provide
    pub fn require(&self, tables: &[Table]) -> Result<()> {
        match tables.iter().find(|table| !self.has_table(**table)) {
            Some(missing) => Err(MapError::InvalidFeed(*missing)),
            None => Ok(()),
        }
    }

    pub fn agencies(&self) -> Result<&[Agency]> {
        table(&self.agencies, Table::Agency)
    }

    pub fn routes(&self) -> Result<&[Route]> {
        table(&self.routes, Table::Routes)
    }

    pub fn trips(&self) -> Result<&[Trip]> {
        table(&self.trips, Table::Trips)
    }

    pub fn stop_times(&self) -> Result<&[StopTime]> {
        table(&self.stop_times, Table::StopTimes)
    }

    pub fn stops(&self) -> Result<&[Stop]> {
        table(&self.stops, Table::Stops)
    }

    pub fn shapes(&self) -> Result<&[ShapePoint]> {
        table(&self.shapes, Table::Shapes)
    }
}

fn table<T>(rows: &Option<Vec<T>>, table: Table) -> Result<&[T]> {
    rows.as_deref().ok_or(MapError::InvalidFeed(table))
}

/// Small hand-built feeds shared by the unit tests
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::models::RouteType;

    /// One route with two shapes (outbound/inbound), three trips, and a
    /// route without trips.
    ///
    /// ```text
    /// R1 (agency A1): T1 -> SH1, T2 -> SH1, T3 -> SH2
    /// R2 (agency A1): no trips
    /// R3 (agency A2): T4 -> SH3
    /// ```
    pub fn sample_feed() -> Feed {
        Feed::new()
            .with_agencies(vec![
                Agency::new(Some("A1"), "Metro Transit"),
                Agency::new(Some("A2"), "Harbor Ferries"),
            ])
            .with_routes(vec![
                Route::new("R1", RouteType::Bus)
                    .with_agency("A1")
                    .with_names("1", "Main Street"),
                Route::new("R2", RouteType::Bus)
                    .with_agency("A1")
                    .with_names("2", "Depot Shuttle"),
                Route::new("R3", RouteType::Ferry)
                    .with_agency("A2")
                    .with_names("F", "Harbor Crossing"),
            ])
            .with_trips(vec![
                Trip::new("T1", "R1", Some("SH1")),
                Trip::new("T2", "R1", Some("SH1")),
                Trip::new("T3", "R1", Some("SH2")),
                Trip::new("T4", "R3", Some("SH3")),
            ])
            .with_stop_times(vec![
                StopTime::new("T1", "S1"),
                StopTime::new("T1", "S2"),
                StopTime::new("T2", "S1"),
                StopTime::new("T2", "S2"),
                StopTime::new("T3", "S2"),
                StopTime::new("T3", "S3"),
                StopTime::new("T4", "S3"),
                StopTime::new("T4", "S4"),
            ])
            .with_stops(vec![
                Stop::new("S1", "First Ave", 40.0, -73.0),
                Stop::new("S2", "Second Ave", 40.01, -73.01),
                Stop::new("S3", "Third Ave", 40.02, -73.02),
                Stop::new("S4", "Pier 4", 40.03, -73.05),
                Stop::new("S5", "Unserved", 41.0, -74.0),
            ])
            .with_shapes(vec![
                ShapePoint::new("SH1", 40.01, -73.01, 2),
                ShapePoint::new("SH1", 40.0, -73.0, 1),
                ShapePoint::new("SH2", 40.02, -73.02, 5),
                ShapePoint::new("SH2", 40.01, -73.01, 10),
                ShapePoint::new("SH3", 40.02, -73.02, 0),
                ShapePoint::new("SH3", 40.03, -73.05, 1),
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed() {
        let feed = Feed::new();
        assert!(!feed.has_table(Table::Stops));
        assert!(matches!(feed.stops(), Err(MapError::InvalidFeed(Table::Stops))));
    }

    #[test]
    fn test_provided_but_empty_table() {
        let feed = Feed::new().with_stop_times(Vec::new());
        assert!(feed.has_table(Table::StopTimes));
        assert_eq!(feed.stop_times().map(<[_]>::len).ok(), Some(0));
    }

    #[test]
    fn test_require_reports_first_missing_table() {
        let feed = Feed::new().with_trips(Vec::new()).with_stops(Vec::new());

        assert!(feed.require(&[Table::Trips, Table::Stops]).is_ok());
        assert!(matches!(
            feed.require(&[Table::Trips, Table::StopTimes, Table::Shapes]),
            Err(MapError::InvalidFeed(Table::StopTimes))
        ));
    }

    #[test]
    fn test_sample_feed_has_all_tables() {
        let feed = fixtures::sample_feed();
        assert!(feed
            .require(&[
                Table::Agency,
                Table::Routes,
                Table::Trips,
                Table::StopTimes,
                Table::Stops,
                Table::Shapes,
            ])
            .is_ok());
    }
}
