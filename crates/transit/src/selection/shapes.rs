//! Route shapes: line assembly and the route/agency metadata join.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::ShapeLine;
use crate::config::{JoinPolicy, MapOptions};
use crate::feed::Feed;
use crate::geometry::{assemble_line, GeometrySimplifier};
use crate::identifiers::*;
use crate::models::{Agency, JoinError, MapError, NotFoundError, Result, Route, ShapePoint, Table};

/// Distinct shape ids referenced by the trips of a route
///
/// Fails with [`NotFoundError::RouteShapes`] when no trip of the route has a
/// shape, including when the route has no trips at all.
pub fn route_shape_ids(
    feed: &Feed,
    route_id: &RouteIdentifier,
) -> Result<BTreeSet<ShapeIdentifier>> {
    if route_id.is_empty() {
        return Err(MapError::EmptyIdentifier("Route"));
    }

    let shape_ids: BTreeSet<ShapeIdentifier> = feed
        .trips()?
        .iter()
        .filter(|trip| trip.route_id == *route_id)
        .filter_map(|trip| trip.shape_id.clone())
        .collect();

    if shape_ids.is_empty() {
        return Err(NotFoundError::RouteShapes(route_id.clone()).into());
    }

    Ok(shape_ids)
}

/// One simplified, metadata-annotated polyline per shape used by a route
///
/// Lines come out in shape id order. Fails with
/// [`NotFoundError::RouteShapes`] when none of the route's shapes has the two
/// points a line needs. With [`JoinPolicy::SkipRoute`] a route whose metadata
/// cannot be joined yields no lines instead of an error.
pub fn route_shape_lines<S>(
    feed: &Feed,
    route_id: &RouteIdentifier,
    simplifier: &S,
    options: &MapOptions,
) -> Result<Vec<ShapeLine>>
where
    S: GeometrySimplifier + ?Sized,
{
    feed.require(&[Table::Trips, Table::Shapes, Table::Routes, Table::Agency])?;

    let shape_ids = route_shape_ids(feed, route_id)?;
    let catalog = RouteCatalog::new(feed)?;
    catalog.lines_for_route(feed, route_id, &shape_ids, simplifier, options)
}

/// Route and agency lookup tables for the metadata join
pub(crate) struct RouteCatalog<'a> {
    routes: HashMap<&'a RouteIdentifier, &'a Route>,
    agencies: HashMap<&'a AgencyIdentifier, &'a Agency>,
    /// GTFS lets routes omit agency_id when the feed has a single agency
    sole_agency: Option<&'a Agency>,
}

impl<'a> RouteCatalog<'a> {
    pub(crate) fn new(feed: &'a Feed) -> Result<Self> {
        let routes = feed.routes()?.iter().map(|route| (&route.id, route)).collect();

        let all_agencies = feed.agencies()?;
        let agencies = all_agencies
            .iter()
            .filter_map(|agency| agency.id.as_ref().map(|id| (id, agency)))
            .collect();

        let sole_agency = match all_agencies {
            [agency] => Some(agency),
            _ => None,
        };

        Ok(Self {
            routes,
            agencies,
            sole_agency,
        })
    }

    pub(crate) fn agency_of(&self, route: &Route) -> std::result::Result<&'a Agency, JoinError> {
        match &route.agency_id {
            Some(agency_id) => self
                .agencies
                .get(agency_id)
                .copied()
                .ok_or_else(|| JoinError::MissingAgency {
                    route_id: route.id.clone(),
                    agency_id: agency_id.clone(),
                }),
            None => self.sole_agency.ok_or_else(|| JoinError::UnresolvedAgency {
                route_id: route.id.clone(),
            }),
        }
    }

    fn resolve(
        &self,
        route_id: &RouteIdentifier,
    ) -> std::result::Result<(&'a Route, &'a Agency), JoinError> {
        let route = self
            .routes
            .get(route_id)
            .copied()
            .ok_or_else(|| JoinError::MissingRoute {
                route_id: route_id.clone(),
            })?;

        Ok((route, self.agency_of(route)?))
    }

    /// Assemble and annotate the lines of `shape_ids` for one route
    ///
    /// A joined route must end up with at least one line.
    pub(crate) fn lines_for_route<S>(
        &self,
        feed: &Feed,
        route_id: &RouteIdentifier,
        shape_ids: &BTreeSet<ShapeIdentifier>,
        simplifier: &S,
        options: &MapOptions,
    ) -> Result<Vec<ShapeLine>>
    where
        S: GeometrySimplifier + ?Sized,
    {
        let (route, agency) = match self.resolve(route_id) {
            Ok(joined) => joined,
            Err(err) => match options.join_policy {
                JoinPolicy::Abort => return Err(err.into()),
                JoinPolicy::SkipRoute => {
                    log::warn!("Skipping {} shapes: {}", shape_ids.len(), err);
                    return Ok(Vec::new());
                }
            },
        };

        let groups = group_shape_points(feed.shapes()?, shape_ids);

        let mut lines = Vec::with_capacity(shape_ids.len());
        for shape_id in shape_ids {
            let points = groups.get(shape_id).map(Vec::as_slice).unwrap_or_default();
            if points.len() < 2 {
                log::warn!(
                    "Shape {} of route {} has {} points, not enough for a line",
                    shape_id,
                    route_id,
                    points.len()
                );
                continue;
            }

            let assembled = assemble_line(points.iter().copied());
            let geometry = simplifier.simplify(&assembled, options.simplify_tolerance);
            log::debug!(
                "Shape {}: {} points, {} after simplification",
                shape_id,
                assembled.0.len(),
                geometry.0.len()
            );

            lines.push(ShapeLine {
                shape_id: shape_id.clone(),
                geometry,
                route: route.clone(),
                agency: agency.clone(),
            });
        }

        if lines.is_empty() {
            return Err(NotFoundError::RouteShapes(route_id.clone()).into());
        }

        Ok(lines)
    }
}

fn group_shape_points<'a>(
    shapes: &'a [ShapePoint],
    shape_ids: &BTreeSet<ShapeIdentifier>,
) -> BTreeMap<&'a ShapeIdentifier, Vec<&'a ShapePoint>> {
    let mut groups: BTreeMap<&ShapeIdentifier, Vec<&ShapePoint>> = BTreeMap::new();
    for point in shapes.iter().filter(|point| shape_ids.contains(&point.shape_id)) {
        groups.entry(&point.shape_id).or_default().push(point);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fixtures::sample_feed;
    use crate::geometry::NoSimplification;
    use crate::models::{RouteType, Trip};

    fn coords(line: &ShapeLine) -> Vec<(f64, f64)> {
        line.geometry.coords().map(|c| (c.x, c.y)).collect()
    }

    fn lines(feed: &Feed, route: &str) -> Result<Vec<ShapeLine>> {
        route_shape_lines(
            feed,
            &RouteIdentifier::new(route),
            &NoSimplification,
            &MapOptions::default(),
        )
    }

    #[test]
    fn test_one_line_per_shape() {
        // T1 and T2 share SH1; T3 uses SH2
        let feed = sample_feed();
        let lines = lines(&feed, "R1").unwrap();

        let shape_ids: Vec<_> = lines.iter().map(|l| l.shape_id.as_str()).collect();
        assert_eq!(shape_ids, vec!["SH1", "SH2"]);
        assert!(lines.iter().all(|l| l.route_id().as_str() == "R1"));
        assert!(lines.iter().all(|l| l.agency.id == Some(AgencyIdentifier::new("A1"))));
    }

    #[test]
    fn test_line_follows_sequence() {
        let feed = sample_feed();
        let lines = lines(&feed, "R1").unwrap();

        assert_eq!(coords(&lines[0]), vec![(-73.0, 40.0), (-73.01, 40.01)]);
        assert_eq!(coords(&lines[1]), vec![(-73.02, 40.02), (-73.01, 40.01)]);
    }

    #[test]
    fn test_three_trips_one_record() {
        let feed = sample_feed().with_trips(vec![
            Trip::new("T1", "R1", Some("SH1")),
            Trip::new("T2", "R1", Some("SH1")),
            Trip::new("T3", "R1", Some("SH1")),
        ]);

        assert_eq!(lines(&feed, "R1").unwrap().len(), 1);
    }

    #[test]
    fn test_route_without_shapes() {
        let feed = sample_feed();

        let err = lines(&feed, "R2").unwrap_err();
        assert_eq!(err.to_string(), "No shapes for Route ID 'R2' were found.");

        let err = lines(&feed, "R404").unwrap_err();
        assert_eq!(err.to_string(), "No shapes for Route ID 'R404' were found.");
    }

    #[test]
    fn test_trips_without_shape_ids() {
        let feed = sample_feed().with_trips(vec![Trip::new("T1", "R1", None)]);
        assert!(matches!(
            lines(&feed, "R1"),
            Err(MapError::NotFound(NotFoundError::RouteShapes(_)))
        ));
    }

    #[test]
    fn test_shape_without_points_is_dropped() {
        let feed = sample_feed().with_trips(vec![
            Trip::new("T1", "R1", Some("SH1")),
            Trip::new("T2", "R1", Some("GHOST")),
        ]);

        let lines = lines(&feed, "R1").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].shape_id.as_str(), "SH1");
    }

    #[test]
    fn test_route_with_only_single_point_shapes() {
        let feed = sample_feed()
            .with_trips(vec![Trip::new("T1", "R1", Some("DOT"))])
            .with_shapes(vec![ShapePoint::new("DOT", 40.0, -73.0, 1)]);

        let err = lines(&feed, "R1").unwrap_err();
        assert!(matches!(err, MapError::NotFound(NotFoundError::RouteShapes(_))));
        assert_eq!(err.to_string(), "No shapes for Route ID 'R1' were found.");
    }

    #[test]
    fn test_missing_route_is_a_join_error() {
        let feed = sample_feed().with_trips(vec![Trip::new("T9", "R9", Some("SH1"))]);

        let err = lines(&feed, "R9").unwrap_err();
        assert!(matches!(err, MapError::Join(JoinError::MissingRoute { .. })));
    }

    #[test]
    fn test_missing_agency_is_a_join_error() {
        let feed = sample_feed().with_agencies(vec![Agency::new(Some("A2"), "Harbor Ferries")]);

        let err = lines(&feed, "R1").unwrap_err();
        match err {
            MapError::Join(JoinError::MissingAgency { route_id, agency_id }) => {
                assert_eq!(route_id.as_str(), "R1");
                assert_eq!(agency_id.as_str(), "A1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_policy_drops_unjoinable_route() {
        let feed = sample_feed().with_agencies(vec![Agency::new(Some("A2"), "Harbor Ferries")]);
        let options = MapOptions {
            join_policy: JoinPolicy::SkipRoute,
            ..MapOptions::default()
        };

        let route = RouteIdentifier::new("R1");
        let lines = route_shape_lines(&feed, &route, &NoSimplification, &options).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_route_without_agency_id_uses_sole_agency() {
        let feed = sample_feed()
            .with_agencies(vec![Agency::new(None, "Only Operator")])
            .with_routes(vec![Route::new("R1", RouteType::Bus)]);

        let lines = lines(&feed, "R1").unwrap();
        assert_eq!(&*lines[0].agency.name, "Only Operator");
    }

    #[test]
    fn test_route_without_agency_id_is_ambiguous() {
        let feed = sample_feed().with_routes(vec![Route::new("R1", RouteType::Bus)]);

        assert!(matches!(
            lines(&feed, "R1"),
            Err(MapError::Join(JoinError::UnresolvedAgency { .. }))
        ));
    }

    #[test]
    fn test_requires_shapes_table() {
        let feed = Feed::new()
            .with_trips(vec![Trip::new("T1", "R1", Some("SH1"))])
            .with_routes(Vec::new())
            .with_agencies(Vec::new());

        assert!(matches!(lines(&feed, "R1"), Err(MapError::InvalidFeed(Table::Shapes))));
    }
}
