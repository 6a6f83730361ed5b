//! Agency-wide selection: every route an agency operates.

use std::collections::HashSet;

use super::shapes::{route_shape_ids, RouteCatalog};
use super::stops::{route_trip_ids, stops_for_trips};
use super::{ShapeLine, StopPoint};
use crate::config::MapOptions;
use crate::feed::Feed;
use crate::geometry::GeometrySimplifier;
use crate::identifiers::*;
use crate::models::{MapError, NotFoundError, Result, Table};

/// Everything drawn on an agency map
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgencySelection {
    pub lines: Vec<ShapeLine>,
    /// Empty unless stops were requested
    pub stops: Vec<StopPoint>,
}

/// Routes operated by an agency, in routes.txt order
///
/// Routes without an agency_id count as the agency's when it is the only one
/// in the feed.
pub fn agency_route_ids(
    feed: &Feed,
    agency_id: &AgencyIdentifier,
) -> Result<Vec<RouteIdentifier>> {
    if agency_id.is_empty() {
        return Err(MapError::EmptyIdentifier("Agency"));
    }
    feed.require(&[Table::Routes, Table::Agency])?;

    let sole_agency_matches = match feed.agencies()? {
        [agency] => agency.id.as_ref() == Some(agency_id),
        _ => false,
    };

    let route_ids: Vec<RouteIdentifier> = feed
        .routes()?
        .iter()
        .filter(|route| match &route.agency_id {
            Some(id) => id == agency_id,
            None => sole_agency_matches,
        })
        .map(|route| route.id.clone())
        .collect();

    if route_ids.is_empty() {
        return Err(NotFoundError::AgencyRoutes(agency_id.clone()).into());
    }

    Ok(route_ids)
}

/// Lines of every route of an agency, plus their stops when `include_stops`
///
/// Routes with no shapes are skipped with a warning. The call fails only when
/// none of the agency's routes produce a line.
pub fn agency_selection<S>(
    feed: &Feed,
    agency_id: &AgencyIdentifier,
    include_stops: bool,
    simplifier: &S,
    options: &MapOptions,
) -> Result<AgencySelection>
where
    S: GeometrySimplifier + ?Sized,
{
    let mut required = vec![Table::Agency, Table::Routes, Table::Trips, Table::Shapes];
    if include_stops {
        required.extend([Table::StopTimes, Table::Stops]);
    }
    feed.require(&required)?;

    let route_ids = agency_route_ids(feed, agency_id)?;
    let catalog = RouteCatalog::new(feed)?;

    let mut selection = AgencySelection::default();
    for route_id in &route_ids {
        let shape_ids = match route_shape_ids(feed, route_id) {
            Ok(shape_ids) => shape_ids,
            Err(MapError::NotFound(err)) => {
                log::warn!("Agency {}: {}", agency_id, err);
                continue;
            }
            Err(err) => return Err(err),
        };

        match catalog.lines_for_route(feed, route_id, &shape_ids, simplifier, options) {
            Ok(lines) => selection.lines.extend(lines),
            Err(MapError::NotFound(err)) => log::warn!("Agency {}: {}", agency_id, err),
            Err(err) => return Err(err),
        }
    }

    if selection.lines.is_empty() {
        return Err(NotFoundError::AgencyShapes(agency_id.clone()).into());
    }

    if include_stops {
        let mut trip_ids = HashSet::new();
        for route_id in &route_ids {
            match route_trip_ids(feed, route_id) {
                Ok(ids) => trip_ids.extend(ids),
                Err(MapError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
        }
        selection.stops = stops_for_trips(feed, &trip_ids)?;
    }

    log::debug!(
        "Agency {}: {} routes, {} lines, {} stops",
        agency_id,
        route_ids.len(),
        selection.lines.len(),
        selection.stops.len()
    );

    Ok(selection)
}
