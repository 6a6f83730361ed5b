//! Stop lookups: a single stop, and every stop served by a route.

use std::collections::{BTreeSet, HashSet};

use super::StopPoint;
use crate::feed::Feed;
use crate::identifiers::*;
use crate::models::{MapError, NotFoundError, Result, Table};

/// Look up one stop by id
pub fn stop_point(feed: &Feed, stop_id: &StopIdentifier) -> Result<StopPoint> {
    if stop_id.is_empty() {
        return Err(MapError::EmptyIdentifier("Stop"));
    }

    feed.stops()?
        .iter()
        .find(|stop| stop.id == *stop_id)
        .map(StopPoint::from)
        .ok_or_else(|| NotFoundError::Stop(stop_id.clone()).into())
}

/// Ids of every trip running on a route
///
/// Fails with [`NotFoundError::RouteTrips`] when the route has no trips.
pub fn route_trip_ids(feed: &Feed, route_id: &RouteIdentifier) -> Result<HashSet<TripIdentifier>> {
    if route_id.is_empty() {
        return Err(MapError::EmptyIdentifier("Route"));
    }

    let trip_ids: HashSet<TripIdentifier> = feed
        .trips()?
        .iter()
        .filter(|trip| trip.route_id == *route_id)
        .map(|trip| trip.id.clone())
        .collect();

    if trip_ids.is_empty() {
        return Err(NotFoundError::RouteTrips(route_id.clone()).into());
    }

    log::debug!("Route {} has {} trips", route_id, trip_ids.len());
    Ok(trip_ids)
}

/// Distinct stops visited by any trip on a route, in stops.txt order
///
/// A route whose trips have no stop times yields an empty list rather than an
/// error.
pub fn route_stop_points(feed: &Feed, route_id: &RouteIdentifier) -> Result<Vec<StopPoint>> {
    feed.require(&[Table::Trips, Table::StopTimes, Table::Stops])?;

    let trip_ids = route_trip_ids(feed, route_id)?;
    stops_for_trips(feed, &trip_ids)
}

/// Distinct stops visited by any of `trip_ids`, in stops.txt order
pub(crate) fn stops_for_trips(
    feed: &Feed,
    trip_ids: &HashSet<TripIdentifier>,
) -> Result<Vec<StopPoint>> {
    let stop_ids: BTreeSet<&StopIdentifier> = feed
        .stop_times()?
        .iter()
        .filter(|stop_time| trip_ids.contains(&stop_time.trip_id))
        .map(|stop_time| &stop_time.stop_id)
        .collect();

    let mut seen = HashSet::with_capacity(stop_ids.len());
    let points: Vec<StopPoint> = feed
        .stops()?
        .iter()
        .filter(|stop| stop_ids.contains(&stop.id) && seen.insert(&stop.id))
        .map(StopPoint::from)
        .collect();

    if points.len() < stop_ids.len() {
        log::debug!(
            "{} stop ids from stop_times.txt are missing from stops.txt",
            stop_ids.len() - points.len()
        );
    }

    Ok(points)
}
