//! Conversion from a feed loaded by `gtfs-structures`.

use std::sync::Arc;

use gtfs_structures::Gtfs;

use super::Feed;
use crate::identifiers::*;
use crate::models::{Agency, Route, RouteType, ShapePoint, Stop, StopTime, Trip};

impl From<&Gtfs> for Feed {
    /// Every table of a loaded [`Gtfs`] is present; rows are sorted by id so
    /// that maps come out the same on every run.
    fn from(gtfs: &Gtfs) -> Self {
        let agencies = gtfs.agencies.iter().map(convert_agency).collect();

        let mut routes: Vec<Route> = gtfs.routes.values().map(convert_route).collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut gtfs_trips: Vec<_> = gtfs.trips.values().collect();
        gtfs_trips.sort_by(|a, b| a.id.cmp(&b.id));

        let trips = gtfs_trips
            .iter()
            .map(|trip| {
                Trip::new(
                    trip.id.as_str(),
                    trip.route_id.as_str(),
                    trip.shape_id.as_deref(),
                )
            })
            .collect();

        let stop_times = gtfs_trips
            .iter()
            .flat_map(|trip| {
                trip.stop_times.iter().map(move |stop_time| {
                    StopTime::new(trip.id.as_str(), stop_time.stop.id.as_str())
                })
            })
            .collect();

        let mut stops = Vec::with_capacity(gtfs.stops.len());
        for stop in gtfs.stops.values() {
            match (stop.latitude, stop.longitude) {
                (Some(lat), Some(lon)) => {
                    let name = stop.name.as_deref().unwrap_or("");
                    stops.push(Stop::new(stop.id.as_str(), name, lat, lon));
                }
                _ => log::debug!("Skipping stop {} without coordinates", stop.id),
            }
        }
        stops.sort_by(|a, b| a.id.cmp(&b.id));

        let mut shape_ids: Vec<&String> = gtfs.shapes.keys().collect();
        shape_ids.sort();
        let shapes = shape_ids
            .into_iter()
            .flat_map(|shape_id| gtfs.shapes[shape_id].iter())
            .map(|point| {
                ShapePoint::new(
                    point.id.as_str(),
                    point.latitude,
                    point.longitude,
                    point.sequence,
                )
            })
            .collect();

        Feed::new()
            .with_agencies(agencies)
            .with_routes(routes)
            .with_trips(trips)
            .with_stop_times(stop_times)
            .with_stops(stops)
            .with_shapes(shapes)
    }
}

fn convert_agency(agency: &gtfs_structures::Agency) -> Agency {
    Agency {
        id: agency.id.as_deref().map(AgencyIdentifier::new),
        name: agency.name.as_str().into(),
        url: agency.url.as_str().into(),
        timezone: agency.timezone.as_str().into(),
        lang: agency.lang.as_deref().map(Arc::from),
        phone: agency.phone.as_deref().map(Arc::from),
    }
}

fn convert_route(route: &gtfs_structures::Route) -> Route {
    Route {
        id: RouteIdentifier::new(&route.id),
        short_name: route.short_name.as_deref().map(Arc::from),
        long_name: route.long_name.as_deref().map(Arc::from),
        description: route.desc.as_deref().map(Arc::from),
        route_type: convert_route_type(&route.route_type),
        color: Some(hex_color(route.color.r, route.color.g, route.color.b)),
        text_color: Some(hex_color(route.text_color.r, route.text_color.g, route.text_color.b)),
        agency_id: route.agency_id.as_deref().map(AgencyIdentifier::new),
    }
}

fn convert_route_type(route_type: &gtfs_structures::RouteType) -> RouteType {
    use gtfs_structures::RouteType as GtfsRouteType;

    match route_type {
        GtfsRouteType::Tramway => RouteType::Tram,
        GtfsRouteType::Subway => RouteType::Subway,
        GtfsRouteType::Rail => RouteType::Rail,
        GtfsRouteType::Bus => RouteType::Bus,
        GtfsRouteType::Ferry => RouteType::Ferry,
        GtfsRouteType::CableCar => RouteType::CableTram,
        GtfsRouteType::Gondola => RouteType::AerialLift,
        GtfsRouteType::Funicular => RouteType::Funicular,
        GtfsRouteType::Coach => RouteType::Extended(200),
        GtfsRouteType::Air => RouteType::Extended(1100),
        GtfsRouteType::Taxi => RouteType::Extended(1500),
        GtfsRouteType::Other(value) => {
            RouteType::from_gtfs(u16::try_from(*value).unwrap_or(u16::MAX))
        }
    }
}

fn hex_color(r: u8, g: u8, b: u8) -> Arc<str> {
    format!("{:02X}{:02X}{:02X}", r, g, b).into()
}
