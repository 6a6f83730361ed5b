//! # transit-map
//!
//! Turns GTFS feeds into map layers: a single stop, the stops of a route, a
//! route's shapes, or every route of an agency.
//!
//! ## Features
//!
//! - **Typed tables**: GTFS rows as plain structs with typed identifiers
//! - **Ordered shapes**: shape points sorted by sequence, then simplified
//! - **Explicit joins**: a missing route or agency is an error, or a logged
//!   skip when [`JoinPolicy::SkipRoute`] is chosen
//! - **Pluggable rendering**: implement [`Renderer`] for your map widget, or
//!   use the bundled GeoJSON output
//! - **GTFS loading** (feature `gtfs`): convert a `gtfs_structures::Gtfs`
//!
//! ## Example
//!
//! ```
//! use transit_map::prelude::*;
//!
//! let feed = Feed::new()
//!     .with_agencies(vec![Agency::new(Some("mta"), "MTA")])
//!     .with_routes(vec![Route::new("M15", RouteType::Bus).with_agency("mta")])
//!     .with_trips(vec![Trip::new("trip_1", "M15", Some("M15_north"))])
//!     .with_stop_times(vec![StopTime::new("trip_1", "south_ferry")])
//!     .with_stops(vec![Stop::new("south_ferry", "South Ferry", 40.7013, -74.0132)])
//!     .with_shapes(vec![
//!         ShapePoint::new("M15_north", 40.7013, -74.0132, 1),
//!         ShapePoint::new("M15_north", 40.7505, -73.9935, 2),
//!     ]);
//!
//! let map = TransitMapper::new(&feed)
//!     .map_route_shape(&RouteIdentifier::new("M15"), true, GeoJsonRenderer::new())
//!     .unwrap();
//!
//! // One line for the shape, one circle for the stop
//! assert_eq!(map.features.len(), 2);
//! ```

pub mod config;
pub mod feed;
pub mod geometry;
pub mod identifiers;
pub mod mapper;
pub mod models;
pub mod render;
pub mod selection;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{JoinPolicy, MapOptions, MapStyle, TileLayer};
    pub use crate::feed::Feed;
    pub use crate::geometry::{GeometrySimplifier, NoSimplification, RamerDouglasPeucker};
    pub use crate::identifiers::*;
    pub use crate::mapper::TransitMapper;
    pub use crate::models::{records::*, types::*};
    pub use crate::render::{
        GeoJsonRenderer, Legend, LegendEntry, LineLayer, PointLayer, PointStyle, Renderer,
    };
    pub use crate::selection::{ShapeLine, StopPoint};
}

pub use prelude::*;
