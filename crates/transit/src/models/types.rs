//! Core enums and error types for GTFS map selection.

use std::fmt;

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// GTFS route types
///
/// The basic values 0..=7 are named; extended route types (e.g. 200 for
/// coaches, 1100 for air service) are carried as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteType {
    Tram,
    Subway,
    Rail,
    Bus,
    Ferry,
    CableTram,
    AerialLift,
    Funicular,
    Extended(u16),
}

impl RouteType {
    pub fn from_gtfs(value: u16) -> Self {
        match value {
            0 => Self::Tram,
            1 => Self::Subway,
            2 => Self::Rail,
            3 => Self::Bus,
            4 => Self::Ferry,
            5 => Self::CableTram,
            6 => Self::AerialLift,
            7 => Self::Funicular,
            other => Self::Extended(other),
        }
    }

    pub fn to_gtfs(self) -> u16 {
        match self {
            Self::Tram => 0,
            Self::Subway => 1,
            Self::Rail => 2,
            Self::Bus => 3,
            Self::Ferry => 4,
            Self::CableTram => 5,
            Self::AerialLift => 6,
            Self::Funicular => 7,
            Self::Extended(value) => value,
        }
    }
}

/// The GTFS tables a [`Feed`](crate::feed::Feed) can expose
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Agency,
    Routes,
    Trips,
    StopTimes,
    Stops,
    Shapes,
}

impl Table {
    /// File name of the table inside a GTFS archive
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Agency => "agency.txt",
            Self::Routes => "routes.txt",
            Self::Trips => "trips.txt",
            Self::StopTimes => "stop_times.txt",
            Self::Stops => "stops.txt",
            Self::Shapes => "shapes.txt",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A lookup by id matched nothing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("Stop '{0}' was not found.")]
    Stop(StopIdentifier),

    #[error("No trips for Route ID '{0}' were found.")]
    RouteTrips(RouteIdentifier),

    #[error("No shapes for Route ID '{0}' were found.")]
    RouteShapes(RouteIdentifier),

    #[error("No routes for Agency ID '{0}' were found.")]
    AgencyRoutes(AgencyIdentifier),

    #[error("No shapes for Agency ID '{0}' were found.")]
    AgencyShapes(AgencyIdentifier),
}

/// A relation between rows that survived filtering could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    #[error("Route '{route_id}' is referenced by trips but missing from routes.txt")]
    MissingRoute { route_id: RouteIdentifier },

    #[error("Agency '{agency_id}' of route '{route_id}' is missing from agency.txt")]
    MissingAgency {
        route_id: RouteIdentifier,
        agency_id: AgencyIdentifier,
    },

    #[error("Route '{route_id}' has no agency_id and the feed does not have exactly one agency")]
    UnresolvedAgency { route_id: RouteIdentifier },
}

impl JoinError {
    /// The route whose shapes could not be annotated
    pub fn route_id(&self) -> &RouteIdentifier {
        match self {
            Self::MissingRoute { route_id }
            | Self::MissingAgency { route_id, .. }
            | Self::UnresolvedAgency { route_id } => route_id,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Feed is missing the required {0} table")]
    InvalidFeed(Table),

    #[error("{0} id must not be empty")]
    EmptyIdentifier(&'static str),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Join(#[from] JoinError),
}

pub type Result<T> = std::result::Result<T, MapError>;
