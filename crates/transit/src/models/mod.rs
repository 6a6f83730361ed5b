//! GTFS records, enums and errors.

pub mod records;
pub mod types;

// Re-exports for convenience
pub use records::{Agency, Route, ShapePoint, Stop, StopTime, Trip};
pub use types::{JoinError, MapError, NotFoundError, Result, RouteType, Table};
