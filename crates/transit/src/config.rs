//! Map options: simplification, join failure handling and styling.

/// Default simplification tolerance in degrees (roughly one metre)
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.00001;

/// What to do when a shape's route or agency cannot be found
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JoinPolicy {
    /// Fail the whole call with a [`JoinError`](crate::models::JoinError)
    #[default]
    Abort,
    /// Drop the route's shapes and log a warning
    SkipRoute,
}

/// Base map tiles
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileLayer {
    pub name: String,
    /// XYZ template, e.g. `https://tile.openstreetmap.org/{z}/{x}/{y}.png`
    pub url_template: String,
    pub attribution: String,
}

impl TileLayer {
    pub fn openstreetmap() -> Self {
        Self {
            name: "OpenStreetMap".into(),
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; OpenStreetMap contributors".into(),
        }
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapStyle {
    pub tiles: TileLayer,
    pub stop_color: String,
    /// Circle radius in pixels
    pub stop_radius: f64,
    pub stop_fill_opacity: f64,
    pub route_color: String,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            tiles: TileLayer::default(),
            stop_color: "red".into(),
            stop_radius: 5.0,
            stop_fill_opacity: 0.5,
            route_color: "blue".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapOptions {
    /// Tolerance handed to the geometry simplifier, in degrees
    pub simplify_tolerance: f64,
    pub join_policy: JoinPolicy,
    pub style: MapStyle,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            join_policy: JoinPolicy::default(),
            style: MapStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MapOptions::default();
        assert_eq!(options.simplify_tolerance, 0.00001);
        assert_eq!(options.join_policy, JoinPolicy::Abort);
        assert_eq!(options.style.route_color, "blue");
        assert!(options.style.stop_fill_opacity < 1.0);
        assert_eq!(options.style.tiles.name, "OpenStreetMap");
    }
}
