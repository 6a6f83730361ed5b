//! Map operations: select geometry from a feed and hand it to a renderer.
//!
//! Each operation runs its selection to completion before the renderer sees
//! anything, so a failed lookup never produces a half-drawn map.

use crate::config::MapOptions;
use crate::feed::Feed;
use crate::geometry::{GeometrySimplifier, RamerDouglasPeucker};
use crate::identifiers::*;
use crate::models::{Result, Table};
use crate::render::{Legend, LineLayer, PointLayer, PointStyle, Renderer};
use crate::selection::{self, ShapeLine, StopPoint};

const STOPS_LABEL: &str = "Stops";
const ROUTE_LABEL: &str = "Route";

/// Draws stops, routes and agencies of one feed
///
/// Cheap to construct; holds only a borrow of the feed.
#[derive(Debug)]
pub struct TransitMapper<'a, S = RamerDouglasPeucker> {
    feed: &'a Feed,
    options: MapOptions,
    simplifier: S,
}

impl<'a> TransitMapper<'a> {
    pub fn new(feed: &'a Feed) -> Self {
        Self {
            feed,
            options: MapOptions::default(),
            simplifier: RamerDouglasPeucker,
        }
    }
}

impl<'a, S: GeometrySimplifier> TransitMapper<'a, S> {
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_simplifier<T: GeometrySimplifier>(self, simplifier: T) -> TransitMapper<'a, T> {
        TransitMapper {
            feed: self.feed,
            options: self.options,
            simplifier,
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// One marker for a stop, labelled with its name
    pub fn map_stop<R: Renderer>(
        &self,
        stop_id: &StopIdentifier,
        mut renderer: R,
    ) -> Result<R::Output> {
        let point = selection::stop_point(self.feed, stop_id)?;

        renderer.base_layer(&self.options.style.tiles);
        renderer.add_points(PointLayer {
            name: "Stop".into(),
            style: PointStyle::Marker,
            points: vec![point],
        });
        Ok(renderer.finish())
    }

    /// Every stop served by a route, as circles
    pub fn map_route_stops<R: Renderer>(
        &self,
        route_id: &RouteIdentifier,
        mut renderer: R,
    ) -> Result<R::Output> {
        let points = selection::route_stop_points(self.feed, route_id)?;

        renderer.base_layer(&self.options.style.tiles);
        renderer.add_points(self.stop_layer(points));
        renderer.add_legend(Legend::default().entry(STOPS_LABEL, &self.options.style.stop_color));
        Ok(renderer.finish())
    }

    /// The route's shapes as lines, optionally with its stops on top
    pub fn map_route_shape<R: Renderer>(
        &self,
        route_id: &RouteIdentifier,
        include_stops: bool,
        mut renderer: R,
    ) -> Result<R::Output> {
        if include_stops {
            self.feed.require(&[Table::StopTimes, Table::Stops])?;
        }

        let lines =
            selection::route_shape_lines(self.feed, route_id, &self.simplifier, &self.options)?;
        let stops = if include_stops {
            Some(selection::route_stop_points(self.feed, route_id)?)
        } else {
            None
        };

        renderer.base_layer(&self.options.style.tiles);
        self.draw_lines_and_stops(&mut renderer, lines, stops);
        Ok(renderer.finish())
    }

    /// Every route of an agency on one map with a shared legend
    pub fn map_agency_routes<R: Renderer>(
        &self,
        agency_id: &AgencyIdentifier,
        include_stops: bool,
        mut renderer: R,
    ) -> Result<R::Output> {
        let selected = selection::agency_selection(
            self.feed,
            agency_id,
            include_stops,
            &self.simplifier,
            &self.options,
        )?;

        renderer.base_layer(&self.options.style.tiles);
        self.draw_lines_and_stops(
            &mut renderer,
            selected.lines,
            include_stops.then_some(selected.stops),
        );
        Ok(renderer.finish())
    }

    fn stop_layer(&self, points: Vec<StopPoint>) -> PointLayer {
        let style = &self.options.style;
        PointLayer {
            name: STOPS_LABEL.into(),
            style: PointStyle::Circle {
                color: style.stop_color.clone(),
                radius: style.stop_radius,
                fill_opacity: style.stop_fill_opacity,
            },
            points,
        }
    }

    fn draw_lines_and_stops<R: Renderer>(
        &self,
        renderer: &mut R,
        lines: Vec<ShapeLine>,
        stops: Option<Vec<StopPoint>>,
    ) {
        let style = &self.options.style;

        renderer.add_lines(LineLayer {
            name: ROUTE_LABEL.into(),
            color: style.route_color.clone(),
            lines,
        });

        let mut legend = Legend::default();
        if let Some(points) = stops {
            renderer.add_points(self.stop_layer(points));
            legend = legend.entry(STOPS_LABEL, &style.stop_color);
        }
        renderer.add_legend(legend.entry(ROUTE_LABEL, &style.route_color));
    }
}
