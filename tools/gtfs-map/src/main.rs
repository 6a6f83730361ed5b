use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod output;

use output::write_map_geojson;
use transit_map::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "gtfs-map",
    author,
    version,
    about = "Render GTFS stops, routes and agencies as GeoJSON maps",
    long_about = "Loads a GTFS feed (directory or zip archive) and writes one map as a GeoJSON \
                  FeatureCollection.\n\n\
                  Stops become points, route shapes become lines annotated with route and \
                  agency metadata. The base tiles and legend are stored as foreign members \
                  so any web map can style the result."
)]
struct Args {
    /// GTFS feed: a directory or a zip archive
    #[arg(short, long)]
    feed: PathBuf,

    /// Output GeoJSON file
    #[arg(short, long)]
    output: PathBuf,

    /// Shape simplification tolerance in degrees (0 disables simplification)
    #[arg(long, default_value_t = transit_map::config::DEFAULT_SIMPLIFY_TOLERANCE)]
    tolerance: f64,

    /// What to do when a shape's route or agency is missing from the feed
    #[arg(long, value_enum, default_value_t = OnMissingJoin::Abort)]
    on_missing_join: OnMissingJoin,

    /// Line color for route shapes
    #[arg(long, default_value = "blue")]
    route_color: String,

    /// Fill color for stop circles
    #[arg(long, default_value = "red")]
    stop_color: String,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// A single stop as a marker
    Stop { stop_id: String },

    /// Every stop served by a route
    RouteStops { route_id: String },

    /// The shapes of a route, with its stops unless --no-stops is given
    RouteShape {
        route_id: String,

        #[arg(long)]
        no_stops: bool,
    },

    /// Every route operated by an agency
    AgencyRoutes {
        agency_id: String,

        #[arg(long)]
        no_stops: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnMissingJoin {
    /// Fail the whole map
    Abort,
    /// Leave the route out and log a warning
    Skip,
}

impl From<OnMissingJoin> for JoinPolicy {
    fn from(value: OnMissingJoin) -> Self {
        match value {
            OnMissingJoin::Abort => JoinPolicy::Abort,
            OnMissingJoin::Skip => JoinPolicy::SkipRoute,
        }
    }
}

impl Args {
    fn map_options(&self) -> Result<MapOptions> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            bail!("Tolerance must be a non-negative number, got {}", self.tolerance);
        }

        let mut options = MapOptions {
            simplify_tolerance: self.tolerance,
            join_policy: self.on_missing_join.into(),
            ..MapOptions::default()
        };
        options.style.route_color = self.route_color.clone();
        options.style.stop_color = self.stop_color.clone();
        Ok(options)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    log::info!("=== GTFS Map ===");
    log::info!("Feed: {}", args.feed.display());
    log::info!("Output: {}", args.output.display());

    if !args.feed.exists() {
        bail!("Feed does not exist: {}", args.feed.display());
    }
    let options = args.map_options()?;

    log::info!("Loading GTFS feed...");
    let gtfs = gtfs_structures::Gtfs::from_path(&args.feed)
        .with_context(|| format!("Failed to read GTFS feed {}", args.feed.display()))?;
    let feed = Feed::from(&gtfs);
    log::info!(
        "  {} agencies, {} routes, {} trips, {} stops",
        gtfs.agencies.len(),
        gtfs.routes.len(),
        gtfs.trips.len(),
        gtfs.stops.len()
    );

    let mapper = TransitMapper::new(&feed).with_options(options);
    let renderer = GeoJsonRenderer::new();

    let map = match &args.command {
        Command::Stop { stop_id } => {
            log::info!("Mapping stop {}", stop_id);
            mapper.map_stop(&StopIdentifier::new(stop_id), renderer)
        }
        Command::RouteStops { route_id } => {
            log::info!("Mapping stops of route {}", route_id);
            mapper.map_route_stops(&RouteIdentifier::new(route_id), renderer)
        }
        Command::RouteShape { route_id, no_stops } => {
            log::info!("Mapping shapes of route {}", route_id);
            mapper.map_route_shape(&RouteIdentifier::new(route_id), !no_stops, renderer)
        }
        Command::AgencyRoutes { agency_id, no_stops } => {
            log::info!("Mapping routes of agency {}", agency_id);
            mapper.map_agency_routes(&AgencyIdentifier::new(agency_id), !no_stops, renderer)
        }
    }
    .context("Failed to build map")?;

    write_map_geojson(&map, &args.output)?;
    log::info!("Done.");

    Ok(())
}
