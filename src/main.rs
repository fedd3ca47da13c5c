use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use signalroute::osm;
use signalroute::{Algorithm, Coordinate, Options, RouteError, RoutePlan, DEFAULT_OPTIONS};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct SignalLoadError(PathBuf, #[source] osm::Error);

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a route through traffic signals loaded from a file
    /// and print it as GeoJSON
    Route {
        /// The path to the Overpass JSON or OSM XML file with traffic signals
        signals_file: PathBuf,

        #[command(flatten)]
        endpoints: EndpointArgs,

        /// Format of the signals file
        #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
        format: FormatArg,

        /// Ignore signals outside of the padded region around the start and end points
        #[arg(long)]
        clip: bool,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Print the Overpass API query fetching traffic signals around the start and end points
    Query {
        #[command(flatten)]
        endpoints: EndpointArgs,

        /// Margin around the start and end points, in degrees
        #[arg(long, default_value_t = DEFAULT_OPTIONS.bbox_padding_deg)]
        padding: f64,
    },
}

#[derive(Args)]
struct EndpointArgs {
    /// Latitude of the start point
    #[arg(allow_negative_numbers = true, value_parser = parse_lat)]
    start_lat: f64,

    /// Longitude of the start point
    #[arg(allow_negative_numbers = true, value_parser = parse_lon)]
    start_lon: f64,

    /// Latitude of the end point
    #[arg(allow_negative_numbers = true, value_parser = parse_lat)]
    end_lat: f64,

    /// Longitude of the end point
    #[arg(allow_negative_numbers = true, value_parser = parse_lon)]
    end_lon: f64,
}

impl EndpointArgs {
    fn source(&self) -> Coordinate {
        Coordinate::new(self.start_lat, self.start_lon)
    }

    fn destination(&self) -> Coordinate {
        Coordinate::new(self.end_lat, self.end_lon)
    }
}

#[derive(Args)]
struct TuningArgs {
    /// Max distance between two connected signals, in kilometers
    #[arg(long, default_value_t = DEFAULT_OPTIONS.proximity_threshold_km)]
    threshold: f64,

    /// Number of nearest signals the start and end points are connected to
    #[arg(long, default_value_t = DEFAULT_OPTIONS.endpoint_attach_count)]
    attach: usize,

    /// Margin around the start and end points, in degrees (used with --clip)
    #[arg(long, default_value_t = DEFAULT_OPTIONS.bbox_padding_deg)]
    padding: f64,

    /// Average travel speed, in km/h
    #[arg(long, default_value_t = DEFAULT_OPTIONS.average_speed_kmh)]
    speed: f64,

    /// Time lost at every traffic signal on the route, in minutes
    #[arg(long, default_value_t = DEFAULT_OPTIONS.stop_penalty_minutes)]
    stop_penalty: f64,

    /// Shortest path implementation
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Scan)]
    algorithm: AlgorithmArg,
}

impl TuningArgs {
    fn options(&self) -> Options {
        Options {
            proximity_threshold_km: self.threshold,
            endpoint_attach_count: self.attach,
            bbox_padding_deg: self.padding,
            average_speed_kmh: self.speed,
            stop_penalty_minutes: self.stop_penalty,
            algorithm: match self.algorithm {
                AlgorithmArg::Scan => Algorithm::Scan,
                AlgorithmArg::Queue => Algorithm::Queue,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Scan,
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Auto,
    Xml,
    XmlGz,
    XmlBz2,
    Json,
    JsonGz,
    JsonBz2,
}

impl From<FormatArg> for osm::FileFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Auto => Self::Unknown,
            FormatArg::Xml => Self::Xml,
            FormatArg::XmlGz => Self::XmlGz,
            FormatArg::XmlBz2 => Self::XmlBz2,
            FormatArg::Json => Self::Json,
            FormatArg::JsonGz => Self::JsonGz,
            FormatArg::JsonBz2 => Self::JsonBz2,
        }
    }
}

fn parse_lat(s: &str) -> Result<f64, String> {
    parse_degrees(s, 90.0)
}

fn parse_lon(s: &str) -> Result<f64, String> {
    parse_degrees(s, 180.0)
}

fn parse_degrees(s: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|_| format!("not a number: {}", s))?;
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(format!("out of range: {} (expected -{} to {})", value, limit, limit))
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            signals_file,
            endpoints,
            format,
            clip,
            tuning,
        } => route(&signals_file, &endpoints, format, clip, &tuning.options()),

        Command::Query { endpoints, padding } => {
            let options = Options {
                bbox_padding_deg: padding,
                ..DEFAULT_OPTIONS
            };
            options.validate()?;

            let region =
                signalroute::query_region(endpoints.source(), endpoints.destination(), &options);
            println!("{}", osm::overpass_query(&region));
            Ok(())
        }
    }
}

fn route(
    signals_file: &Path,
    endpoints: &EndpointArgs,
    format: FormatArg,
    clip: bool,
    options: &Options,
) -> Result<(), Box<dyn Error>> {
    let source = endpoints.source();
    let destination = endpoints.destination();
    let region = signalroute::query_region(source, destination, options);

    let osm_options = osm::Options {
        file_format: format.into(),
        tag: Some(osm::TRAFFIC_SIGNALS_TAG),
        bbox: clip.then_some(region),
    };
    let signals = load_signals(signals_file, &osm_options)?;
    log::info!(
        "loaded {} traffic signals from {}",
        signals.len(),
        signals_file.display()
    );

    let positions = signals.iter().map(|s| s.position).collect::<Vec<_>>();
    let plan = match signalroute::plan_route(&positions, source, destination, options) {
        Ok(plan) => plan,
        Err(
            e @ (RouteError::EmptyRegion | RouteError::DisconnectedGraph | RouteError::NoPathFound),
        ) => {
            log::warn!("{} - try different coordinates", e);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "found a route through {} traffic signals: {} km, {} min",
        plan.path.stops(),
        plan.stats.distance_km,
        plan.stats.time_minutes
    );

    println!("{}", serde_json::to_string_pretty(&route_feature_collection(&plan, &signals))?);
    Ok(())
}

fn route_feature_collection(plan: &RoutePlan, signals: &[osm::Signal]) -> serde_json::Value {
    let coordinates = plan
        .coordinates
        .iter()
        .map(|c| json!([c.lon, c.lat]))
        .collect::<Vec<_>>();

    // Synthetic endpoints have ids past the loaded signals
    let signal_ids = plan
        .path
        .nodes
        .iter()
        .filter_map(|&id| signals.get(id).map(|s| s.osm_id))
        .collect::<Vec<_>>();

    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "distance_km": plan.stats.distance_km,
                    "time_minutes": plan.stats.time_minutes,
                    "cost_m": plan.path.cost,
                    "signals": signal_ids,
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
            },
        ],
    })
}

fn load_signals(path: &Path, options: &osm::Options) -> Result<Vec<osm::Signal>, SignalLoadError> {
    osm::read_signals_from_file(options, path).map_err(|e| SignalLoadError(PathBuf::from(path), e))
}
