use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use transit_cli::logging::{init_logging, LogFormat};
use transit_cli::messages::friendly_error;
use transit_cli::output::{
    render_connected_lines, render_path, render_station_lines, render_stations, render_termini,
    OutputFormat,
};
use transit_cli::terminal::ColorPalette;
use transit_lib::graph::DEFAULT_MAX_STATIONS;
use transit_lib::{load_network, resolve_network_path, GraphBuildOptions, Network};

#[derive(Parser, Debug)]
#[command(author, version, about = "Transit network queries")]
struct Cli {
    /// Network table (CSV) or a directory containing network.csv. Falls back
    /// to TRANSIT_NETWORK, then the platform data directory.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log format written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Refuse to build networks with more distinct stations than this.
    #[arg(long, default_value_t = DEFAULT_MAX_STATIONS, global = true)]
    max_stations: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the first and last station of every line.
    Termini,
    /// List the stations of a line in order.
    Stations {
        /// Line name.
        line: String,
    },
    /// List the lines directly reachable from a line.
    Connected {
        /// Line name.
        line: String,
    },
    /// List the lines serving a station.
    LinesAt {
        /// Station name.
        station: String,
    },
    /// Show the route with the fewest hops between two stations.
    Path {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Annotate each hop with the line it rides.
        #[arg(long)]
        show_lines: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let network = open_network(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &network, &mut out)?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn open_network(cli: &Cli) -> Result<Network> {
    let path = resolve_network_path(cli.network.as_deref())
        .context("failed to locate the network table")?;
    let options = GraphBuildOptions {
        max_stations: cli.max_stations,
    };
    load_network(&path, &options)
        .with_context(|| format!("failed to load network from {}", path.display()))
}

fn run<W: Write>(cli: &Cli, network: &Network, out: &mut W) -> Result<()> {
    let format = cli.format;
    match &cli.command {
        Command::Termini => {
            render_termini(out, &network.termini(), format)?;
        }
        Command::Stations { line } => {
            let stations = network.stations_on_line(line).map_err(friendly_error)?;
            render_stations(out, line, stations, format)?;
        }
        Command::Connected { line } => {
            let connected = network.connected_lines(line).map_err(friendly_error)?;
            render_connected_lines(out, line, &connected, format)?;
        }
        Command::LinesAt { station } => {
            let lines = network.lines_at_station(station).map_err(friendly_error)?;
            render_station_lines(out, station, &lines, format)?;
        }
        Command::Path {
            from,
            to,
            show_lines,
        } => {
            let summary = network.path_between(from, to).map_err(friendly_error)?;
            debug!(from = %from, to = %to, hops = summary.hops, "rendering path");
            render_path(out, &summary, format, *show_lines, ColorPalette::detect())?;
        }
    }
    Ok(())
}
