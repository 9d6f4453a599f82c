//! Output formatting for query results.
//!
//! Every command renders either human-readable text or a JSON document. The
//! renderers write into any [`Write`] so tests can capture their output.

use std::collections::BTreeSet;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;
use transit_lib::{RouteSummary, Termini};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize)]
struct LineStations<'a> {
    line: &'a str,
    stations: &'a [String],
}

#[derive(Serialize)]
struct ConnectedLines<'a> {
    line: &'a str,
    connected_lines: &'a BTreeSet<&'a str>,
}

#[derive(Serialize)]
struct StationLines<'a> {
    station: &'a str,
    lines: &'a BTreeSet<&'a str>,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Render the termini of every line, one line per entry.
pub fn render_termini<W: Write>(
    out: &mut W,
    termini: &[Termini<'_>],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &termini),
        OutputFormat::Text => {
            for entry in termini {
                writeln!(out, "{}: {} <-> {}", entry.line, entry.first, entry.last)?;
            }
            Ok(())
        }
    }
}

/// Render the ordered stations of a line, comma separated.
pub fn render_stations<W: Write>(
    out: &mut W,
    line: &str,
    stations: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &LineStations { line, stations }),
        OutputFormat::Text => writeln!(out, "{}", stations.join(", ")),
    }
}

/// Render the lines connected to `line`, one per row.
pub fn render_connected_lines<W: Write>(
    out: &mut W,
    line: &str,
    connected: &BTreeSet<&str>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &ConnectedLines {
                line,
                connected_lines: connected,
            },
        ),
        OutputFormat::Text => write_names(out, connected),
    }
}

/// Render the lines serving `station`, one per row.
pub fn render_station_lines<W: Write>(
    out: &mut W,
    station: &str,
    lines: &BTreeSet<&str>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &StationLines { station, lines }),
        OutputFormat::Text => write_names(out, lines),
    }
}

fn write_names<W: Write>(out: &mut W, names: &BTreeSet<&str>) -> io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Render a path summary.
///
/// Plain text mirrors `A -> B -> C`; with `show_lines` each hop is listed
/// with the line it rides.
pub fn render_path<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
    show_lines: bool,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Text if show_lines => {
            let hop_word = if summary.hops == 1 { "hop" } else { "hops" };
            writeln!(
                out,
                "{s}{}{r} -> {s}{}{r} ({} {})",
                summary.start,
                summary.goal,
                summary.hops,
                hop_word,
                s = palette.station,
                r = palette.reset
            )?;
            for step in &summary.steps {
                writeln!(
                    out,
                    "{g}{:>3}:{r} {} -> {} via {l}{}{r}",
                    step.index,
                    step.from,
                    step.to,
                    step.line,
                    g = palette.gray,
                    l = palette.line,
                    r = palette.reset
                )?;
            }
            Ok(())
        }
        OutputFormat::Text => writeln!(out, "{}", summary.render_plain()),
    }
}
