//! Read-only queries over a built transit network.
//!
//! [`Network`] keeps the line table next to the station graph so that
//! line-oriented questions (termini, stations on a line) and station-oriented
//! questions (paths) can be answered from the same value. Nothing here mutates
//! the network after [`Network::from_table`] returns, so a `&Network` can be
//! shared freely between readers.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_graph_with_options, Graph, GraphBuildOptions};
use crate::model::{Connection, Line};
use crate::output::RouteSummary;
use crate::path::shortest_path;
use crate::table::LineTable;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Number of suggestions attached to unknown-name errors.
const MAX_SUGGESTIONS: usize = 3;

/// First and last station of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Termini<'a> {
    pub line: &'a str,
    pub first: &'a str,
    pub last: &'a str,
}

/// Transit network: the line table plus the station graph built from it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    lines: BTreeMap<String, Line>,
    graph: Graph,
}

impl Network {
    /// Build a network from a parsed line table with default options.
    pub fn from_table(table: &LineTable) -> Result<Self> {
        Self::from_table_with_options(table, &GraphBuildOptions::default())
    }

    pub fn from_table_with_options(table: &LineTable, options: &GraphBuildOptions) -> Result<Self> {
        let graph = build_graph_with_options(table, options)?;
        let lines = table
            .iter()
            .map(|(name, stations)| (name.clone(), Line::new(name.as_str(), stations.clone())))
            .collect();
        Ok(Self { lines, graph })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn line(&self, name: &str) -> Option<&Line> {
        self.lines.get(name)
    }

    /// Lines in name order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn line_names(&self) -> impl Iterator<Item = &str> {
        self.lines.keys().map(String::as_str)
    }

    pub fn station_count(&self) -> usize {
        self.graph.len()
    }

    /// Termini of every line, in line name order. Lines without stations are
    /// omitted.
    pub fn termini(&self) -> Vec<Termini<'_>> {
        self.lines
            .values()
            .filter_map(|line| {
                line.termini().map(|(first, last)| Termini {
                    line: line.name(),
                    first,
                    last,
                })
            })
            .collect()
    }

    /// Ordered stations of a line.
    pub fn stations_on_line(&self, name: &str) -> Result<&[String]> {
        self.require_line(name).map(Line::stations)
    }

    /// Lines sharing a connection with any station of line `name`, excluding
    /// `name` itself.
    pub fn connected_lines(&self, name: &str) -> Result<BTreeSet<&str>> {
        let line = self.require_line(name)?;
        let connected = line
            .stations()
            .iter()
            .flat_map(|station| self.graph.incident(station))
            .map(Connection::line)
            .filter(|label| *label != name)
            .collect();
        Ok(connected)
    }

    /// Lines with a connection touching `station`.
    pub fn lines_at_station(&self, station: &str) -> Result<BTreeSet<&str>> {
        if !self.graph.contains(station) {
            return Err(self.unknown_station(station));
        }
        Ok(self.graph.incident(station).map(Connection::line).collect())
    }

    /// Shortest path (by hop count) between two named stations.
    pub fn path_between(&self, from: &str, to: &str) -> Result<RouteSummary> {
        let (start, goal) = match (self.graph.station(from), self.graph.station(to)) {
            (Some(start), Some(goal)) => (start, goal),
            (None, None) => {
                return Err(Error::UnknownStations {
                    start: from.to_string(),
                    goal: to.to_string(),
                })
            }
            (None, Some(_)) => return Err(self.unknown_station(from)),
            (Some(_), None) => return Err(self.unknown_station(to)),
        };

        let path = shortest_path(&self.graph, start, goal)?;
        debug!(from, to, hops = path.hop_count(), "found path");
        Ok(RouteSummary::from_path(&path))
    }

    /// Station names that closely resemble `name`, best match first.
    pub fn station_suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(name, self.graph.station_names(), limit)
    }

    /// Line names that closely resemble `name`, best match first.
    pub fn line_suggestions(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(name, self.line_names(), limit)
    }

    fn require_line(&self, name: &str) -> Result<&Line> {
        self.lines.get(name).ok_or_else(|| Error::UnknownLine {
            name: name.to_string(),
            suggestions: self.line_suggestions(name, MAX_SUGGESTIONS),
        })
    }

    fn unknown_station(&self, name: &str) -> Error {
        Error::UnknownStation {
            name: name.to_string(),
            suggestions: self.station_suggestions(name, MAX_SUGGESTIONS),
        }
    }
}

fn fuzzy_matches<'a>(
    name: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.truncate(limit);
    scored.into_iter().map(|(_, name)| name.to_string()).collect()
}
