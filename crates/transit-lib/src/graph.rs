use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Connection, ConnectionId, Station};
use crate::table::LineTable;

/// Upper bound on distinct stations accepted by [`build_graph`]. Real metro
/// systems stay well below a thousand stations, so anything past this is
/// treated as a malformed table rather than a network.
pub const DEFAULT_MAX_STATIONS: usize = 10_000;

/// Options controlling graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuildOptions {
    /// Maximum number of distinct stations before the build fails.
    pub max_stations: usize,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self {
            max_stations: DEFAULT_MAX_STATIONS,
        }
    }
}

/// Station graph keyed by station name.
///
/// Each station appears exactly once. Connections live in a single list and
/// stations refer to them by [`ConnectionId`]. The graph is immutable once
/// built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: HashMap<String, Station>,
    connections: Vec<Connection>,
}

impl Graph {
    /// Look up a station by its case-sensitive name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// All stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Station names sorted alphabetically.
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Every connection in creation order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// Connections incident to `station`. Unknown stations have none.
    pub fn incident<'g>(&'g self, station: &str) -> impl Iterator<Item = &'g Connection> + 'g {
        self.stations
            .get(station)
            .map(Station::connection_ids)
            .unwrap_or(&[])
            .iter()
            .map(move |&id| &self.connections[id])
    }

    fn station_mut(&mut self, name: &str) -> &mut Station {
        self.stations
            .get_mut(name)
            .expect("station registered before its connections")
    }

    fn check_invariants(&self) {
        for (name, station) in &self.stations {
            debug_assert_eq!(name, station.name(), "station stored under a foreign key");
            for &id in station.connection_ids() {
                debug_assert!(
                    self.connections
                        .get(id)
                        .is_some_and(|connection| connection.touches(name)),
                    "station {name} lists connection {id} that does not touch it"
                );
            }
        }
        for connection in &self.connections {
            let (a, b) = connection.endpoints();
            debug_assert!(
                self.stations.contains_key(a) && self.stations.contains_key(b),
                "connection {connection} references a station missing from the graph"
            );
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.station_names();
        let mut iter = names.iter().peekable();
        while let Some(name) = iter.next() {
            f.write_str(name)?;
            if iter.peek().is_some() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Build the station graph for a line table with default options.
pub fn build_graph(table: &LineTable) -> Result<Graph> {
    build_graph_with_options(table, &GraphBuildOptions::default())
}

/// Build the station graph for a line table.
///
/// Stations are created the first time any line mentions them and shared by
/// every later line. Each pair of consecutive stations on a line gains one
/// connection labelled with the line name; parallel connections from other
/// lines are kept alongside it.
pub fn build_graph_with_options(table: &LineTable, options: &GraphBuildOptions) -> Result<Graph> {
    let mut graph = Graph::default();

    for (line, stations) in table {
        let mut previous: Option<&str> = None;
        for name in stations.iter().map(String::as_str) {
            if !graph.stations.contains_key(name) {
                if graph.stations.len() >= options.max_stations {
                    return Err(Error::NetworkTooLarge {
                        limit: options.max_stations,
                    });
                }
                graph.stations.insert(name.to_string(), Station::new(name));
            }

            if let Some(prev) = previous {
                let id = graph.connections.len();
                graph
                    .connections
                    .push(Connection::new(prev, name, line.as_str()));
                graph.station_mut(prev).attach(id);
                if prev != name {
                    graph.station_mut(name).attach(id);
                }
            }
            previous = Some(name);
        }
    }

    graph.check_invariants();
    debug!(
        lines = table.len(),
        stations = graph.len(),
        connections = graph.connections.len(),
        "built station graph"
    );
    Ok(graph)
}
