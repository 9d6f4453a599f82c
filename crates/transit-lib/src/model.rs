//! Stations, connections and lines that make up a transit network.
//!
//! Stations are identified by name. Connections and lines refer to stations by
//! that name only; the [`Graph`](crate::graph::Graph) owns the single
//! [`Station`] value for each name.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Position of a [`Connection`] inside the graph's connection list.
pub type ConnectionId = usize;

/// A uniquely named point in the network.
///
/// Equality and hashing consider the name only, so two values describing the
/// same station compare equal even if their incident connections differ.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    connections: Vec<ConnectionId>,
}

impl Station {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connections: Vec::new(),
        }
    }

    /// Station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifiers of the connections incident to this station, in creation order.
    pub fn connection_ids(&self) -> &[ConnectionId] {
        &self.connections
    }

    /// Number of incident connections.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    pub(crate) fn attach(&mut self, id: ConnectionId) {
        self.connections.push(id);
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Undirected edge between two stations, labelled with the line that created it.
///
/// Parallel connections between the same pair of stations are distinct values
/// as long as their line labels differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Connection {
    a: String,
    b: String,
    line: String,
}

impl Connection {
    pub fn new(a: impl Into<String>, b: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            line: line.into(),
        }
    }

    /// Both endpoints in the order the line listed them.
    pub fn endpoints(&self) -> (&str, &str) {
        (self.a.as_str(), self.b.as_str())
    }

    /// Name of the line that created this connection.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Whether `station` is one of the endpoints.
    pub fn touches(&self, station: &str) -> bool {
        self.a == station || self.b == station
    }

    /// Return the endpoint opposite `station`, or `None` when `station` is not
    /// an endpoint of this connection.
    pub fn other_end(&self, station: &str) -> Option<&str> {
        if self.a == station {
            Some(self.b.as_str())
        } else if self.b == station {
            Some(self.a.as_str())
        } else {
            None
        }
    }

    /// Direction-independent key `(lower endpoint, higher endpoint, line)`.
    pub fn key(&self) -> (&str, &str, &str) {
        if self.a <= self.b {
            (self.a.as_str(), self.b.as_str(), self.line.as_str())
        } else {
            (self.b.as_str(), self.a.as_str(), self.line.as_str())
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {} ({})", self.a, self.b, self.line)
    }
}

/// Named, ordered sequence of stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    name: String,
    stations: Vec<String>,
}

impl Line {
    pub fn new(name: impl Into<String>, stations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations in line order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// First and last station, or `None` for a line without stations.
    pub fn termini(&self) -> Option<(&str, &str)> {
        let first = self.stations.first()?;
        let last = self.stations.last()?;
        Some((first.as_str(), last.as_str()))
    }

    pub fn contains(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_end_works_from_either_side() {
        let connection = Connection::new("Central", "Admiralty", "Island Line");
        assert_eq!(connection.other_end("Central"), Some("Admiralty"));
        assert_eq!(connection.other_end("Admiralty"), Some("Central"));
        assert_eq!(connection.other_end("Jordan"), None);
        assert!(connection.touches("Admiralty"));
    }

    #[test]
    fn key_ignores_direction_but_not_label() {
        let forward = Connection::new("A", "B", "Red");
        let backward = Connection::new("B", "A", "Red");
        let parallel = Connection::new("A", "B", "Blue");
        assert_eq!(forward.key(), backward.key());
        assert_ne!(forward.key(), parallel.key());
        assert_ne!(forward, parallel);
    }

    #[test]
    fn connection_display_names_line() {
        let connection = Connection::new("A", "B", "Red");
        assert_eq!(connection.to_string(), "A <-> B (Red)");
    }

    #[test]
    fn station_identity_is_by_name() {
        let mut left = Station::new("Mong Kok");
        left.attach(3);
        let right = Station::new("Mong Kok");
        assert_eq!(left, right);
    }

    #[test]
    fn termini_of_single_station_line_repeat() {
        let line = Line::new("Shuttle", vec!["Only".to_string()]);
        assert_eq!(line.termini(), Some(("Only", "Only")));
        assert_eq!(Line::new("Empty", Vec::new()).termini(), None);
    }
}
