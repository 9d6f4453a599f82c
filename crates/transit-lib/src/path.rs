use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::model::{Connection, Station};

/// Walk through the graph produced by the shortest-path search.
///
/// Consecutive connections share an endpoint and the first connection touches
/// the start station. An empty path means the start is also the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'g> {
    start: &'g str,
    connections: Vec<&'g Connection>,
}

/// One traversed connection, oriented in the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'g> {
    pub from: &'g str,
    pub to: &'g str,
    pub line: &'g str,
}

impl<'g> Path<'g> {
    fn empty(start: &'g str) -> Self {
        Self {
            start,
            connections: Vec::new(),
        }
    }

    pub fn start(&self) -> &'g str {
        self.start
    }

    /// Final station of the walk.
    pub fn goal(&self) -> &'g str {
        self.hops().last().map(|hop| hop.to).unwrap_or(self.start)
    }

    /// Number of connections traversed.
    pub fn hop_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn connections(&self) -> &[&'g Connection] {
        &self.connections
    }

    /// Hops in travel order with the line used for each.
    pub fn hops(&self) -> Vec<Hop<'g>> {
        let mut hops = Vec::with_capacity(self.connections.len());
        let mut current = self.start;
        for connection in &self.connections {
            let Some(next) = connection.other_end(current) else {
                debug_assert!(false, "path connection {connection} does not touch {current}");
                break;
            };
            hops.push(Hop {
                from: current,
                to: next,
                line: connection.line(),
            });
            current = next;
        }
        hops
    }

    /// Station names visited, start and goal included.
    pub fn stations(&self) -> Vec<&'g str> {
        std::iter::once(self.start)
            .chain(self.hops().into_iter().map(|hop| hop.to))
            .collect()
    }
}

/// Find a path with the fewest connections between two stations.
///
/// Returns `None` when the stations lie in different components. Line labels
/// never influence the cost. When several shortest paths exist the one found
/// first under each station's connection order is returned; callers should
/// rely on its length only.
pub fn find_path<'g>(graph: &'g Graph, start: &'g Station, goal: &'g Station) -> Option<Path<'g>> {
    let start_name = start.name();
    let goal_name = goal.name();
    if start_name == goal_name {
        return Some(Path::empty(start_name));
    }

    let mut frontier: VecDeque<&'g str> = VecDeque::new();
    let mut pending: HashSet<&'g str> = HashSet::new();
    let mut visited: HashSet<&'g str> = HashSet::new();
    let mut parents: HashMap<&'g str, (&'g str, &'g Connection)> = HashMap::new();

    frontier.push_back(start_name);
    pending.insert(start_name);

    while let Some(current) = frontier.pop_front() {
        pending.remove(current);
        visited.insert(current);

        if current == goal_name {
            return Some(reconstruct_path(&parents, start_name, goal_name));
        }

        for connection in graph.incident(current) {
            let Some(next) = connection.other_end(current) else {
                continue;
            };
            if visited.contains(next) || pending.contains(next) {
                continue;
            }
            parents.insert(next, (current, connection));
            pending.insert(next);
            frontier.push_back(next);
        }
    }

    debug!(
        start = start_name,
        goal = goal_name,
        explored = visited.len(),
        "frontier exhausted without reaching goal"
    );
    None
}

/// Like [`find_path`], but reports disconnected stations as
/// [`Error::NoPathFound`].
pub fn shortest_path<'g>(graph: &'g Graph, start: &'g Station, goal: &'g Station) -> Result<Path<'g>> {
    find_path(graph, start, goal).ok_or_else(|| Error::NoPathFound {
        start: start.name().to_string(),
        goal: goal.name().to_string(),
    })
}

fn reconstruct_path<'g>(
    parents: &HashMap<&'g str, (&'g str, &'g Connection)>,
    start: &'g str,
    goal: &'g str,
) -> Path<'g> {
    let mut connections = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&(parent, connection)) = parents.get(current) else {
            debug_assert!(false, "reached {current} without a recorded parent");
            break;
        };
        connections.push(connection);
        current = parent;
    }
    connections.reverse();
    Path { start, connections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::table::LineTable;

    fn graph(lines: &[(&str, &[&str])]) -> Graph {
        let table: LineTable = lines
            .iter()
            .map(|(name, stations)| (*name, stations.to_vec()))
            .collect();
        build_graph(&table).expect("graph builds")
    }

    fn route<'g>(graph: &'g Graph, from: &str, to: &str) -> Option<Path<'g>> {
        let start = graph.station(from).expect("start exists");
        let goal = graph.station(to).expect("goal exists");
        find_path(graph, start, goal)
    }

    #[test]
    fn same_station_yields_empty_path() {
        let g = graph(&[("Red", &["A", "B"])]);
        let path = route(&g, "A", "A").expect("trivial path");
        assert!(path.is_empty());
        assert_eq!(path.stations(), ["A"]);
        assert_eq!(path.goal(), "A");
    }

    #[test]
    fn walks_a_chain_across_lines() {
        let g = graph(&[("Red", &["A", "B", "C"]), ("Blue", &["C", "D"])]);
        let path = route(&g, "A", "D").expect("connected");
        assert_eq!(path.hop_count(), 3);
        assert_eq!(path.stations(), ["A", "B", "C", "D"]);
        let lines: Vec<&str> = path.hops().iter().map(|hop| hop.line).collect();
        assert_eq!(lines, ["Red", "Red", "Blue"]);
    }

    #[test]
    fn traverses_connections_against_line_order() {
        let g = graph(&[("Red", &["A", "B", "C"])]);
        let path = route(&g, "C", "A").expect("connected");
        assert_eq!(path.stations(), ["C", "B", "A"]);
    }

    #[test]
    fn prefers_fewer_hops_over_line_continuity() {
        let g = graph(&[
            ("Long", &["A", "B", "C", "D", "E"]),
            ("Short", &["A", "X", "E"]),
        ]);
        let path = route(&g, "A", "E").expect("connected");
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.stations(), ["A", "X", "E"]);
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let g = graph(&[("Red", &["A", "B"]), ("Blue", &["C", "D"])]);
        assert!(route(&g, "A", "D").is_none());

        let start = g.station("A").expect("exists");
        let goal = g.station("D").expect("exists");
        let err = shortest_path(&g, start, goal).expect_err("disconnected");
        assert!(matches!(err, Error::NoPathFound { ref start, ref goal } if start == "A" && goal == "D"));
    }

    #[test]
    fn handles_cycles_and_self_loops() {
        let g = graph(&[("Circle", &["A", "B", "C", "D", "A"]), ("Stub", &["C", "C"])]);
        let path = route(&g, "A", "C").expect("connected");
        assert_eq!(path.hop_count(), 2);
    }
}
