//! Transit library entry points.
//!
//! This crate turns a parsed `line -> stations` table into an in-memory
//! station graph and answers structural queries against it: termini, stations
//! on a line, lines connected to a line, and the shortest route (by hop count)
//! between two stations. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod model;
pub mod network;
pub mod output;
pub mod path;
pub mod table;

pub use dataset::{default_network_path, load_network, resolve_network_path, NETWORK_PATH_ENV};
pub use error::{Error, Result};
pub use graph::{build_graph, build_graph_with_options, Graph, GraphBuildOptions};
pub use model::{Connection, ConnectionId, Line, Station};
pub use network::{Network, Termini};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_path, shortest_path, Hop, Path};
pub use table::LineTable;
