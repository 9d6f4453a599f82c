use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::graph::GraphBuildOptions;
use crate::network::Network;
use crate::table::LineTable;

/// Environment variable that overrides the default network table location.
pub const NETWORK_PATH_ENV: &str = "TRANSIT_NETWORK";

/// Default filename for the network table inside the data directory.
const NETWORK_FILENAME: &str = "network.csv";

/// Resolve the default network table location using platform-specific
/// project directories.
pub fn default_network_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "transit", "transit").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NETWORK_FILENAME))
}

/// Resolve which network table to load.
///
/// An explicit path wins, then the `TRANSIT_NETWORK` environment variable,
/// then the platform data directory. A directory is taken to contain
/// `network.csv`.
pub fn resolve_network_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = if let Some(path) = explicit {
        path.to_path_buf()
    } else if let Some(value) = env::var_os(NETWORK_PATH_ENV).filter(|value| !value.is_empty()) {
        debug!(variable = NETWORK_PATH_ENV, "using network path from environment");
        PathBuf::from(value)
    } else {
        default_network_path()?
    };

    let path = if path.is_dir() {
        path.join(NETWORK_FILENAME)
    } else {
        path
    };

    if !path.exists() {
        return Err(Error::NetworkNotFound { path });
    }
    Ok(path)
}

/// Load a network table from disk and build the network.
pub fn load_network(path: &Path, options: &GraphBuildOptions) -> Result<Network> {
    let table = LineTable::from_path(path)?;
    let network = Network::from_table_with_options(&table, options)?;
    info!(
        path = %path.display(),
        lines = table.len(),
        stations = network.station_count(),
        "loaded network"
    );
    Ok(network)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn explicit_directory_resolves_to_network_file() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join(NETWORK_FILENAME);
        fs::write(&file, "Red,A,B\n").expect("write table");

        let resolved = resolve_network_path(Some(dir.path())).expect("resolves");
        assert_eq!(resolved, file);
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("absent.csv");
        let err = resolve_network_path(Some(&missing)).expect_err("missing");
        assert!(matches!(err, Error::NetworkNotFound { path } if path == missing));
    }

    #[test]
    fn load_network_builds_graph_from_file() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("lines.csv");
        fs::write(&file, "Red,A,B,C\nBlue,C,D\n").expect("write table");

        let network = load_network(&file, &GraphBuildOptions::default()).expect("loads");
        assert_eq!(network.station_count(), 4);
        assert_eq!(network.line_names().collect::<Vec<_>>(), ["Blue", "Red"]);
    }
}
