//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use transit_lib::{LineTable, Network};

/// Path to the checked-in partial MTR network table.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/mtr_partial.csv")
}

/// Parsed fixture table.
#[allow(dead_code)]
pub fn fixture_table() -> LineTable {
    LineTable::from_path(&fixture_path()).expect("fixture table loads")
}

/// Network built from the fixture table.
#[allow(dead_code)]
pub fn fixture_network() -> Network {
    Network::from_table(&fixture_table()).expect("fixture network builds")
}

/// Build a table from literal line definitions.
#[allow(dead_code)]
pub fn table(lines: &[(&str, &[&str])]) -> LineTable {
    lines
        .iter()
        .map(|(name, stations)| (*name, stations.to_vec()))
        .collect()
}
