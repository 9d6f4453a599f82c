//! Parsed `line name -> station sequence` table and its CSV loader.
//!
//! The on-disk format is one record per line with no header row:
//!
//! ```text
//! Island Line,Kennedy Town,HKU,Sai Ying Pun,Sheung Wan,Central
//! Disneyland Resort Line,Sunny Bay,Disneyland Resort
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Mapping from line name to its ordered station names.
///
/// Lines iterate in name order so that building a graph from the same table
/// always produces the same connection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    lines: BTreeMap<String, Vec<String>>,
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a line, returning the previous station sequence.
    pub fn insert(&mut self, line: impl Into<String>, stations: Vec<String>) -> Option<Vec<String>> {
        self.lines.insert(line.into(), stations)
    }

    pub fn get(&self, line: &str) -> Option<&[String]> {
        self.lines.get(line).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Load a table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NetworkNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "loading network table");
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a table from any reader producing `Line,Station,...` records.
    ///
    /// Blank records are ignored and empty station cells are skipped. A record
    /// with stations but no line name is rejected. When a line name appears
    /// more than once the later record wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut table = Self::new();
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let number = record
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 1);

            if record.iter().all(str::is_empty) {
                continue;
            }

            let mut fields = record.iter();
            let name = fields.next().unwrap_or_default();
            if name.is_empty() {
                return Err(Error::MalformedRecord {
                    record: number,
                    message: "missing line name".to_string(),
                });
            }

            let mut stations = Vec::new();
            for station in fields {
                if station.is_empty() {
                    warn!(line = name, record = number, "skipping empty station cell");
                    continue;
                }
                stations.push(station.to_string());
            }

            if table.insert(name, stations).is_some() {
                warn!(line = name, record = number, "line defined more than once; keeping the later record");
            }
        }

        debug!(lines = table.len(), "parsed network table");
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a LineTable {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl<N, S> FromIterator<(N, Vec<S>)> for LineTable
where
    N: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<S>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, stations) in iter {
            table.insert(name, stations.into_iter().map(Into::into).collect());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variable_length_records() {
        let input = "Red,A,B,C\nBlue,C,D\nSolo,E\n";
        let table = LineTable::from_reader(input.as_bytes()).expect("table parses");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Red"), Some(&["A".to_string(), "B".to_string(), "C".to_string()][..]));
        assert_eq!(table.get("Solo"), Some(&["E".to_string()][..]));
    }

    #[test]
    fn trims_fields_and_skips_blank_cells() {
        let input = " Red , A ,, B \n";
        let table = LineTable::from_reader(input.as_bytes()).expect("table parses");
        assert_eq!(table.get("Red"), Some(&["A".to_string(), "B".to_string()][..]));
    }

    #[test]
    fn ignores_blank_records() {
        let input = "Red,A,B\n\nBlue,B,C\n";
        let table = LineTable::from_reader(input.as_bytes()).expect("table parses");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_line_name_is_malformed() {
        let input = "Red,A,B\n,C,D\n";
        let err = LineTable::from_reader(input.as_bytes()).expect_err("record rejected");
        assert!(matches!(err, Error::MalformedRecord { record: 2, .. }), "got {err:?}");
    }

    #[test]
    fn later_record_replaces_earlier_line() {
        let input = "Red,A,B\nRed,X,Y,Z\n";
        let table = LineTable::from_reader(input.as_bytes()).expect("table parses");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Red").map(<[String]>::len), Some(3));
    }

    #[test]
    fn line_without_stations_is_kept() {
        let table = LineTable::from_reader("Ghost Line\n".as_bytes()).expect("table parses");
        assert_eq!(table.get("Ghost Line"), Some(&[][..]));
    }

    #[test]
    fn collects_from_pairs() {
        let table: LineTable = [("Red", vec!["A", "B"]), ("Blue", vec!["B"])]
            .into_iter()
            .collect();
        let names: Vec<&String> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Blue", "Red"]);
    }
}
