use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the transit library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station name could not be found in the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when neither endpoint of a path query exists in the network.
    #[error("unknown station names: {start} and {goal}")]
    UnknownStations { start: String, goal: String },

    /// Raised when a line name could not be found in the network.
    #[error("unknown line name: {name}{}", format_suggestions(.suggestions))]
    UnknownLine {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both stations exist but no walk connects them.
    #[error("no path found between {start} and {goal}")]
    NoPathFound { start: String, goal: String },

    /// Raised when the network exceeds the configured station limit.
    #[error("network has more than {limit} stations")]
    NetworkTooLarge { limit: usize },

    /// Raised when a record in the network table cannot be interpreted.
    #[error("malformed network record {record}: {message}")]
    MalformedRecord { record: u64, message: String },

    /// Network table could not be located at the resolved path.
    #[error("network table not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the network table")]
    ProjectDirsUnavailable,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error reports a name missing from the network.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::UnknownStation { .. } | Error::UnknownStations { .. } | Error::UnknownLine { .. }
        )
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_without_suggestions() {
        let err = Error::UnknownStation {
            name: "Ghost".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown station name: Ghost");
        assert!(err.is_not_found());
    }

    #[test]
    fn unknown_line_lists_several_suggestions() {
        let err = Error::UnknownLine {
            name: "Island".to_string(),
            suggestions: vec!["Island Line".to_string(), "Ireland Line".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown line name: Island. Did you mean one of: 'Island Line', 'Ireland Line'?"
        );
    }

    #[test]
    fn no_path_is_not_a_lookup_failure() {
        let err = Error::NoPathFound {
            start: "A".to_string(),
            goal: "Z".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "no path found between A and Z");
    }
}
