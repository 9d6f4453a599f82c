//! User-facing wording for lookup failures.
//!
//! Library errors for unknown names and disconnected stations are expected
//! outcomes of a query, so the CLI rewrites them into short sentences instead
//! of surfacing the raw error chain.

use transit_lib::Error;

/// Rewrite expected query failures into a friendly message; other errors
/// pass through unchanged.
pub fn friendly_error(err: Error) -> anyhow::Error {
    match err {
        Error::UnknownStation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_message("station", &name, &suggestions))
        }
        Error::UnknownLine { name, suggestions } => {
            anyhow::anyhow!(format_unknown_message("line", &name, &suggestions))
        }
        Error::UnknownStations { start, goal } => {
            anyhow::anyhow!("Unknown stations '{}' and '{}'.", start, goal)
        }
        Error::NoPathFound { start, goal } => {
            anyhow::anyhow!(
                "No path found between {} and {}. The stations are on lines that never meet.",
                start,
                goal
            )
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_message(kind: &str, name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} '{}'.", kind, name);
    if let [only] = suggestions {
        message.push_str(&format!(" Did you mean '{only}'?"));
    } else if !suggestions.is_empty() {
        let joined = suggestions
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        message.push_str(&format!(" Did you mean one of: {}?", joined));
    }
    message
}
