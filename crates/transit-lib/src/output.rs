use std::fmt::Write;

use serde::Serialize;

use crate::path::Path;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteRenderMode {
    /// Station names joined by arrows.
    #[default]
    PlainText,
    /// One hop per line, annotated with the line taken.
    WithLines,
}

/// Hop taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub line: String,
}

/// Structured representation of a path between two stations that
/// higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub stations: Vec<String>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`Path`] into an owned summary.
    pub fn from_path(path: &Path<'_>) -> Self {
        let steps = path
            .hops()
            .into_iter()
            .enumerate()
            .map(|(index, hop)| RouteStep {
                index: index + 1,
                from: hop.from.to_string(),
                to: hop.to.to_string(),
                line: hop.line.to_string(),
            })
            .collect::<Vec<_>>();

        Self {
            start: path.start().to_string(),
            goal: path.goal().to_string(),
            hops: path.hop_count(),
            stations: path.stations().into_iter().map(str::to_string).collect(),
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::WithLines => self.render_with_lines(),
        }
    }

    /// `A -> B -> C`. A trivial route renders as the single station name.
    pub fn render_plain(&self) -> String {
        self.stations.join(" -> ")
    }

    pub fn render_with_lines(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} -> {} ({} {})",
            self.start,
            self.goal,
            self.hops,
            if self.hops == 1 { "hop" } else { "hops" }
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {} via {}",
                step.index, step.from, step.to, step.line
            );
        }
        buffer
    }
}
