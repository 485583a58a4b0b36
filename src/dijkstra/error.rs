// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during
/// [shortest_path](crate::shortest_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The start or end node doesn't exist in the graph.
    UnknownNode(String),

    /// Every node reachable from the start was expanded without ever
    /// touching the end. Happens when an isolated node is requested, or
    /// when forbidden zones cut the graph into disconnected pieces.
    ///
    /// This must never be rendered; callers are expected to report it
    /// instead of drawing a degenerate line.
    NoRoute { start: String, end: String },
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node: {}", id),
            Self::NoRoute { start, end } => write!(f, "no route from {} to {}", start, end),
        }
    }
}

impl std::error::Error for RouteError {}
