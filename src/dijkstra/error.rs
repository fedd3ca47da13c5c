// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during [find_path](crate::find_path) or
/// [find_path_with_queue](crate::find_path_with_queue).
///
/// Absence of a path is not an error - it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The start or end nodes don't exist in a graph.
    InvalidReference(usize),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReference(node_id) => write!(f, "invalid node: {}", node_id),
        }
    }
}

impl std::error::Error for SolveError {}
