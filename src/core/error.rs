//! Typed failures for the external I/O collaborators. The core queues and
//! the Dijkstra driver never return a `Result`; only file parsing can fail.

use thiserror::Error;

/// Failure constructing a [`crate::grid::GridMap`] from a MovingAI `.map` file.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot open map file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed map header in {path}: {reason}")]
    Header { path: String, reason: String },
    #[error("map {path} declares width {expected} but row {row} has width {found}")]
    ShortRow {
        path: String,
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure loading a MovingAI `.scen` file.
#[derive(Error, Debug)]
pub enum ScenError {
    #[error("cannot open scenario file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
