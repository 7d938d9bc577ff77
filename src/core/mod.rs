pub mod error;
pub mod graph;
pub mod metrics;
pub mod types;

pub use error::{MapError, ScenError};
pub use graph::Graph;
pub use metrics::{DijkstraMetrics, PQMetrics};
pub use types::{Cost32, Key, NodeId, INF, INVALID_NODE};
