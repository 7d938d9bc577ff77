//! A single-source shortest-path research harness for comparing priority
//! queue implementations on MovingAI grid graphs.
//!
//! Three interchangeable [`queues::PriorityQueue`] implementations — a
//! binary heap, a Dial-style bucket queue and a batch/deferred queue — plug
//! into the same [`dijkstra::dijkstra_single`] driver over any
//! [`core::Graph`], so the driver's output and per-run counters can be
//! compared across queues without changing the algorithm.

pub mod core;
pub mod dijkstra;
pub mod grid;
pub mod io;
pub mod lict;
pub mod queues;

pub use crate::core::{Cost32, DijkstraMetrics, Graph, Key, MapError, NodeId, PQMetrics, ScenError, INF, INVALID_NODE};
pub use dijkstra::{dijkstra_single, DijkstraResult};
pub use grid::GridMap;
pub use io::{load_scen, ScenCase};
pub use queues::{BucketPQ, HeapPQ, PriorityQueue, STOCPQ};
