pub mod bucket;
pub mod heap;
pub mod pq;
pub mod stoc;

pub use bucket::BucketPQ;
pub use heap::HeapPQ;
pub use pq::PriorityQueue;
pub use stoc::STOCPQ;
