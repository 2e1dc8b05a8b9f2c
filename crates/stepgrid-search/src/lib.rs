//! Uninformed and heuristic-ordered search over an implicit, unbounded grid.
//!
//! The search space is never materialised: a [`SearchTree`] starts from a
//! single root and grows lazily as a driver expands nodes. Every expansion
//! of a node at depth `d` produces exactly five children, offset from their
//! parent by the step size `steps[d]`:
//!
//! ```text
//! (+s, 0)  (-s, 0)  (0, +s)  (0, -s)  (0, 0)
//! ```
//!
//! Three drivers walk this space:
//!
//! | Driver | Method | Order |
//! |---|---|---|
//! | Breadth-first | [`SearchTree::bfs`] | level by level |
//! | Iterative deepening | [`SearchTree::ids`] | depth-bounded DFS, growing bound |
//! | Greedy ("A*") | [`SearchTree::greedy`] | DFS, children sorted by [`heuristic`] |
//!
//! On success the driver reports the found [`NodeId`];
//! [`SearchTree::backtrace`] turns it into a coordinate path.

mod backtrace;
mod bfs;
mod error;
mod greedy;
mod heuristic;
mod ids;
mod report;
mod steps;
mod target;
mod tree;

pub use error::SearchError;
pub use heuristic::{HEURISTIC_SCALE, heuristic};
pub use report::{SearchObserver, SearchReport, SearchStats};
pub use steps::StepSequence;
pub use target::Target;
pub use tree::{CHILDREN_PER_EXPANSION, NodeId, SearchLimits, SearchTree};
