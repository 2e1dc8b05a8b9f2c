//! stepgrid — reads search queries line by line and runs them.
//!
//! A query line looks like `<TYPE> <targetX> <targetY> <step0> <step1> ...`
//! with `TYPE` one of `BFS`, `IDS` or `A*`. See [`query`] for parsing and
//! [`runner`] for how a query is executed and reported.

pub mod config;
pub mod error;
pub mod output;
pub mod probe;
pub mod query;
pub mod runner;
