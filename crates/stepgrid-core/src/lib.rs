//! **stepgrid-core** — geometry types shared by the stepgrid crates.
//!
//! The search space is the whole integer plane, so unlike a bounded grid
//! there is no range type here: a [`Point`] is all a node needs.

pub mod geom;

pub use geom::Point;
