//! **chase-core**: geometry primitives shared by the maze chase crates.
//!
//! A [`Cell`] is a `(row, col)` coordinate on the maze grid, a [`Direction`]
//! is one of the four cardinal moves, and a [`Range`] is the half-open
//! rectangle a maze occupies.

pub mod geom;

pub use geom::{Cell, Direction, Range, RangeIter};
