//! Graph searches over maze grids.
//!
//! This crate provides the textbook search routines an opponent can use to
//! chase the player through a maze:
//!
//! - **Depth-first search** ([`PathFinder::dfs`])
//! - **Breadth-first search** ([`PathFinder::bfs`])
//! - **Dijkstra** ([`PathFinder::dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`PathFinder::astar`])
//! - **Bellman-Ford** with negative-cycle detection ([`PathFinder::bellman_ford`])
//! - **Floyd-Warshall** all-pairs paths over an explicit
//!   [`AdjacencyMatrix`] ([`PathFinder::floyd_warshall`])
//!
//! The grid graph is implicit: a [`Board`] lists its cells and answers
//! [`Legality`] queries, and edges are generated on demand from the four
//! cardinal directions. [`PathFinder`] carries no state besides the
//! direction order, so every call builds its own frontier and tables.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Legality`] | gating frontier expansion |
//! | [`Board`] : [`Legality`] | every grid search, Bellman-Ford edge costs |

mod algorithm;
mod astar;
mod bellman_ford;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod floyd_warshall;
mod frontier;
mod neighbors;
mod pathfinder;
mod search;
mod traits;

#[cfg(test)]
mod testing;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use floyd_warshall::{AdjacencyMatrix, AllPairs};
pub use frontier::PriorityFrontier;
pub use neighbors::Neighbors;
pub use pathfinder::PathFinder;
pub use search::Search;
pub use traits::{Board, Legality};
