use std::fmt;

use chase_core::Cell;

/// Which end of a search a cell was supplied as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors raised by the search routines.
///
/// An unreachable goal is not an error: the routines return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The start or goal cell is not a vertex of the board.
    #[error("{endpoint} cell {cell} is not on the board")]
    NotOnBoard { endpoint: Endpoint, cell: Cell },
    /// Relaxation still improved a distance after |V| - 1 passes.
    #[error("graph contains a negative cycle")]
    NegativeCycle,
    /// An adjacency matrix row has the wrong number of entries.
    #[error("adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An algorithm name did not match any known search.
    #[error("unknown search algorithm '{0}'")]
    UnknownAlgorithm(String),
}
