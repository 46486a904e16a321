use chase_core::{Cell, Direction};

use crate::algorithm::Algorithm;
use crate::error::{Endpoint, PathError};
use crate::neighbors::Neighbors;
use crate::traits::Board;

/// Entry point for every search routine.
///
/// A `PathFinder` holds only the direction order used to expand
/// neighbours; each search allocates its own frontier and tables, so one
/// finder can be shared freely and called every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathFinder {
    pub(crate) directions: [Direction; 4],
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// A finder expanding neighbours in [`Direction::SEARCH_ORDER`].
    pub const fn new() -> Self {
        Self {
            directions: Direction::SEARCH_ORDER,
        }
    }

    /// A finder expanding neighbours in a custom order.
    pub const fn with_directions(directions: [Direction; 4]) -> Self {
        Self { directions }
    }

    /// The neighbour expansion order.
    #[inline]
    pub fn directions(&self) -> [Direction; 4] {
        self.directions
    }

    /// Compute the start-to-goal route the opponent should follow.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached.
    pub fn route<B: Board>(
        &self,
        algorithm: Algorithm,
        board: &B,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>, PathError> {
        let search = match algorithm {
            Algorithm::Dfs => self.dfs(board, start, goal)?,
            Algorithm::Bfs => self.bfs(board, start, goal)?,
            Algorithm::Dijkstra => self.dijkstra(board, start, goal)?,
            Algorithm::AStar => self.astar(board, start, goal)?,
            Algorithm::BellmanFord => return self.bellman_ford(board, start, goal),
        };
        Ok(search.map(|s| s.path))
    }

    pub(crate) fn neighbors(&self) -> Neighbors {
        Neighbors::new(self.directions)
    }
}

/// Reject endpoints that are not vertices of `board`.
pub(crate) fn check_endpoints<B: Board>(board: &B, start: Cell, goal: Cell) -> Result<(), PathError> {
    if !board.contains(start) {
        return Err(PathError::NotOnBoard {
            endpoint: Endpoint::Start,
            cell: start,
        });
    }
    if !board.contains(goal) {
        return Err(PathError::NotOnBoard {
            endpoint: Endpoint::Goal,
            cell: goal,
        });
    }
    Ok(())
}
