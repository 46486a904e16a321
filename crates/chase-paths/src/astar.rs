use chase_core::Cell;

use crate::PathFinder;
use crate::distance::manhattan;
use crate::error::PathError;
use crate::search::Search;
use crate::traits::Board;

impl PathFinder {
    /// A* search from `start` to `goal` guided by Manhattan distance.
    ///
    /// The heuristic never overestimates on a unit-cost cardinal grid, so
    /// [`Search::path`] is a shortest route.
    pub fn astar<B: Board>(&self, board: &B, start: Cell, goal: Cell) -> Result<Option<Search>, PathError> {
        self.best_first(board, start, goal, "astar", |c| manhattan(goal, c))
    }
}
