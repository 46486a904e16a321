use std::collections::{HashMap, HashSet};

use chase_core::Cell;

use crate::PathFinder;
use crate::error::PathError;
use crate::pathfinder::check_endpoints;
use crate::search::{Search, backtrack};
use crate::traits::Board;

impl PathFinder {
    /// Depth-first search from `start` to `goal`.
    ///
    /// Neighbours are pushed in direction order, so the last direction is
    /// explored first. The returned [`Search::path`] is a valid route but
    /// not necessarily a shortest one.
    pub fn dfs<B: Board>(&self, board: &B, start: Cell, goal: Cell) -> Result<Option<Search>, PathError> {
        check_endpoints(board, start, goal)?;

        let mut stack = vec![start];
        let mut seen = HashSet::from([start]);
        let mut preds: HashMap<Cell, Cell> = HashMap::new();
        let mut visited = Vec::new();
        let mut nbrs = self.neighbors();

        while let Some(current) = stack.pop() {
            visited.push(current);
            if current == goal {
                log::trace!("dfs: reached {goal} after visiting {} cells", visited.len());
                let path = backtrack(&preds, start, goal);
                return Ok(Some(Search { visited, path }));
            }
            for &n in nbrs.cardinal(current, |c| board.is_legal(c)) {
                if seen.insert(n) {
                    preds.insert(n, current);
                    stack.push(n);
                }
            }
        }

        log::debug!("dfs: {goal} unreachable from {start}");
        Ok(None)
    }
}
