use std::collections::{HashMap, HashSet, VecDeque};

use chase_core::Cell;

use crate::PathFinder;
use crate::error::PathError;
use crate::pathfinder::check_endpoints;
use crate::search::{Search, backtrack};
use crate::traits::Board;

impl PathFinder {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Every step has cost 1, so [`Search::path`] is a shortest route.
    pub fn bfs<B: Board>(&self, board: &B, start: Cell, goal: Cell) -> Result<Option<Search>, PathError> {
        check_endpoints(board, start, goal)?;

        let mut queue = VecDeque::from([start]);
        let mut seen = HashSet::from([start]);
        let mut preds: HashMap<Cell, Cell> = HashMap::new();
        let mut visited = Vec::new();
        let mut nbrs = self.neighbors();

        while let Some(current) = queue.pop_front() {
            visited.push(current);
            if current == goal {
                log::trace!("bfs: reached {goal} after visiting {} cells", visited.len());
                let path = backtrack(&preds, start, goal);
                return Ok(Some(Search { visited, path }));
            }
            for &n in nbrs.cardinal(current, |c| board.is_legal(c)) {
                if seen.insert(n) {
                    preds.insert(n, current);
                    queue.push_back(n);
                }
            }
        }

        log::debug!("bfs: {goal} unreachable from {start}");
        Ok(None)
    }
}
