use std::collections::{HashMap, HashSet};

use chase_core::Cell;

use crate::PathFinder;
use crate::error::PathError;
use crate::frontier::PriorityFrontier;
use crate::pathfinder::check_endpoints;
use crate::search::{Search, backtrack};
use crate::traits::Board;

impl PathFinder {
    /// Dijkstra search from `start` to `goal`, every step costing 1.
    ///
    /// The frontier is keyed by cost-so-far; [`Search::path`] is a shortest
    /// route.
    pub fn dijkstra<B: Board>(
        &self,
        board: &B,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Search>, PathError> {
        self.best_first(board, start, goal, "dijkstra", |_| 0)
    }

    /// Shared loop of Dijkstra and A*: the frontier priority of a cell is
    /// its cost-so-far plus `estimate(cell)`.
    pub(crate) fn best_first<B: Board>(
        &self,
        board: &B,
        start: Cell,
        goal: Cell,
        name: &str,
        estimate: impl Fn(Cell) -> i32,
    ) -> Result<Option<Search>, PathError> {
        check_endpoints(board, start, goal)?;

        let mut open = PriorityFrontier::new();
        open.put(start, estimate(start));
        let mut g: HashMap<Cell, i32> = HashMap::from([(start, 0)]);
        let mut preds: HashMap<Cell, Cell> = HashMap::new();
        let mut closed: HashSet<Cell> = HashSet::new();
        let mut visited = Vec::new();
        let mut nbrs = self.neighbors();

        while let Some(current) = open.get() {
            // Skip stale entries left behind by a later improvement.
            if !closed.insert(current) {
                continue;
            }
            visited.push(current);
            if current == goal {
                log::trace!(
                    "{name}: reached {goal} at cost {} after visiting {} cells",
                    g[&goal],
                    visited.len()
                );
                let path = backtrack(&preds, start, goal);
                return Ok(Some(Search { visited, path }));
            }

            let current_g = g[&current];
            for &n in nbrs.cardinal(current, |c| board.is_legal(c)) {
                let tentative = current_g + 1;
                if g.get(&n).is_some_and(|&known| tentative >= known) {
                    continue;
                }
                g.insert(n, tentative);
                preds.insert(n, current);
                open.put(n, tentative + estimate(n));
            }
        }

        log::debug!("{name}: {goal} unreachable from {start}");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::testing::{layout, open_grid};

    #[test]
    fn three_by_three_costs_four() {
        let board = open_grid(3, 3);
        let s = PathFinder::new()
            .dijkstra(&board, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(s.cost(), 4);
        assert_eq!(s.visited.last(), Some(&Cell::new(2, 2)));
    }

    #[test]
    fn cost_matches_manhattan_on_open_grid() {
        let board = open_grid(5, 7);
        let pf = PathFinder::new();
        let start = Cell::new(4, 6);
        for goal in board.iter().copied() {
            let s = pf.dijkstra(&board, start, goal).unwrap().unwrap();
            assert_eq!(s.cost() as i32, manhattan(start, goal));
        }
    }

    #[test]
    fn visits_each_cell_once() {
        let board = open_grid(4, 4);
        let s = PathFinder::new()
            .dijkstra(&board, Cell::new(0, 0), Cell::new(3, 3))
            .unwrap()
            .unwrap();
        let unique: HashSet<_> = s.visited.iter().collect();
        assert_eq!(unique.len(), s.visited.len());
        // The goal is the farthest cell, so everything is expanded first.
        assert_eq!(s.visited.len(), 16);
    }

    #[test]
    fn unreachable_goal() {
        let board = layout(
            "\
..#..
..#..
..#..",
        );
        let got = PathFinder::new()
            .dijkstra(&board, Cell::new(0, 0), Cell::new(2, 4))
            .unwrap();
        assert!(got.is_none());
    }
}
