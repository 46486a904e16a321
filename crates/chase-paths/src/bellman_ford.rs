use std::collections::HashMap;

use chase_core::Cell;

use crate::PathFinder;
use crate::error::PathError;
use crate::pathfinder::check_endpoints;
use crate::search::backtrack;
use crate::traits::Board;

impl PathFinder {
    /// Bellman-Ford shortest path from `start` to `goal`.
    ///
    /// Relaxes the cardinal edges out of every board cell, with costs from
    /// [`Board::cost`], up to |V| - 1 times. A further pass that still
    /// improves a distance means the board has a negative cycle, reported as
    /// [`PathError::NegativeCycle`]. Returns `Ok(None)` when `goal` is
    /// unreachable.
    pub fn bellman_ford<B: Board>(
        &self,
        board: &B,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>, PathError> {
        check_endpoints(board, start, goal)?;

        let vertices: Vec<Cell> = board.cells().collect();
        // Absent entries are at infinite distance.
        let mut dist: HashMap<Cell, i64> = HashMap::from([(start, 0)]);
        let mut preds: HashMap<Cell, Cell> = HashMap::new();

        let passes = vertices.len().saturating_sub(1);
        for pass in 0..passes {
            if !self.relax(board, &vertices, &mut dist, &mut preds) {
                log::trace!("bellman-ford: converged after {} of {passes} passes", pass + 1);
                break;
            }
        }

        if self.relax(board, &vertices, &mut dist, &mut preds) {
            log::warn!("bellman-ford: negative cycle detected");
            return Err(PathError::NegativeCycle);
        }

        if !dist.contains_key(&goal) {
            log::debug!("bellman-ford: {goal} unreachable from {start}");
            return Ok(None);
        }
        Ok(Some(backtrack(&preds, start, goal)))
    }

    /// One relaxation pass over every edge. Returns whether any distance
    /// improved.
    fn relax<B: Board>(
        &self,
        board: &B,
        vertices: &[Cell],
        dist: &mut HashMap<Cell, i64>,
        preds: &mut HashMap<Cell, Cell>,
    ) -> bool {
        let mut changed = false;
        let mut nbrs = self.neighbors();
        for &u in vertices {
            let Some(&du) = dist.get(&u) else {
                continue;
            };
            for &v in nbrs.cardinal(u, |c| board.is_legal(c)) {
                let candidate = du + i64::from(board.cost(u, v));
                if dist.get(&v).is_some_and(|&dv| candidate >= dv) {
                    continue;
                }
                dist.insert(v, candidate);
                preds.insert(v, u);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::testing::{Weighted, layout, open_grid};

    #[test]
    fn three_by_three_path() {
        let board = open_grid(3, 3);
        let path = PathFinder::new()
            .bellman_ford(&board, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Cell::new(0, 0));
        assert_eq!(path[4], Cell::new(2, 2));
        for w in path.windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1);
        }
    }

    #[test]
    fn edge_count_is_true_distance() {
        let board = layout(
            "\
.....
.###.
.#...
.#.##
.....",
        );
        let pf = PathFinder::new();
        let start = Cell::new(0, 0);
        for goal in board.iter().copied() {
            let path = pf.bellman_ford(&board, start, goal).unwrap().unwrap();
            let bfs = pf.bfs(&board, start, goal).unwrap().unwrap();
            assert_eq!(path.len() - 1, bfs.cost(), "goal {goal}");
            assert_eq!(path[0], start);
        }
    }

    #[test]
    fn unreachable_goal_is_none() {
        let board = layout(
            "\
.#.
##.
...",
        );
        let got = PathFinder::new()
            .bellman_ford(&board, Cell::new(0, 0), Cell::new(2, 2))
            .unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn negative_cycle_is_an_error() {
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        let c = Cell::new(0, 2);
        let board = Weighted {
            cells: [a, b, c].into_iter().collect(),
            costs: [((a, b), -2), ((b, a), 1)].into_iter().collect(),
        };
        let err = PathFinder::new().bellman_ford(&board, a, c).unwrap_err();
        assert_eq!(err, PathError::NegativeCycle);
    }

    #[test]
    fn honours_edge_costs() {
        // Going straight right is expensive; the detour through row 1 wins.
        let board = Weighted {
            cells: open_grid(2, 3),
            costs: [((Cell::new(0, 0), Cell::new(0, 1)), 10)].into_iter().collect(),
        };
        let path = PathFinder::new()
            .bellman_ford(&board, Cell::new(0, 0), Cell::new(0, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path[1], Cell::new(1, 0));
        assert_eq!(path.last(), Some(&Cell::new(0, 2)));
    }
}
