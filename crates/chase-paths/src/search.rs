use std::collections::HashMap;

use chase_core::Cell;

/// Outcome of a successful DFS, BFS, Dijkstra or A* search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    /// Cells in the order they left the frontier, ending with the goal.
    pub visited: Vec<Cell>,
    /// Start-to-goal route rebuilt from predecessor links, both ends included.
    pub path: Vec<Cell>,
}

impl Search {
    /// Number of moves along [`path`](Self::path).
    #[inline]
    pub fn cost(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Walk predecessor links from `goal` back to `start`.
///
/// `preds` must form a tree rooted at `start` that contains `goal`.
pub(crate) fn backtrack(preds: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        let Some(&prev) = preds.get(&cur) else {
            break;
        };
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
