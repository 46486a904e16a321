use std::collections::{BTreeSet, HashSet};

use chase_core::Cell;

/// Decides whether a searching agent may stand on a cell.
///
/// This is the only gate on frontier expansion: a cell that is out of
/// bounds or blocked must report `false`.
pub trait Legality {
    fn is_legal(&self, cell: Cell) -> bool;
}

/// A grid graph whose edges are the four cardinal moves between legal cells.
pub trait Board: Legality {
    /// Every vertex of the graph. Bellman-Ford relaxes edges out of each of
    /// these once per pass.
    fn cells(&self) -> impl Iterator<Item = Cell> + '_;

    /// Whether `cell` is a vertex a search may start from or aim at.
    fn contains(&self, cell: Cell) -> bool {
        self.is_legal(cell)
    }

    /// Cost of the edge from `from` to the adjacent `to`.
    ///
    /// Only Bellman-Ford and Floyd-Warshall consult it; the traversal
    /// routines always step with cost 1.
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }
}

impl Legality for HashSet<Cell> {
    fn is_legal(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl Board for HashSet<Cell> {
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter().copied()
    }
}

impl Legality for BTreeSet<Cell> {
    fn is_legal(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

impl Board for BTreeSet<Cell> {
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter().copied()
    }
}
