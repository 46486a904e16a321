//! Boards shared by the unit tests.

use std::collections::{BTreeSet, HashMap};

use chase_core::{Cell, Range};

use crate::traits::{Board, Legality};

/// Every cell of a `rows × cols` rectangle.
pub(crate) fn open_grid(rows: i32, cols: i32) -> BTreeSet<Cell> {
    Range::with_size(rows, cols).iter().collect()
}

/// Cells of a text layout where `#` is an obstacle.
pub(crate) fn layout(s: &str) -> BTreeSet<Cell> {
    let mut cells = BTreeSet::new();
    for (row, line) in s.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch != '#' {
                cells.insert(Cell::new(row as i32, col as i32));
            }
        }
    }
    cells
}

/// A board with per-edge cost overrides.
pub(crate) struct Weighted {
    pub(crate) cells: BTreeSet<Cell>,
    pub(crate) costs: HashMap<(Cell, Cell), i32>,
}

impl Legality for Weighted {
    fn is_legal(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl Board for Weighted {
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn cost(&self, from: Cell, to: Cell) -> i32 {
        self.costs.get(&(from, to)).copied().unwrap_or(1)
    }
}
