use chase_core::{Cell, Direction};

/// Cached neighbour computation helper.
///
/// Enumerates the cardinal neighbours of a cell in a fixed direction order,
/// filtered by a predicate, reusing one buffer across calls.
pub struct Neighbors {
    order: [Direction; 4],
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new(Direction::SEARCH_ORDER)
    }
}

impl Neighbors {
    /// Create a helper that visits directions in `order`.
    pub fn new(order: [Direction; 4]) -> Self {
        Self {
            order,
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbours of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for d in self.order {
            let n = c.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
