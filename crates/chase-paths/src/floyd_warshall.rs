//! All-pairs shortest paths over an explicit weighted adjacency matrix.
//!
//! Unlike the grid searches, Floyd-Warshall works on numbered vertices.
//! [`PathFinder::adjacency`] bridges the two by numbering a board's cells.

use chase_core::Cell;

use crate::PathFinder;
use crate::error::PathError;
use crate::traits::Board;

/// A square matrix of edge weights; `None` means no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<Option<i32>>,
}

impl AdjacencyMatrix {
    /// An `n × n` matrix with no edges.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            weights: vec![None; n * n],
        }
    }

    /// Build a matrix from rows, rejecting ragged or non-square input.
    pub fn from_rows(rows: Vec<Vec<Option<i32>>>) -> Result<Self, PathError> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(PathError::NotSquare {
                    row,
                    expected: n,
                    found: entries.len(),
                });
            }
            weights.extend(entries);
        }
        Ok(Self { n, weights })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Add or replace the edge `i → j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not a vertex.
    pub fn set_edge(&mut self, i: usize, j: usize, weight: i32) {
        assert!(i < self.n && j < self.n, "edge ({i}, {j}) outside {0}×{0} matrix", self.n);
        self.weights[i * self.n + j] = Some(weight);
    }

    /// Weight of the edge `i → j`, if any.
    pub fn edge(&self, i: usize, j: usize) -> Option<i32> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.weights[i * self.n + j]
    }
}

/// Distances and next hops for every ordered pair of vertices.
#[derive(Debug, Clone)]
pub struct AllPairs {
    n: usize,
    dist: Vec<Option<i64>>,
    next: Vec<Option<usize>>,
}

impl AllPairs {
    /// Shortest distance from `i` to `j`, or `None` if unreachable.
    pub fn distance(&self, i: usize, j: usize) -> Option<i64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.dist[i * self.n + j]
    }

    /// Vertex sequence of a shortest path from `i` to `j`, both included.
    pub fn path(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        if i >= self.n || j >= self.n {
            return None;
        }
        if i == j {
            return Some(vec![i]);
        }
        let mut path = vec![i];
        let mut cur = i;
        while cur != j {
            cur = self.next[cur * self.n + j]?;
            path.push(cur);
            if path.len() > self.n {
                // Only possible when a next-hop chain loops.
                return None;
            }
        }
        Some(path)
    }

    /// One path per ordered pair `i != j` that is reachable, ordered by `i`
    /// then `j`.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        let mut all = Vec::new();
        for i in 0..self.n {
            for j in 0..self.n {
                if i == j {
                    continue;
                }
                if let Some(p) = self.path(i, j) {
                    all.push(p);
                }
            }
        }
        all
    }

    /// The path from `i` to `j` translated to cells through `cells`, the
    /// table returned by [`PathFinder::adjacency`].
    pub fn cell_path(&self, cells: &[Cell], i: usize, j: usize) -> Option<Vec<Cell>> {
        self.path(i, j)?
            .into_iter()
            .map(|v| cells.get(v).copied())
            .collect()
    }
}

impl PathFinder {
    /// Floyd-Warshall all-pairs shortest paths.
    ///
    /// Fails with [`PathError::NegativeCycle`] as soon as some vertex ends
    /// up with a negative distance to itself.
    pub fn floyd_warshall(&self, graph: &AdjacencyMatrix) -> Result<AllPairs, PathError> {
        let n = graph.len();
        let mut dist: Vec<Option<i64>> = vec![None; n * n];
        let mut next: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    dist[i * n + j] = Some(0);
                } else if let Some(w) = graph.edge(i, j) {
                    dist[i * n + j] = Some(i64::from(w));
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(dik) = dist[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(dkj) = dist[k * n + j] else {
                        continue;
                    };
                    let Some(through) = dik.checked_add(dkj) else {
                        log::warn!("floyd-warshall: distance overflow through vertex {k}");
                        return Err(PathError::NegativeCycle);
                    };
                    if dist[i * n + j].is_none_or(|dij| through < dij) {
                        dist[i * n + j] = Some(through);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
            // Stop at the first negative diagonal.
            if (0..n).any(|i| dist[i * n + i].is_some_and(|d| d < 0)) {
                log::warn!("floyd-warshall: negative cycle detected at vertex {k}");
                return Err(PathError::NegativeCycle);
            }
        }

        log::trace!("floyd-warshall: relaxed {n} vertices");
        Ok(AllPairs { n, dist, next })
    }

    /// Number the cells of `board` and build its adjacency matrix.
    ///
    /// Vertex `i` of the matrix is `cells[i]` of the returned table; edges
    /// join legal cardinal neighbours and carry [`Board::cost`].
    pub fn adjacency<B: Board>(&self, board: &B) -> (AdjacencyMatrix, Vec<Cell>) {
        let cells: Vec<Cell> = board.cells().collect();
        let index: std::collections::HashMap<Cell, usize> =
            cells.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let mut matrix = AdjacencyMatrix::new(cells.len());
        let mut nbrs = self.neighbors();
        for (i, &c) in cells.iter().enumerate() {
            for &n in nbrs.cardinal(c, |c| board.is_legal(c)) {
                if let Some(&j) = index.get(&n) {
                    matrix.set_edge(i, j, board.cost(c, n));
                }
            }
        }
        (matrix, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::open_grid;

    /// Undirected 4-cycle 0 - 1 - 2 - 3 - 0 with unit edges.
    fn square() -> AdjacencyMatrix {
        let mut m = AdjacencyMatrix::new(4);
        for i in 0..4 {
            let j = (i + 1) % 4;
            m.set_edge(i, j, 1);
            m.set_edge(j, i, 1);
        }
        m
    }

    #[test]
    fn four_cycle_distances() {
        let ap = PathFinder::new().floyd_warshall(&square()).unwrap();
        for i in 0..4usize {
            for j in 0..4usize {
                let cw = (j + 4 - i) % 4;
                let ccw = (i + 4 - j) % 4;
                let expected = cw.min(ccw) as i64;
                assert_eq!(ap.distance(i, j), Some(expected), "{i} → {j}");
                let path = ap.path(i, j).unwrap();
                assert_eq!(path.len() as i64 - 1, expected);
                assert_eq!(path.first(), Some(&i));
                assert_eq!(path.last(), Some(&j));
            }
        }
        // Opposite corners: exactly one intermediate vertex.
        assert_eq!(ap.path(0, 2).unwrap().len(), 3);
        assert_eq!(ap.paths().len(), 12);
    }

    #[test]
    fn unreachable_pairs_are_skipped() {
        let mut m = AdjacencyMatrix::new(3);
        m.set_edge(0, 1, 5);
        let ap = PathFinder::new().floyd_warshall(&m).unwrap();
        assert_eq!(ap.distance(0, 1), Some(5));
        assert_eq!(ap.distance(1, 0), None);
        assert_eq!(ap.path(2, 0), None);
        assert_eq!(ap.paths(), vec![vec![0, 1]]);
    }

    #[test]
    fn prefers_cheaper_indirect_route() {
        let m = AdjacencyMatrix::from_rows(vec![
            vec![None, Some(10), Some(1)],
            vec![None, None, None],
            vec![None, Some(2), None],
        ])
        .unwrap();
        let ap = PathFinder::new().floyd_warshall(&m).unwrap();
        assert_eq!(ap.distance(0, 1), Some(3));
        assert_eq!(ap.path(0, 1), Some(vec![0, 2, 1]));
    }

    #[test]
    fn negative_cycle_is_an_error() {
        let mut m = AdjacencyMatrix::new(2);
        m.set_edge(0, 1, -3);
        m.set_edge(1, 0, 1);
        let err = PathFinder::new().floyd_warshall(&m).unwrap_err();
        assert_eq!(err, PathError::NegativeCycle);
    }

    #[test]
    fn dense_negative_graph_is_an_error() {
        let n = 80;
        let mut m = AdjacencyMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    m.set_edge(i, j, -1);
                }
            }
        }
        let err = PathFinder::new().floyd_warshall(&m).unwrap_err();
        assert_eq!(err, PathError::NegativeCycle);
    }

    #[test]
    fn extreme_weights_do_not_overflow() {
        let mut m = AdjacencyMatrix::new(3);
        m.set_edge(0, 1, i32::MIN);
        m.set_edge(1, 2, i32::MIN);
        m.set_edge(2, 0, i32::MIN);
        let err = PathFinder::new().floyd_warshall(&m).unwrap_err();
        assert_eq!(err, PathError::NegativeCycle);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = AdjacencyMatrix::from_rows(vec![vec![None, None], vec![None]]).unwrap_err();
        assert_eq!(
            err,
            PathError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn board_adjacency_matches_grid_distance() {
        let board = open_grid(3, 3);
        let pf = PathFinder::new();
        let (m, cells) = pf.adjacency(&board);
        assert_eq!(m.len(), 9);
        let ap = pf.floyd_warshall(&m).unwrap();
        let from = cells.iter().position(|&c| c == Cell::new(0, 0)).unwrap();
        let to = cells.iter().position(|&c| c == Cell::new(2, 2)).unwrap();
        assert_eq!(ap.distance(from, to), Some(4));
        let path = ap.cell_path(&cells, from, to).unwrap();
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(2, 2)));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn empty_matrix() {
        let ap = PathFinder::new().floyd_warshall(&AdjacencyMatrix::new(0)).unwrap();
        assert!(ap.paths().is_empty());
    }
}
