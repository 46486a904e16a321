//! Maze parsing and the board rules the searches run against.

use std::path::{Path, PathBuf};

use chase_core::{Cell, Range};
use chase_paths::{Board, Legality};

/// Characters with a special meaning in a maze layout.
///
/// Every other character is open floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeSymbols {
    pub player: char,
    pub opponent: char,
    pub obstacle: char,
}

impl Default for MazeSymbols {
    fn default() -> Self {
        Self {
            player: 'P',
            opponent: 'O',
            obstacle: '*',
        }
    }
}

/// Errors that can occur when loading or parsing a maze.
#[derive(Debug, thiserror::Error)]
pub enum MazeError {
    #[error("cannot read maze {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("maze is empty")]
    Empty,
    #[error("maze row {row} is {found} cells wide, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("maze has no '{0}' marker")]
    MissingMarker(char),
    #[error("maze marker '{marker}' appears twice, at {first} and {second}")]
    DuplicateMarker { marker: char, first: Cell, second: Cell },
    #[error("symbol '{0}' is assigned to more than one role")]
    ConflictingSymbols(char),
}

/// A rectangular maze with the starting cells of both actors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    bounds: Range,
    walls: Vec<bool>,
    player_start: Cell,
    opponent_start: Cell,
    symbols: MazeSymbols,
}

impl Maze {
    /// Parse a layout using the default symbols.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        Self::parse_with(s, MazeSymbols::default())
    }

    /// Parse a layout.
    ///
    /// Lines are rows; all rows must have the same width. Empty lines
    /// before the first row and after the last are ignored; spaces are
    /// floor, even on an otherwise blank row. Exactly one player and one
    /// opponent marker must appear; their cells are floor.
    pub fn parse_with(s: &str, symbols: MazeSymbols) -> Result<Self, MazeError> {
        let MazeSymbols {
            player,
            opponent,
            obstacle,
        } = symbols;
        if player == opponent || player == obstacle {
            return Err(MazeError::ConflictingSymbols(player));
        }
        if opponent == obstacle {
            return Err(MazeError::ConflictingSymbols(opponent));
        }

        let mut lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let lines = &lines[first..];
        if lines.is_empty() {
            return Err(MazeError::Empty);
        }

        let width = lines[0].chars().count();
        let mut walls = Vec::with_capacity(width * lines.len());
        let mut player_start = None;
        let mut opponent_start = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                if ch == player {
                    place_marker(&mut player_start, ch, cell)?;
                } else if ch == opponent {
                    place_marker(&mut opponent_start, ch, cell)?;
                }
                walls.push(ch == obstacle);
            }
        }

        let player_start = player_start.ok_or(MazeError::MissingMarker(player))?;
        let opponent_start = opponent_start.ok_or(MazeError::MissingMarker(opponent))?;
        let bounds = Range::with_size(lines.len() as i32, width as i32);
        log::debug!(
            "parsed {}×{} maze, player at {player_start}, opponent at {opponent_start}",
            bounds.rows(),
            bounds.cols()
        );

        Ok(Self {
            bounds,
            walls,
            player_start,
            opponent_start,
            symbols,
        })
    }

    /// Read and parse a maze file.
    pub fn load(path: impl AsRef<Path>, symbols: MazeSymbols) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading maze from {}", path.display());
        Self::parse_with(&text, symbols)
    }

    /// The rectangle the maze occupies.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Where the player starts each round.
    #[inline]
    pub fn player_start(&self) -> Cell {
        self.player_start
    }

    /// Where the opponent starts each round.
    #[inline]
    pub fn opponent_start(&self) -> Cell {
        self.opponent_start
    }

    #[inline]
    pub fn symbols(&self) -> MazeSymbols {
        self.symbols
    }

    /// Whether `c` is an obstacle. Cells outside the maze are not.
    pub fn is_wall(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.walls[i])
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds.iter().filter(|&c| !self.is_wall(c))
    }

    /// Text form of the maze with the actors drawn at the given cells.
    ///
    /// Open floor is drawn as a space.
    pub fn render(&self, player: Cell, opponent: Cell) -> String {
        let mut out = String::with_capacity(self.bounds.len() + self.rows() as usize);
        for c in self.bounds.iter() {
            if c.col == 0 && c.row > 0 {
                out.push('\n');
            }
            let ch = if c == opponent {
                self.symbols.opponent
            } else if c == player {
                self.symbols.player
            } else if self.is_wall(c) {
                self.symbols.obstacle
            } else {
                ' '
            };
            out.push(ch);
        }
        out
    }
}

fn place_marker(slot: &mut Option<Cell>, marker: char, cell: Cell) -> Result<(), MazeError> {
    match *slot {
        Some(first) => Err(MazeError::DuplicateMarker {
            marker,
            first,
            second: cell,
        }),
        None => {
            *slot = Some(cell);
            Ok(())
        }
    }
}

impl Legality for Maze {
    /// In bounds and not an obstacle.
    fn is_legal(&self, cell: Cell) -> bool {
        self.bounds.index(cell).is_some_and(|i| !self.walls[i])
    }
}

impl Board for Maze {
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.open_cells()
    }
}
