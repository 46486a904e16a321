//! Maze layouts for the chase game.
//!
//! A [`Maze`] is parsed from a text layout where each character is one
//! cell: obstacles, the player's start, the opponent's start, and open
//! floor. It implements [`chase_paths::Board`] so every search can run on it.

pub mod maze;

pub use maze::{Maze, MazeError, MazeSymbols};
