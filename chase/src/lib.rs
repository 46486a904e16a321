//! Chase: an opponent hunts the player through a maze.
//!
//! The library holds everything that does not touch the terminal: the
//! [`game`] rules, [`config`] loading and the file [`logging`] setup.

pub mod config;
pub mod game;
pub mod logging;

/// The maze used when the configured maze file does not exist.
pub const BUNDLED_MAZE: &str = include_str!("../mazes/pacman_maze.txt");
