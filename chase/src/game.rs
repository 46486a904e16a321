//! Core game state (separate from the terminal front end).

use chase_core::{Cell, Direction};
use chase_maze::Maze;
use chase_paths::{Algorithm, Legality, PathError, PathFinder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One of the two actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// What a move or tick changed, for the front end to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Scored(Side),
    GameOver(Side),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

/// Core game state.
///
/// The player moves on key presses and scores by collecting the pellet; the
/// opponent takes one step along its route every tick and scores by
/// reaching the player.
pub struct Game {
    maze: Maze,
    finder: PathFinder,
    algorithm: Algorithm,
    player: Cell,
    opponent: Cell,
    pellet: Option<Cell>,
    score: Score,
    target_score: u32,
    winner: Option<Side>,
    ticks: u64,
    rng: StdRng,
}

impl Game {
    /// Start a game on `maze`. A fixed `seed` makes pellet placement
    /// reproducible.
    pub fn new(maze: Maze, algorithm: Algorithm, target_score: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut game = Self {
            player: maze.player_start(),
            opponent: maze.opponent_start(),
            maze,
            finder: PathFinder::new(),
            algorithm,
            pellet: None,
            score: Score::default(),
            target_score,
            winner: None,
            ticks: 0,
            rng,
        };
        game.place_pellet();
        game
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn opponent(&self) -> Cell {
        self.opponent
    }

    pub fn pellet(&self) -> Option<Cell> {
        self.pellet
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Move the player one cell, if the target cell is legal.
    pub fn move_player(&mut self, dir: Direction) -> Event {
        if self.winner.is_some() {
            return Event::None;
        }
        let next = self.player.step(dir);
        if !self.maze.is_legal(next) {
            return Event::None;
        }
        self.player = next;
        if self.player == self.opponent {
            return self.score_point(Side::Opponent);
        }
        if self.pellet == Some(self.player) {
            return self.score_point(Side::Player);
        }
        Event::None
    }

    /// Advance the opponent one step toward the player.
    ///
    /// When the search finds no route the opponent stays put.
    pub fn tick(&mut self) -> Result<Event, PathError> {
        if self.winner.is_some() {
            return Ok(Event::None);
        }
        self.ticks += 1;

        match self.route()?.as_deref() {
            Some([_, next, ..]) => self.opponent = *next,
            Some(_) => {}
            None => log::debug!(
                "tick {}: {} found no route from {} to {}",
                self.ticks,
                self.algorithm,
                self.opponent,
                self.player
            ),
        }

        if self.opponent == self.player {
            return Ok(self.score_point(Side::Opponent));
        }
        Ok(Event::None)
    }

    /// The route the opponent would follow from where it stands now.
    pub fn route(&self) -> Result<Option<Vec<Cell>>, PathError> {
        self.finder
            .route(self.algorithm, &self.maze, self.opponent, self.player)
    }

    /// Switch the opponent to the next search algorithm.
    pub fn cycle_algorithm(&mut self) -> Algorithm {
        self.algorithm = self.algorithm.next();
        log::info!("opponent now chases with {}", self.algorithm);
        self.algorithm
    }

    /// Reset scores and positions for a new game on the same maze.
    pub fn restart(&mut self) {
        self.score = Score::default();
        self.winner = None;
        self.ticks = 0;
        self.reset_positions();
        self.place_pellet();
    }

    // -------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------

    fn score_point(&mut self, side: Side) -> Event {
        let total = match side {
            Side::Player => {
                self.score.player += 1;
                self.score.player
            }
            Side::Opponent => {
                self.score.opponent += 1;
                self.score.opponent
            }
        };
        log::info!(
            "{side:?} scored ({} - {}) after {} ticks",
            self.score.player,
            self.score.opponent,
            self.ticks
        );

        if total >= self.target_score {
            log::info!("{side:?} wins");
            self.winner = Some(side);
            return Event::GameOver(side);
        }
        if side == Side::Opponent {
            log::debug!(
                "caught at {}:\n{}",
                self.opponent,
                self.maze.render(self.player, self.opponent)
            );
            self.reset_positions();
        }
        self.place_pellet();
        Event::Scored(side)
    }

    fn reset_positions(&mut self) {
        self.player = self.maze.player_start();
        self.opponent = self.maze.opponent_start();
    }

    /// Put the pellet on a random open cell not occupied by either actor.
    fn place_pellet(&mut self) {
        let free: Vec<Cell> = self
            .maze
            .open_cells()
            .filter(|&c| c != self.player && c != self.opponent)
            .collect();
        self.pellet = if free.is_empty() {
            None
        } else {
            Some(free[self.rng.random_range(0..free.len())])
        };
    }
}
