//! Game configuration: a TOML file overlaid by command-line flags.
//!
//! ```toml
//! maze_file = "mazes/pacman_maze.txt"
//! game_speed_ms = 100
//! target_score = 3
//! algorithm = "bellman-ford"
//!
//! [symbols]
//! player = "P"
//! opponent = "O"
//! obstacle = "*"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use chase_maze::MazeSymbols;
use chase_paths::Algorithm;
use clap::Parser;
use log::LevelFilter;
use serde::Deserialize;

/// Errors raised while loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Tunable game settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChaseConfig {
    /// Maze layout to play on.
    pub maze_file: PathBuf,
    /// Characters that mark obstacles and the two starting cells.
    pub symbols: MazeSymbols,
    /// Milliseconds between opponent moves.
    pub game_speed_ms: u64,
    /// Points needed to win.
    pub target_score: u32,
    /// Search the opponent chases with.
    pub algorithm: Algorithm,
    /// Seed for pellet placement; random when absent.
    pub seed: Option<u64>,
}

impl ChaseConfig {
    pub const DEFAULT_MAZE_FILE: &'static str = "mazes/pacman_maze.txt";
    pub const DEFAULT_GAME_SPEED_MS: u64 = 100;
    pub const DEFAULT_TARGET_SCORE: u32 = 3;

    pub fn new() -> Self {
        Self {
            maze_file: PathBuf::from(Self::DEFAULT_MAZE_FILE),
            symbols: MazeSymbols::default(),
            game_speed_ms: Self::DEFAULT_GAME_SPEED_MS,
            target_score: Self::DEFAULT_TARGET_SCORE,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Build the effective configuration: the file named by `--config` (or
    /// defaults), then every flag that was given.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::new(),
        };
        config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overlay command-line flags.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(maze) = &cli.maze {
            self.maze_file = maze.clone();
        }
        if let Some(algorithm) = cli.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(speed) = cli.speed {
            self.game_speed_ms = speed;
        }
        if let Some(target) = cli.target_score {
            self.target_score = target;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_speed_ms == 0 {
            return Err(ConfigError::Invalid("game_speed_ms must be positive"));
        }
        if self.target_score == 0 {
            return Err(ConfigError::Invalid("target_score must be positive"));
        }
        Ok(())
    }

    /// Time between opponent moves.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.game_speed_ms)
    }
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "chase", version, about = "An opponent hunts you through a maze")]
pub struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maze layout file.
    #[arg(short, long)]
    pub maze: Option<PathBuf>,

    /// Search the opponent uses: dfs, bfs, dijkstra, astar, bellman-ford.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Milliseconds between opponent moves.
    #[arg(short, long)]
    pub speed: Option<u64>,

    /// Points needed to win.
    #[arg(short, long)]
    pub target_score: Option<u32>,

    /// Seed for pellet placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append log records to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let c = ChaseConfig::default();
        assert_eq!(c.maze_file, PathBuf::from("mazes/pacman_maze.txt"));
        assert_eq!(c.symbols, MazeSymbols::default());
        assert_eq!(c.game_speed_ms, 100);
        assert_eq!(c.target_score, 3);
        assert_eq!(c.algorithm, Algorithm::AStar);
        assert_eq!(c.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ChaseConfig::from_toml(
            r##"
            algorithm = "bellman-ford"
            target_score = 5

            [symbols]
            obstacle = "#"
            "##,
        )
        .unwrap();
        assert_eq!(c.algorithm, Algorithm::BellmanFord);
        assert_eq!(c.target_score, 5);
        assert_eq!(c.symbols.obstacle, '#');
        assert_eq!(c.symbols.player, 'P');
        assert_eq!(c.game_speed_ms, 100);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ChaseConfig::from_toml("sound = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_values_are_invalid() {
        assert!(matches!(
            ChaseConfig::from_toml("target_score = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ChaseConfig::from_toml("game_speed_ms = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chase.toml");
        std::fs::write(&path, "algorithm = \"dfs\"\ngame_speed_ms = 250\n").unwrap();

        let cli = Cli::try_parse_from([
            "chase",
            "--config",
            path.to_str().unwrap(),
            "--algorithm",
            "bfs",
            "--seed",
            "7",
        ])
        .unwrap();
        let c = ChaseConfig::resolve(&cli).unwrap();
        assert_eq!(c.algorithm, Algorithm::Bfs);
        assert_eq!(c.game_speed_ms, 250);
        assert_eq!(c.seed, Some(7));
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn bad_algorithm_flag() {
        assert!(Cli::try_parse_from(["chase", "--algorithm", "floyd"]).is_err());
    }

    #[test]
    fn missing_config_file() {
        let err = ChaseConfig::load(Path::new("/no/such/chase.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
