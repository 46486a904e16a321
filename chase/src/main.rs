//! Chase: a terminal maze chase.
//!
//! The opponent recomputes its route to the player every tick with the
//! selected graph search and takes one step along it.

mod term;

use std::io::ErrorKind;
use std::time::{Duration, Instant};

use chase_lib::config::{ChaseConfig, Cli};
use chase_lib::game::Game;
use chase_lib::logging;
use chase_lib::BUNDLED_MAZE;
use chase_maze::{Maze, MazeError, MazeSymbols};
use clap::Parser;

use term::{Input, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::file_logger(path, cli.log_level)?.try_init()?;
    }

    let config = ChaseConfig::resolve(&cli)?;
    log::debug!("{config:?}");

    let maze = load_maze(&config)?;
    let mut game = Game::new(maze, config.algorithm, config.target_score, config.seed);

    let mut terminal = Terminal::init()?;
    let result = run(&mut terminal, &mut game, config.tick_interval());
    terminal.close();
    result
}

/// The configured maze, or the bundled one when the file does not exist.
fn load_maze(config: &ChaseConfig) -> Result<Maze, MazeError> {
    match Maze::load(&config.maze_file, config.symbols) {
        Err(MazeError::Io { path, source }) if source.kind() == ErrorKind::NotFound => {
            log::warn!(
                "maze file {} not found, using the bundled maze",
                path.display()
            );
            Maze::parse_with(BUNDLED_MAZE, MazeSymbols::default())
        }
        other => other,
    }
}

fn run(
    terminal: &mut Terminal,
    game: &mut Game,
    interval: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut next_tick = Instant::now() + interval;
    loop {
        terminal.draw(game)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        match term::poll_input(timeout)? {
            Some(Input::Quit) => break,
            Some(Input::Move(dir)) => {
                game.move_player(dir);
            }
            Some(Input::CycleAlgorithm) => {
                game.cycle_algorithm();
            }
            Some(Input::ToggleRoute) => terminal.toggle_route(),
            Some(Input::Restart) => {
                game.restart();
                next_tick = Instant::now() + interval;
            }
            None => {}
        }

        let now = Instant::now();
        if now >= next_tick {
            game.tick()?;
            next_tick = now + interval;
        }
    }
    log::info!(
        "quit after {} ticks, score {:?}",
        game.ticks(),
        game.score()
    );
    Ok(())
}
