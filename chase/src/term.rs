//! Crossterm front end: draws the game and turns key presses into inputs.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use chase_core::Direction;
use chase_lib::game::{Game, Side};
use chase_paths::Legality;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

// -- Palette --

const WALL_FG: Color = Color::Rgb { r: 70, g: 90, b: 220 };
const PLAYER_FG: Color = Color::Rgb { r: 240, g: 210, b: 60 };
const OPPONENT_FG: Color = Color::Rgb { r: 255, g: 85, b: 85 };
const PELLET_FG: Color = Color::Rgb { r: 248, g: 248, b: 242 };
const ROUTE_FG: Color = Color::Rgb { r: 98, g: 100, b: 106 };
const STATUS_FG: Color = Color::Rgb { r: 150, g: 155, b: 170 };

const PELLET: char = '•';
const ROUTE: char = '·';

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Direction),
    CycleAlgorithm,
    ToggleRoute,
    Restart,
    Quit,
}

/// Map a key press to an input.
pub fn input_for(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Up | KeyCode::Char('k') => Input::Move(Direction::Up),
        KeyCode::Right | KeyCode::Char('l') => Input::Move(Direction::Right),
        KeyCode::Down | KeyCode::Char('j') => Input::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Input::Move(Direction::Left),
        KeyCode::Char('a') => Input::CycleAlgorithm,
        KeyCode::Char('t') => Input::ToggleRoute,
        KeyCode::Char('r') => Input::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        _ => return None,
    };
    Some(input)
}

/// Wait up to `timeout` for a key press that means something.
pub fn poll_input(timeout: Duration) -> io::Result<Option<Input>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if let Some(input) = input_for(key) {
                return Ok(Some(input));
            }
        }
    }
    Ok(None)
}

/// The raw-mode terminal the game is drawn on.
///
/// Dropping it restores the terminal.
pub struct Terminal {
    out: Stdout,
    active: bool,
    show_route: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self {
            out,
            active: true,
            show_route: false,
        })
    }

    /// Show or hide the opponent's planned route.
    pub fn toggle_route(&mut self) {
        self.show_route = !self.show_route;
    }

    pub fn draw(&mut self, game: &Game) -> io::Result<()> {
        let maze = game.maze();
        let symbols = maze.symbols();
        let route = if self.show_route {
            game.route().ok().flatten().unwrap_or_default()
        } else {
            Vec::new()
        };

        queue!(self.out, cursor::MoveTo(0, 0))?;
        for c in maze.bounds().iter() {
            if c.col == 0 {
                queue!(self.out, cursor::MoveTo(0, c.row as u16))?;
            }
            let (ch, fg) = if c == game.opponent() {
                (symbols.opponent, OPPONENT_FG)
            } else if c == game.player() {
                (symbols.player, PLAYER_FG)
            } else if Some(c) == game.pellet() {
                (PELLET, PELLET_FG)
            } else if !maze.is_legal(c) {
                (symbols.obstacle, WALL_FG)
            } else if route.contains(&c) {
                (ROUTE, ROUTE_FG)
            } else {
                (' ', ROUTE_FG)
            };
            queue!(self.out, SetForegroundColor(fg), Print(ch))?;
        }

        let status_row = maze.rows() as u16 + 1;
        let score = game.score();
        let headline = match game.winner() {
            Some(Side::Player) => "You win! r: restart, q: quit".to_string(),
            Some(Side::Opponent) => "Caught! r: restart, q: quit".to_string(),
            None => format!(
                "You {}  Opponent {}  (first to {})",
                score.player,
                score.opponent,
                game.target_score()
            ),
        };
        queue!(
            self.out,
            SetForegroundColor(STATUS_FG),
            cursor::MoveTo(0, status_row),
            terminal::Clear(ClearType::CurrentLine),
            Print(headline),
            cursor::MoveTo(0, status_row + 1),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "chaser: {}  a: switch  t: route  arrows/hjkl: move",
                game.algorithm()
            )),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}
