//! File logging through `env_logger`.
//!
//! The terminal belongs to the game screen, so records are piped to a file
//! instead of stderr.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

/// A logger builder appending to `path` at `level`.
///
/// Call `init` or `try_init` on the result to install it.
pub fn file_logger(path: &Path, level: LevelFilter) -> io::Result<Builder> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)));
    Ok(builder)
}
