//! Stderr logging backend for the `log` facade.
//!
//! Libraries in this workspace only emit through `log::*!` macros; the CLI
//! installs this backend once at startup. Filtering follows
//! [`log::max_level`], so raising it later (e.g. for `--trace`) takes effect
//! without reinstalling.

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes `[LEVEL] message` lines to stderr, colored by severity.
pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(&level_color(record.level()));
        let _ = write!(stderr, "[{:5}]", record.level());
        let _ = stderr.reset();
        let _ = writeln!(stderr, " {}", record.args());
    }

    fn flush(&self) {}
}

fn level_color(level: Level) -> ColorSpec {
    let mut color = ColorSpec::new();
    match level {
        Level::Error => {
            color.set_fg(Some(Color::Red)).set_bold(true);
        }
        Level::Warn => {
            color.set_fg(Some(Color::Yellow)).set_bold(true);
        }
        Level::Info => {
            color.set_fg(Some(Color::Green));
        }
        Level::Debug | Level::Trace => {
            color.set_dimmed(true);
        }
    }
    color
}

/// Install the logger with an initial level. Later calls only adjust the
/// level.
pub fn init(level: LevelFilter) {
    let _ = log::set_boxed_logger(Box::new(StderrLogger));
    log::set_max_level(level);
}
