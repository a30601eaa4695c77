//! Diagnostic logging setup for the binary.

use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::Write;

use crate::output;

/// Maps `-v` occurrences to a level filter.
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger.
///
/// `RUST_LOG`, when set, overrides the verbosity flag.
pub fn init_logger(verbosity: u8) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level_for(verbosity).as_str()));
    let plain = output::is_no_color();

    builder.format(move |buf, record| {
        let label = level_label(record.level());
        if plain {
            writeln!(buf, "{label} {}", record.args())
        } else {
            let label = match record.level() {
                Level::Error => label.red().bold().to_string(),
                Level::Warn => label.yellow().bold().to_string(),
                Level::Info => label.bold().to_string(),
                Level::Debug | Level::Trace => label.dimmed().to_string(),
            };
            writeln!(buf, "{label} {}", record.args())
        }
    });

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}

const fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
