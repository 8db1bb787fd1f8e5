//! Stderr logging. Stdout is reserved for program output.

use colored::{Color, Colorize};
use log::{Level, LevelFilter};

/// Level-prefixed, colored dispatcher writing to stderr.
fn stderr(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            let level = record.level();
            out.finish(format_args!(
                "{} {}",
                format!("{}:", level.to_string().to_lowercase())
                    .as_str()
                    .color(color(level)),
                message
            ))
        })
        .chain(std::io::stderr())
}

/// Install the stderr logger globally. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    stderr(level).apply()?;
    Ok(())
}

fn color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Blue,
        Level::Debug => Color::Magenta,
        Level::Trace => Color::Green,
    }
}
