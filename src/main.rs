use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use shower::combinators::{constant, twice};
use shower::consts::{DEFAULT_LOG_LEVEL, REPO};
use shower::logging;
use shower::show::describe;
use shower::show::nil::Nil;
use shower::tagged::Tagged;

#[derive(Parser)]
#[command(
    name = "shower",
    version,
    about = "Things that show themselves.",
    after_help = REPO
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Stderr log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = DEFAULT_LOG_LEVEL)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Show a tagged record given as JSON, e.g. '{"tag":"hello","value":"world"}'
    Tagged {
        json: String,
    },
    /// Square a number twice
    Twice {
        n: u64,
    },
    /// Print X, ignoring Y
    Constant {
        x: String,
        y: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;

    let line = match cli.command {
        None => {
            let nil = Nil;
            describe(&nil)
        }
        Some(Command::Tagged { json }) => {
            let tagged: Tagged<String> = Tagged::from_json(&json)?;
            describe(&tagged)
        }
        Some(Command::Twice { n }) => {
            let squared = twice(|x: Option<u64>| x.and_then(|v| v.checked_mul(v)), Some(n))
                .with_context(|| format!("{n} squared twice overflows u64"))?;
            squared.to_string()
        }
        Some(Command::Constant { x, y }) => {
            log::debug!("ignoring {:?}", y);
            constant(x)(y)
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}
