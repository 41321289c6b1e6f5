//! Console chess: reads moves from stdin and prints what the rules engine
//! made of them.
//!
//! Each line is either two squares (`E2 E4`), a side and castle code
//! (`W O-O`, `B O-O-O`), `board` to print the position, or `reset`.

mod config;
mod driver;

use anyhow::Context;
use clap::Parser;
use config::DriverConfig;
use driver::Driver;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chess-cli")]
#[command(about = "Play chess from the console, one move per line")]
struct Args {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the board after every accepted move
    #[arg(long)]
    show_board: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Args::parse();

    let path = args.config.unwrap_or_else(DriverConfig::default_path);
    let mut config = DriverConfig::load(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    if args.show_board {
        config.show_board = true;
    }
    tracing::debug!(?config, "configuration loaded");

    let mut driver = Driver::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in driver.start() {
        writeln!(out, "{}", line)?;
    }

    for line in io::stdin().lock().lines() {
        for reply in driver.handle_line(&line?) {
            writeln!(out, "{}", reply)?;
        }
    }
    Ok(())
}
