//! Waymark - tutorial application
//!
//! A small single-page app driven line by line from stdin:
//! - Root layout with the main navigation and an outlet
//! - Home, product list and product detail pages
//! - An error page for unknown paths and missing products

pub mod commands;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use waymark_core::Config;

use commands::{navigation, CommandResult, ShellCommand};
use state::AppState;

pub fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    waymark_core::init_logging(&config.log_level);

    let state = AppState::new(config).context("Failed to build the router")?;

    tracing::info!("Waymark started");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    // Print the starting page
    let result = navigation::execute(&state, &ShellCommand::Show);
    writeln!(stdout, "{}", serde_json::to_string(&result)?)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let line_out = match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => serde_json::to_string(&navigation::execute(&state, &command))?,
            Err(e) => serde_json::to_string(&CommandResult::<()>::err(e))?,
        };
        writeln!(stdout, "{}", line_out)?;
        stdout.flush()?;
    }

    tracing::info!("Waymark stopped");

    Ok(())
}
