mod cli;

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use ascii_fit::{process_file, terminal};
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let Some(path) = cli.path.as_deref() else {
        println!("PNG file required!");
        std::process::exit(-1);
    };

    let config = cli.config();
    config.validate()?;

    // Snapshot the console once; it is not re-read while rendering.
    let detected = if cli.has_explicit_size() {
        config.fallback_size
    } else {
        terminal::console_size_or(config.fallback_size)
    };
    let console = cli.console_size(detected);
    log::debug!("console size {}x{}", console.width, console.height);

    let text = process_file(path, console, &config)
        .with_context(|| format!("could not render {}", path.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.clear_screen && out.is_terminal() {
        terminal::clear_screen(&mut out).context("could not clear the screen")?;
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(())
}
