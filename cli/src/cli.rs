use std::path::PathBuf;

use ascii_fit::{AsciiConfig, ConsoleSize};
use clap::Parser;

/// Render a PNG image as ASCII art sized to the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-fit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// PNG file to render
    pub path: Option<PathBuf>,

    /// Output width in columns (default: terminal width)
    #[arg(long, value_parser = parse_dimension)]
    pub width: Option<u32>,

    /// Output height in rows (default: terminal height)
    #[arg(long, value_parser = parse_dimension)]
    pub height: Option<u32>,

    /// Console size used when the terminal cannot be queried
    #[arg(long, default_value = "80x24", value_parser = parse_size)]
    pub fallback: ConsoleSize,

    /// Enlarge images smaller than the console
    #[arg(long)]
    pub upscale: bool,

    /// Do not clear the screen before printing
    #[arg(long)]
    pub no_clear: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the library configuration from the parsed flags
    pub fn config(&self) -> AsciiConfig {
        AsciiConfig {
            fallback_size: self.fallback,
            allow_upscale: self.upscale,
            clear_screen: !self.no_clear,
        }
    }

    /// Apply `--width` / `--height` overrides on top of a detected size
    pub fn console_size(&self, detected: ConsoleSize) -> ConsoleSize {
        ConsoleSize::new(
            self.width.unwrap_or(detected.width),
            self.height.unwrap_or(detected.height),
        )
    }

    /// True when both dimensions are given and no terminal query is needed
    pub fn has_explicit_size(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

/// Parse a positive cell count
fn parse_dimension(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value == 0 {
        return Err("dimension must be greater than 0".to_string());
    }
    Ok(value)
}

/// Parse a console size in COLSxROWS format
fn parse_size(s: &str) -> Result<ConsoleSize, String> {
    let (cols, rows) = s
        .split_once('x')
        .ok_or_else(|| format!("invalid size '{}'. Use COLSxROWS (e.g., 80x24)", s))?;
    Ok(ConsoleSize::new(parse_dimension(cols)?, parse_dimension(rows)?))
}
