//! Command-line options and config file support

pub mod config;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// taskdir - a small web task manager storing each task as a text file
#[derive(Parser, Debug)]
#[command(name = "taskdir", version, about, long_about = None)]
pub struct Cli {
    /// Task storage directory (overrides config file)
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Address to bind (overrides config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Config file to read instead of the default location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the requested verbosity, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
