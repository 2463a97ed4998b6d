//! CLI argument parsing for greeter

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gt")]
#[command(author, version, about = "Randomized greetings for a directory of names", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the name files (default: ./names)
    #[arg(short = 'd', long, global = true)]
    pub names_dir: Option<PathBuf>,

    /// Glob pattern for name files (default: *.txt)
    #[arg(short, long, global = true)]
    pub pattern: Option<String>,

    /// Seed for reproducible output
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    /// Greeting to run; all three run in sequence when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Greet one randomly chosen name
    Random,

    /// Greet every name
    All,

    /// Two random names greet each other
    Exchange,

    /// List loaded names and their source files
    List,
}
