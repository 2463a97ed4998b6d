//! Greeter - randomized greetings for a directory of names
//!
//! Reads one first name per file from a names directory, then prints
//! greetings chosen at random from a fixed phrase set.
//!
//! # Architecture
//!
//! ```text
//! names/
//! ├── alice.txt   # "Alice Smith"  -> Alice
//! ├── bob.txt     # "Bob Jones"    -> Bob
//! └── ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use greeter::{GreetingEngine, NameLoader};
//!
//! let names = NameLoader::new("names").load_names()?;
//! let mut engine = GreetingEngine::new(rand::rng());
//! engine.greet_all(&names, &mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod config;
mod engine;
mod error;
mod loader;

pub use engine::{CLOSING_LINE, GREETINGS, GreetingEngine};
pub use error::{GreetError, Result};
pub use loader::{NameLoader, NameRecord, first_name};

/// Default directory holding the name files
pub const DEFAULT_NAMES_DIR: &str = "names";

/// Default glob pattern for name files
pub const DEFAULT_PATTERN: &str = "*.txt";
