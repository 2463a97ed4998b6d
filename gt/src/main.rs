use std::io::Write;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use greeter::cli::{Cli, Command};
use greeter::config::Config;
use greeter::{GreetingEngine, NameLoader};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > WARN
    let mut builder = env_logger::Builder::from_default_env();
    match cli_log_level.or(config_log_level) {
        Some(level) => {
            let filter = level
                .parse::<log::LevelFilter>()
                .map_err(|_| eyre::eyre!("Unknown log level '{}'", level))?;
            builder.filter_level(filter);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(log::LevelFilter::Warn);
        }
        None => {}
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let names_dir = cli.names_dir.clone().unwrap_or_else(|| config.names_dir.clone());
    let pattern = cli.pattern.clone().unwrap_or_else(|| config.pattern.clone());
    info!("greeter starting: dir={} pattern={}", names_dir.display(), pattern);

    let loader = NameLoader::new(&names_dir).with_pattern(pattern);
    let records = loader
        .load()
        .context(format!("Failed to load names from {}", names_dir.display()))?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let phrases: Vec<&str> = config
        .greetings
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let mut engine = GreetingEngine::with_phrases(rng, &phrases);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    let mut out = std::io::stdout().lock();

    debug!("main: dispatching command {:?}", cli.command);
    match cli.command {
        Some(Command::Random) => engine.greet_random(&names, &mut out)?,
        Some(Command::All) => engine.greet_all(&names, &mut out)?,
        Some(Command::Exchange) => engine.greet_each_other(&names, &mut out)?,
        Some(Command::List) => {
            if records.is_empty() {
                writeln!(out, "No names found")?;
            }
            for record in &records {
                writeln!(out, "{} {}", record.name.cyan(), record.source.display().to_string().dimmed())?;
            }
        }
        None => {
            engine.greet_random(&names, &mut out)?;
            engine.greet_all(&names, &mut out)?;
            engine.greet_each_other(&names, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
