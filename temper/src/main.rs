use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Read;
use std::path::Path;
use temper::cli::{Cli, Commands};
use temper::{Engine, EngineConfig, commands, load_config};
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => load_config()?,
    };
    let config = if cli.debug { config.with_debug(true) } else { config };
    let engine = Engine::with_config(&config);

    match cli.command {
        Commands::Class { file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", commands::class(&engine, &text));
        }
        Commands::Css { selector, file } => {
            let text = read_input(file.as_deref())?;
            println!("{}", commands::css(&engine, &selector, &text));
        }
        Commands::Properties { filter } => {
            commands::properties(filter.as_deref())
                .iter()
                .for_each(|line| println!("{line}"));
        }
        Commands::Pseudos => commands::pseudos()
            .iter()
            .for_each(|line| println!("{line}")),
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
