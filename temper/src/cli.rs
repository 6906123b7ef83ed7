use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "temper")]
#[command(about = "Temper - generate deduplicated css from shorthand style text", long_about = None)]
pub struct Cli {
    /// Config file to use instead of .temper.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Turn on debug mode regardless of the config file
    #[arg(long, global = true)]
    pub debug: bool,
    /// Log what the engine mints and caches
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mint a class from shorthand text and print it followed by its rules
    Class {
        /// Shorthand file, read from stdin when omitted
        file: Option<PathBuf>,
    },
    /// Print the rules shorthand text produces for a raw selector
    Css {
        /// Selector the rules are scoped to
        selector: String,
        /// Shorthand file, read from stdin when omitted
        file: Option<PathBuf>,
    },
    /// List property setters and their short names
    Properties {
        /// Only list properties containing this text
        #[arg(long)]
        filter: Option<String>,
    },
    /// List supported pseudo selectors
    Pseudos,
}
