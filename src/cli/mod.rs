//! CLI command definitions and handlers

mod identify;
mod init;
mod languages;
mod profile;
mod rank;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rosetta::config::{self, Overrides, RosettaConfig};
use rosetta::corpus::{load_corpora, CorpusSet};
use rosetta::profile::{Boundary, ProfileOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parse a k-gram length (at least 1)
fn parse_kgram_length(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("k-gram length must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

fn parse_boundary(s: &str) -> Result<Boundary, String> {
    match s {
        "complete" => Ok(Boundary::Complete),
        "trailing-fragments" => Ok(Boundary::TrailingFragments),
        other => Err(format!(
            "unknown boundary '{}' (expected complete or trailing-fragments)",
            other
        )),
    }
}

/// Rosetta - guess the language of a text from its character k-grams
#[derive(Parser, Debug)]
#[command(name = "rosetta")]
#[command(
    version,
    about = "Identify the language of a text by comparing character k-gram profiles",
    after_help = "\
Examples:
  rosetta identify letter.txt                 Guess the language of a file
  cat page.txt | rosetta identify -           Read from stdin
  rosetta rank letter.txt --top 5             Show the five closest languages
  rosetta profile letter.txt --format json    Dump the k-gram profile
  rosetta --corpora ./langs languages         List the loaded corpora"
)]
pub struct Cli {
    /// Config file (default: ./rosetta.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of <Language>.txt corpus samples
    #[arg(long, global = true, env = "ROSETTA_CORPORA")]
    pub corpora: Option<PathBuf>,

    /// Characters per k-gram
    #[arg(long, global = true, value_parser = parse_kgram_length)]
    pub kgram_length: Option<usize>,

    /// K-grams kept per profile after normalizing
    #[arg(long, global = true)]
    pub top_k: Option<i64>,

    /// Keep every k-gram instead of pruning to --top-k
    #[arg(long, global = true)]
    pub no_prune: bool,

    /// Scan boundary: complete, trailing-fragments
    #[arg(long, global = true, value_parser = parse_boundary)]
    pub boundary: Option<Boundary>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Guess the language of one or more texts
    Identify {
        /// Input files, `-` for stdin
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Also print the similarity of the winning language
        #[arg(long)]
        scores: bool,
    },

    /// Score a text against every language, best first
    Rank {
        /// Input file, `-` for stdin
        input: PathBuf,

        /// Rows to show (default: all)
        #[arg(long)]
        top: Option<usize>,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Print the normalized k-gram profile of a text, heaviest first
    Profile {
        /// Input file, `-` for stdin
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List the loaded corpora
    Languages,

    /// Write an example rosetta.toml to the current directory
    Init,

    /// Show version information
    Version,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            kgram_length: self.kgram_length,
            top_k: self.top_k,
            no_prune: self.no_prune,
            boundary: self.boundary,
            corpora: self.corpora.clone(),
        }
    }
}

/// Resolved settings shared by every command
pub(crate) struct Settings {
    pub config: RosettaConfig,
    pub base_dir: PathBuf,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Self> {
        let base_dir = std::env::current_dir().context("Failed to read current directory")?;
        let mut config = config::load_config(cli.config.as_deref(), &base_dir)?;
        config.apply(&cli.overrides());
        config.validate()?;
        debug!("Effective config: {:?}", config);
        Ok(Self { config, base_dir })
    }

    pub fn profile_options(&self) -> ProfileOptions {
        self.config.profile_options()
    }

    pub fn load_corpora(&self) -> Result<CorpusSet> {
        let dir = self.config.corpora_dir(&self.base_dir);
        load_corpora(&dir, &self.profile_options())
    }
}

/// Read an input file, or stdin for `-`
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Init => init::run(&std::env::current_dir()?),

        Commands::Version => {
            println!("rosetta {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }

        Commands::Identify {
            inputs,
            format,
            scores,
        } => identify::run(&Settings::resolve(&cli)?, inputs, format, *scores),

        Commands::Rank { input, top, format } => {
            rank::run(&Settings::resolve(&cli)?, input, *top, format)
        }

        Commands::Profile { input, format } => {
            profile::run(&Settings::resolve(&cli)?, input, format)
        }

        Commands::Languages => languages::run(&Settings::resolve(&cli)?),
    }
}
