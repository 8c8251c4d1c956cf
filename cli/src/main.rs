//! # balti CLI
//!
//! Command-line front end for the Balti-English dictionary search core.
//!
//! ## Usage
//!
//! - `balti` - Start interactive mode
//! - `balti search <query> [--fuzzy] [--category C]...` - Run a single search
//! - `balti suggest [input] [--category C] [--count N]` - Show suggestions
//!
//! The CLI plays the role of the calling layer: it resolves configuration,
//! loads dictionary entries and turns command-line arguments into queries.

use anyhow::Result;
use balti_core::FilterKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod dictionary;
mod output;

use commands::{interactive_command, search_command, suggest_command, SearchArgs, SuggestArgs};
use config::CliConfigLoader;

/// balti - Search the community Balti-English dictionary
#[derive(Parser)]
#[command(name = "balti")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search the community Balti-English dictionary")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dictionary file (JSON array of entries)
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Fuzzy match threshold override (0.0 to 1.0)
    #[arg(long)]
    threshold: Option<f64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    /// Working directory
    #[arg(long)]
    working_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the dictionary
    Search {
        /// Text to search for (may be empty to list by filters)
        #[arg(default_value = "")]
        query: String,

        /// Rank by edit distance instead of substring matching
        #[arg(long)]
        fuzzy: bool,

        /// Restrict to a category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Restrict to a dialect (repeatable)
        #[arg(long = "dialect")]
        dialects: Vec<String>,

        /// Restrict to a difficulty level (repeatable)
        #[arg(long)]
        difficulty: Vec<String>,

        /// Restrict to a tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show search suggestions
    Suggest {
        /// Partial input to match against suggestions
        input: Option<String>,

        /// Only suggestions in this category
        #[arg(long)]
        category: Option<String>,

        /// Number of random suggestions for blank input
        #[arg(long)]
        count: Option<usize>,

        /// Seed for random sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(dictionary) = &cli.dictionary {
        loader = loader.with_dictionary_override(dictionary.clone());
    }

    if let Some(threshold) = cli.threshold {
        loader = loader.with_threshold_override(threshold);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    balti_core::init_tracing_with_debug(cli.verbose || cli.debug_output);

    // Change working directory if specified
    if let Some(working_dir) = &cli.working_dir {
        std::env::set_current_dir(working_dir)?;
    }

    // Build configuration loader
    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Search {
            query,
            fuzzy,
            categories,
            dialects,
            difficulty,
            tags,
            json,
        }) => {
            let args = SearchArgs {
                query,
                fuzzy,
                filters: vec![
                    (FilterKind::Categories, categories),
                    (FilterKind::Dialects, dialects),
                    (FilterKind::Difficulty, difficulty),
                    (FilterKind::Tags, tags),
                ],
                json,
            };
            search_command(args, config_loader).await
        }
        Some(Commands::Suggest {
            input,
            category,
            count,
            seed,
            json,
        }) => {
            suggest_command(SuggestArgs {
                input,
                category,
                count,
                seed,
                json,
            })
            .await
        }
        // Default to interactive mode
        None => interactive_command(config_loader).await,
    }
}
