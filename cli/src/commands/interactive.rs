//! Interactive search loop
//!
//! Reads one query per line from stdin and answers it through a single
//! long-lived cache with its sweeper running, so repeated queries are served
//! from memory until they expire.
//!
//! Line syntax:
//! - `word` plain substring search
//! - `~word` fuzzy search
//! - `?text` suggestions for partial input
//! - `:stats`, `:clear`, `:quit`

use crate::config::CliConfigLoader;
use crate::dictionary::Dictionary;
use crate::output::{print_entries, print_stats, print_suggestions};
use anyhow::Result;
use balti_core::search::suggestions::{filter_by_input, SUGGESTIONS};
use balti_core::{CacheKey, DictionaryEntry, DictionarySearch};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(CacheKey),
    Suggest(String),
    Stats,
    Clear,
    Quit,
    Help,
    Empty,
}

/// Parse one line of interactive input
pub fn parse_line(line: &str) -> Command {
    let line = line.trim();

    match line {
        "" => Command::Empty,
        ":stats" => Command::Stats,
        ":clear" => Command::Clear,
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":help" => Command::Help,
        _ => {
            if let Some(input) = line.strip_prefix('?') {
                Command::Suggest(input.to_string())
            } else if let Some(query) = line.strip_prefix('~') {
                Command::Search(CacheKey::new(query.trim()).with_fuzzy(true))
            } else {
                Command::Search(CacheKey::new(line))
            }
        }
    }
}

/// Run the interactive loop until EOF or `:quit`
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let dictionary = Dictionary::load_or_sample(config.dictionary.as_deref()).await?;
    if let Some(source) = &config.source {
        info!("Using configuration from {}", source.display());
    }
    if dictionary.is_empty() {
        warn!("Dictionary is empty, every search will come back empty");
    }
    info!("Interactive mode over {} entries", dictionary.len());

    let search: DictionarySearch<DictionaryEntry> = DictionarySearch::create(config.settings);

    println!("🏔️  Balti dictionary. Type a word, ~word for fuzzy, :help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("balti> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Command::Search(key) => {
                let outcome = search.search(&key, &dictionary);
                print_entries(&outcome.results, outcome.cache_hit);
            }
            Command::Suggest(input) => print_suggestions(&filter_by_input(&input, SUGGESTIONS)),
            Command::Stats => print_stats(&search.cache().stats()),
            Command::Clear => {
                search.invalidate_all();
                println!("🧹 Cache cleared");
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Empty => {}
        }
    }

    search.destroy();
    println!();
    Ok(())
}

fn print_help() {
    println!("  word      substring search on word and translation");
    println!("  ~word     fuzzy search");
    println!("  ?text     suggestions (blank for random picks)");
    println!("  :stats    show cached queries");
    println!("  :clear    drop all cached results");
    println!("  :quit     exit");
}
