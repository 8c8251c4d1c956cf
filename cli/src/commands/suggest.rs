//! Suggestion command

use crate::output::print_suggestions;
use anyhow::Result;
use balti_core::search::suggestions::{
    by_category, filter_by_input_with, random_suggestions_with, SearchSuggestion, SUGGESTIONS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Parameters for the suggestion command
#[derive(Debug, Clone, Default)]
pub struct SuggestArgs {
    pub input: Option<String>,
    pub category: Option<String>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

/// Pick suggestions for the given arguments
pub fn pick_suggestions(args: &SuggestArgs) -> Vec<&'static SearchSuggestion> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input = args.input.as_deref().unwrap_or("");

    if let Some(category) = &args.category {
        by_category(category, SUGGESTIONS)
    } else if let (true, Some(count)) = (input.trim().is_empty(), args.count) {
        random_suggestions_with(count, SUGGESTIONS, &mut rng)
    } else {
        filter_by_input_with(input, SUGGESTIONS, &mut rng)
    }
}

/// Print suggestions for an optional partial input
pub async fn suggest_command(args: SuggestArgs) -> Result<()> {
    info!("Listing suggestions");

    let suggestions = pick_suggestions(&args);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print_suggestions(&suggestions);
    }

    Ok(())
}
