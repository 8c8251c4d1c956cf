//! CLI command implementations

pub mod interactive;
pub mod search;
pub mod suggest;

pub use interactive::interactive_command;
pub use search::{search_command, SearchArgs};
pub use suggest::{suggest_command, SuggestArgs};
