//! Configuration module for the search core
//!
//! Only exports data types and a JSON loader. Discovery and merging of
//! config sources happens in the CLI layer.

pub mod settings;

pub use settings::{CacheSettings, SearchSettings};
