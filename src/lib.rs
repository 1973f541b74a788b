//! Tag extractor library
//!
//! Loads a stop-word list, counts the remaining words of a document and
//! renders the resulting tag frequencies.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, TagExtractorError};
pub use input::{load_stop_words, load_stop_words_from_path, StopWords};
pub use processing::{extract_tags, extract_tags_from_path, TagFrequencyMap};
