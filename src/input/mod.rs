//! Input handling
//! Stop-word list loading and stop-word source resolution

pub mod resolver;
pub mod stop_words;

pub use resolver::{resolve_stop_words, StopWordSource};
pub use stop_words::{load_stop_words, load_stop_words_from_path, StopWords};
