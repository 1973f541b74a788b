//! Text processing module
//! Tokenization, stop-word filtering, frequency counting and the extraction pipeline

pub mod extractor;
pub mod pipeline;
pub mod tags;

pub use extractor::{extract_tags, extract_tags_from_path, TagExtractor};
pub use pipeline::{ExtractionRequest, ExtractionResult, TagPipeline};
pub use tags::TagFrequencyMap;
