//! Extraction pipeline: resolve stop words, load them, count tags

use crate::error::Result;
use crate::input::{load_stop_words_from_path, resolve_stop_words, StopWordSource};
use crate::processing::extractor::TagExtractor;
use crate::processing::tags::TagFrequencyMap;
use log::info;
use std::path::{Path, PathBuf};

/// Inputs for a single extraction run
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub document: PathBuf,
    /// Explicitly chosen stop-word file; `None` means "use the bundled list"
    pub stop_words: Option<PathBuf>,
}

impl ExtractionRequest {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            stop_words: None,
        }
    }

    pub fn with_stop_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words = Some(path.into());
        self
    }
}

/// Everything a front end needs to display or save a run
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub document_name: String,
    pub document_path: PathBuf,
    pub stop_word_source: StopWordSource,
    pub stop_word_count: usize,
    pub tags: TagFrequencyMap,
}

pub struct TagPipeline {
    bundled_stop_words: PathBuf,
    extractor: TagExtractor,
}

impl TagPipeline {
    pub fn new(bundled_stop_words: impl Into<PathBuf>) -> Self {
        Self {
            bundled_stop_words: bundled_stop_words.into(),
            extractor: TagExtractor::new(),
        }
    }

    pub fn run(&self, request: &ExtractionRequest) -> Result<ExtractionResult> {
        let source = resolve_stop_words(request.stop_words.as_deref(), &self.bundled_stop_words)?;
        let stops = load_stop_words_from_path(source.path())?;
        let tags = self.extractor.extract_from_path(&request.document, &stops)?;

        info!(
            "Extracted {} distinct tags ({} occurrences) using {} stop words",
            tags.len(),
            tags.total_occurrences(),
            stops.len()
        );

        Ok(ExtractionResult {
            document_name: document_name(&request.document),
            document_path: request.document.clone(),
            stop_word_source: source,
            stop_word_count: stops.len(),
            tags,
        })
    }
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
