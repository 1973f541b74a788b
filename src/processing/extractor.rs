//! Tag extraction: tokenization, stop-word filtering and counting

use crate::error::{Result, TagExtractorError};
use crate::input::StopWords;
use crate::processing::tags::TagFrequencyMap;
use log::{debug, info};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct TagExtractor {
    non_letter_regex: Regex,
}

impl Default for TagExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TagExtractor {
    pub fn new() -> Self {
        let non_letter_regex = Regex::new(r"[^A-Za-z]+").expect("Invalid non-letter regex");
        Self { non_letter_regex }
    }

    /// Replace everything but ASCII letters with whitespace and lowercase the rest
    pub fn clean_line(&self, line: &str) -> String {
        self.non_letter_regex
            .replace_all(line, " ")
            .to_ascii_lowercase()
    }

    /// Count every non-stop-word token of `source`, one line at a time.
    ///
    /// A read failure discards everything counted so far.
    pub fn extract<R: BufRead>(&self, source: R, stops: &StopWords) -> Result<TagFrequencyMap> {
        let mut tags = TagFrequencyMap::new();
        let mut lines_read = 0usize;
        let mut skipped = 0usize;

        for line in source.lines() {
            let line = line?;
            lines_read += 1;

            let cleaned = self.clean_line(&line);
            for token in cleaned.split_whitespace() {
                if stops.contains(token) {
                    skipped += 1;
                    continue;
                }
                tags.record(token);
            }
        }

        debug!(
            "Read {} lines: {} distinct tags, {} stop word occurrences skipped",
            lines_read,
            tags.len(),
            skipped
        );
        Ok(tags)
    }

    pub fn extract_from_path(&self, path: &Path, stops: &StopWords) -> Result<TagFrequencyMap> {
        info!("Extracting tags from: {}", path.display());
        let file = File::open(path).map_err(|e| TagExtractorError::io_at(path, e))?;
        self.extract(BufReader::new(file), stops).map_err(|e| match e {
            TagExtractorError::Io(err) => TagExtractorError::io_at(path, err),
            other => other,
        })
    }
}

/// Extract tags from a reader with a fresh extractor
pub fn extract_tags<R: BufRead>(source: R, stops: &StopWords) -> Result<TagFrequencyMap> {
    TagExtractor::new().extract(source, stops)
}

pub fn extract_tags_from_path(path: &Path, stops: &StopWords) -> Result<TagFrequencyMap> {
    TagExtractor::new().extract_from_path(path, stops)
}
