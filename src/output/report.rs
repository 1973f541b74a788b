//! Report structures built from an extraction run

use crate::input::StopWordSource;
use crate::processing::ExtractionResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    pub metadata: ReportMetadata,
    pub summary: TagSummary,
    /// Ordered lexicographically by tag
    pub tags: Vec<TagEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub document_name: String,
    pub document_path: String,
    pub stop_words: StopWordSource,
    pub stop_word_count: usize,
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagSummary {
    pub distinct_tags: usize,
    pub total_occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub tag: String,
    pub frequency: usize,
}

impl TagReport {
    pub fn from_result(result: &ExtractionResult) -> Self {
        let tags = result
            .tags
            .iter()
            .map(|(tag, frequency)| TagEntry {
                tag: tag.to_string(),
                frequency,
            })
            .collect();

        Self {
            metadata: ReportMetadata {
                document_name: result.document_name.clone(),
                document_path: result.document_path.display().to_string(),
                stop_words: result.stop_word_source.clone(),
                stop_word_count: result.stop_word_count,
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: TagSummary {
                distinct_tags: result.tags.len(),
                total_occurrences: result.tags.total_occurrences(),
            },
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
