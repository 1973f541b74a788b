//! Stop-word list loading

use crate::error::{Result, TagExtractorError};
use log::{debug, info};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lowercased, trimmed stop-word entries
///
/// An entry is a whole line of the source list, so multi-word phrases are
/// kept as a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    fn insert_line(&mut self, line: &str) {
        let entry = line.trim_matches(|c: char| c <= ' ').to_lowercase();
        if !entry.is_empty() {
            self.words.insert(entry);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stops = StopWords::empty();
        for line in iter {
            stops.insert_line(line.as_ref());
        }
        stops
    }
}

/// Read a newline-delimited stop-word list.
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Fails on the first read
/// error; nothing is returned in that case.
pub fn load_stop_words<R: BufRead>(source: R) -> Result<StopWords> {
    let mut stops = StopWords::empty();
    for line in source.lines() {
        for entry in line?.split('\r') {
            stops.insert_line(entry);
        }
    }
    debug!("Loaded {} stop words", stops.len());
    Ok(stops)
}

pub fn load_stop_words_from_path(path: &Path) -> Result<StopWords> {
    info!("Reading stop words file: {}", path.display());
    let file = File::open(path).map_err(|e| TagExtractorError::io_at(path, e))?;
    load_stop_words(BufReader::new(file)).map_err(|e| match e {
        TagExtractorError::Io(err) => TagExtractorError::io_at(path, err),
        other => other,
    })
}
