//! Stop-word source resolution

use crate::error::{Result, TagExtractorError};
use log::{debug, info};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the stop words for a run come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum StopWordSource {
    Explicit(PathBuf),
    Bundled(PathBuf),
}

impl StopWordSource {
    pub fn path(&self) -> &Path {
        match self {
            StopWordSource::Explicit(path) | StopWordSource::Bundled(path) => path,
        }
    }
}

impl fmt::Display for StopWordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopWordSource::Explicit(path) => write!(f, "{}", path.display()),
            StopWordSource::Bundled(path) => write!(f, "{} (bundled)", path.display()),
        }
    }
}

/// Pick the stop-word file for a run.
///
/// An explicit choice is always used as-is, even if it no longer exists; the
/// bundled list is only a fallback when nothing was chosen, and its absence
/// blocks extraction.
pub fn resolve_stop_words(explicit: Option<&Path>, bundled: &Path) -> Result<StopWordSource> {
    match explicit {
        Some(path) => {
            debug!("Using explicitly selected stop words: {}", path.display());
            Ok(StopWordSource::Explicit(path.to_path_buf()))
        }
        None if bundled.is_file() => {
            info!("No stop words file selected, using bundled list: {}", bundled.display());
            Ok(StopWordSource::Bundled(bundled.to_path_buf()))
        }
        None => Err(TagExtractorError::StopWordsUnavailable(bundled.to_path_buf())),
    }
}
