//! File classification
//!
//! Decides which files are eligible for printing and which of them are
//! headers or implementation files for pairing.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;

/// Role of an eligible file within a root-name group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileClass {
    Header,
    Implementation,
    Other,
}

/// Extension allow-list, case-insensitive
#[derive(Debug, Clone)]
pub struct FileClassifier {
    headers: HashSet<String>,
    implementations: HashSet<String>,
    others: HashSet<String>,
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FileClassifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            headers: lowercase_set(&config.header_extensions),
            implementations: lowercase_set(&config.implementation_extensions),
            others: lowercase_set(&config.extensions),
        }
    }

    /// Classify a file, or `None` if it is not eligible
    pub fn classify(&self, path: &Path) -> Option<FileClass> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();

        if self.headers.contains(&extension) {
            Some(FileClass::Header)
        } else if self.implementations.contains(&extension) {
            Some(FileClass::Implementation)
        } else if self.others.contains(&extension) {
            Some(FileClass::Other)
        } else {
            None
        }
    }
}

fn lowercase_set(extensions: &[String]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
        .collect()
}
