//! Tool configuration
//!
//! Optional `.print-order.json` next to where the tool runs. Every field has
//! a default, so an empty object (or no file at all) is a valid config. The
//! ordering rules themselves live in the separate line-oriented rule file,
//! see [`crate::rules`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default tool config file name
pub const CONFIG_FILE: &str = ".print-order.json";

/// Main tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Rule file path used when the CLI is not given one
    #[serde(default = "default_rules")]
    pub rules: PathBuf,

    /// Extensions classified as headers (without the dot)
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Extensions classified as implementation files
    #[serde(default = "default_implementation_extensions")]
    pub implementation_extensions: Vec<String>,

    /// Other extensions eligible for printing
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories to skip, glob syntax, relative to the ordering root
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Files to skip, glob syntax, relative to the ordering root
    #[serde(default)]
    pub exclude_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            header_extensions: default_header_extensions(),
            implementation_extensions: default_implementation_extensions(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn default_rules() -> PathBuf {
    PathBuf::from("config.txt")
}

fn default_header_extensions() -> Vec<String> {
    vec!["h".to_string(), "hpp".to_string()]
}

fn default_implementation_extensions() -> Vec<String> {
    vec!["c".to_string(), "cpp".to_string()]
}

fn default_extensions() -> Vec<String> {
    vec![
        "py".to_string(),
        "sh".to_string(),
        "txt".to_string(),
        "json".to_string(),
        "md".to_string(),
    ]
}

fn default_exclude_dirs() -> Vec<String> {
    vec![
        // VCS
        "**/.git".to_string(),
        // Cache/temp
        "**/__pycache__".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.rules, PathBuf::from("config.txt"));
        assert_eq!(config.header_extensions, vec!["h", "hpp"]);
        assert_eq!(config.implementation_extensions, vec!["c", "cpp"]);
        assert!(config.exclude_files.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "rules": "print/rules.txt",
            "excludeDirs": ["bin", "firmware"],
            "excludeFiles": ["include/api.h"]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.rules, PathBuf::from("print/rules.txt"));
        assert_eq!(config.exclude_dirs, vec!["bin", "firmware"]);
        assert_eq!(config.exclude_files, vec!["include/api.h"]);
        assert_eq!(config.extensions.len(), 5);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.exclude_files.push("license.html".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded.exclude_files, vec!["license.html"]);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config.rules, PathBuf::from("config.txt"));
    }
}
