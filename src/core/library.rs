//! Library listing loaded from the embedded library table.

use serde::Deserialize;

use crate::config::LIBRARY_TABLE;
use crate::core::error::ConfigError;
use crate::models::FileTarget;

#[derive(Debug, Deserialize)]
struct LibraryTable {
    #[serde(default)]
    file: Vec<LibraryEntry>,
}

#[derive(Debug, Deserialize)]
struct LibraryEntry {
    path: String,
}

/// Files listed by the embedded library table.
pub fn builtin_library() -> Result<Vec<FileTarget>, ConfigError> {
    parse_library(LIBRARY_TABLE)
}

/// Parse a library table into file targets, in listing order.
pub fn parse_library(source: &str) -> Result<Vec<FileTarget>, ConfigError> {
    let table: LibraryTable = toml::from_str(source).map_err(|e| ConfigError::Parse {
        table: "library",
        message: e.message().to_string(),
    })?;

    Ok(table
        .file
        .iter()
        .map(|entry| FileTarget::from_path(&entry.path))
        .filter(|target| !target.is_empty())
        .collect())
}

/// Group targets by their listing path, keeping first-seen order.
pub fn group_by_source(files: &[FileTarget]) -> Vec<(String, Vec<FileTarget>)> {
    let mut groups: Vec<(String, Vec<FileTarget>)> = Vec::new();
    for file in files {
        match groups.iter_mut().find(|(source, _)| source == file.source()) {
            Some((_, members)) => members.push(file.clone()),
            None => groups.push((file.source().to_string(), vec![file.clone()])),
        }
    }
    groups
}
