//! In-memory folder tree backing the demo file manager.
//!
//! Loaded from an embedded JSON fixture. The demo edits it in place when
//! files are deleted, moved, or added; nothing is persisted.

use std::collections::HashSet;

use filebar_model::{ParentFolder, SourceType};
use serde::Deserialize;

/// Identifier of the folder shown on startup.
pub const ROOT_ID: &str = "root";

/// Errors that can occur when loading the fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture is not valid JSON or does not match the schema.
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// No folder has the root identifier.
    #[error("fixture has no folder with id {ROOT_ID:?}")]
    MissingRoot,
}

/// A file row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub folder_id: String,
    #[serde(default)]
    pub size: u64,
}

/// Folders and files of the demo tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fixture {
    pub folders: Vec<ParentFolder>,
    pub files: Vec<FileEntry>,
}

impl Fixture {
    /// Load the fixture bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the bundled JSON is malformed or has
    /// no root folder.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(include_str!("../assets/demo.json"))
    }

    /// Parse a fixture from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Parse`] for malformed JSON and
    /// [`FixtureError::MissingRoot`] when no folder has id [`ROOT_ID`].
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixture: Self = serde_json::from_str(json)?;
        if !fixture.folders.iter().any(|f| f.id == ROOT_ID) {
            return Err(FixtureError::MissingRoot);
        }
        Ok(fixture)
    }
}

/// Ancestor chain of `current`, root first, ending with `current` itself.
///
/// Walking stops at a folder without a parent, at a dangling parent id,
/// or on revisiting a folder. Returns an empty chain if `current` is
/// unknown.
#[must_use]
pub fn parent_chain(folders: &[ParentFolder], current: &str) -> Vec<ParentFolder> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut next = Some(current);
    while let Some(id) = next {
        if !seen.insert(id) {
            break;
        }
        let Some(folder) = folders.iter().find(|f| f.id == id) else {
            break;
        };
        chain.push(folder.clone());
        next = folder.parent_id.as_deref();
    }
    chain.reverse();
    chain
}

/// Direct subfolders of `folder_id`.
#[must_use]
pub fn subfolders<'a>(folders: &'a [ParentFolder], folder_id: &str) -> Vec<&'a ParentFolder> {
    folders
        .iter()
        .filter(|f| f.parent_id.as_deref() == Some(folder_id))
        .collect()
}

/// Files directly in `folder_id` whose name contains `search`, ignoring case.
#[must_use]
pub fn visible_files<'a>(
    files: &'a [FileEntry],
    folder_id: &str,
    search: &str,
) -> Vec<&'a FileEntry> {
    let needle = search.trim().to_lowercase();
    files
        .iter()
        .filter(|f| f.folder_id == folder_id)
        .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
        .collect()
}

/// Folders that can receive moved files. Knowledge-base folders are
/// managed elsewhere and are never a move target.
#[must_use]
pub fn move_targets(folders: &[ParentFolder]) -> Vec<&ParentFolder> {
    folders
        .iter()
        .filter(|f| f.source_type != SourceType::KnowledgeBase)
        .collect()
}

/// Identifier not yet used by any id in `existing`.
#[must_use]
pub fn fresh_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    (1u32..)
        .map(|n| format!("{prefix}-{n}"))
        .find(|candidate| !existing.clone().any(|id| id == candidate))
        .unwrap_or_else(|| prefix.to_owned())
}

/// Human-readable file size.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn folder(id: &str, parent: Option<&str>) -> ParentFolder {
        ParentFolder {
            id: id.to_owned(),
            name: id.to_owned(),
            parent_id: parent.map(str::to_owned),
            source_type: SourceType::Local,
        }
    }

    #[test]
    fn embedded_fixture_loads() {
        let fixture = Fixture::embedded().unwrap();
        assert!(fixture.folders.iter().any(|f| f.source_type == SourceType::KnowledgeBase));
        assert!(!fixture.files.is_empty());
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = Fixture::from_json(r#"{"folders":[],"files":[]}"#).unwrap_err();
        assert!(matches!(err, FixtureError::MissingRoot));
    }

    #[test]
    fn chain_is_root_first() {
        let folders = vec![folder("root", None), folder("a", Some("root")), folder("b", Some("a"))];
        let ids: Vec<_> = parent_chain(&folders, "b").into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["root", "a", "b"]);
    }

    #[test]
    fn chain_survives_cycles_and_unknown_ids() {
        let folders = vec![folder("a", Some("b")), folder("b", Some("a"))];
        assert_eq!(parent_chain(&folders, "a").len(), 2);
        assert!(parent_chain(&folders, "missing").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let fixture = Fixture::embedded().unwrap();
        let names: Vec<_> = visible_files(&fixture.files, "q3", "SALES")
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["sales-q3.csv"]);
        assert_eq!(visible_files(&fixture.files, "q3", "  ").len(), 2);
    }

    #[test]
    fn knowledge_bases_are_not_move_targets() {
        let fixture = Fixture::embedded().unwrap();
        let targets = move_targets(&fixture.folders);
        assert!(!targets.is_empty());
        assert!(
            targets
                .iter()
                .all(|f| f.source_type != SourceType::KnowledgeBase)
        );
    }

    #[test]
    fn fresh_id_skips_taken() {
        let taken = ["file-1", "file-2"];
        assert_eq!(fresh_id("file", taken.iter().copied()), "file-3");
    }

    #[test]
    fn sizes_are_humanized() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1_203_311), "1.1 MB");
    }
}
