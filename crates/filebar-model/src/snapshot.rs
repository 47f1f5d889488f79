//! Serialized collaborator data for offline inspection.

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::toolbar::ToolbarView;
use crate::types::ParentFolder;

/// Errors that can occur when loading a [`Snapshot`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not match the schema.
    #[error("invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the toolbar reads from its collaborators at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Ancestor chain of the current folder, root first.
    pub parent_folders: Vec<ParentFolder>,
    /// Selected row identifiers, in selection order.
    pub selection: Vec<String>,
    /// Current search string.
    pub search: String,
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if `json` does not describe a snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Derive the toolbar view for this snapshot.
    #[must_use]
    pub fn view(&self, translator: &Translator) -> ToolbarView {
        ToolbarView::derive(
            &self.parent_folders,
            &self.selection,
            &self.search,
            translator,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::SourceType;

    #[test]
    fn missing_fields_default_to_empty() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn parses_full_snapshot() {
        let snapshot = Snapshot::from_json(
            r#"{
                "parent_folders": [
                    {"id": "r", "name": "/"},
                    {"id": "kb", "name": "Manuals", "parent_id": "r", "source_type": "knowledgebase"}
                ],
                "selection": ["f1"],
                "search": "pdf"
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.parent_folders.len(), 2);
        assert_eq!(
            snapshot.parent_folders[1].source_type,
            SourceType::KnowledgeBase
        );
        assert_eq!(snapshot.selection, vec!["f1".to_owned()]);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = Snapshot::from_json(r#"{"selection": "f1"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid snapshot"), "{err}");
    }
}
