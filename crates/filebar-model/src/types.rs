//! Shared types for the filebar toolbar model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a folder's contents come from.
///
/// Serialized as a lowercase string. Unrecognized values are preserved
/// verbatim in [`SourceType::Other`] so a snapshot round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    /// Ordinary user folder.
    #[default]
    Local,
    /// Folder mirroring a knowledge base. Generic file actions are hidden.
    KnowledgeBase,
    /// Any other source tag.
    Other(String),
}

impl SourceType {
    /// Wire value for [`SourceType::KnowledgeBase`].
    pub const KNOWLEDGE_BASE: &'static str = "knowledgebase";
    /// Wire value for [`SourceType::Local`].
    pub const LOCAL: &'static str = "local";

    /// The wire string for this source type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local => Self::LOCAL,
            Self::KnowledgeBase => Self::KNOWLEDGE_BASE,
            Self::Other(s) => s,
        }
    }
}

impl From<String> for SourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::LOCAL => Self::Local,
            Self::KNOWLEDGE_BASE => Self::KnowledgeBase,
            _ => Self::Other(value),
        }
    }
}

impl From<SourceType> for String {
    fn from(value: SourceType) -> Self {
        match value {
            SourceType::Other(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ancestor folder of the folder currently being viewed.
///
/// The parent folder list is ordered root first; its last entry is the
/// current folder itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentFolder {
    /// Folder identifier.
    pub id: String,
    /// Display name. The root folder is named `/`.
    pub name: String,
    /// Identifier of the containing folder, `None` at the root.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Where the folder's contents come from.
    #[serde(default)]
    pub source_type: SourceType,
}

/// One segment of the breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Text shown for the segment.
    pub title: String,
    /// Navigation target passed to the breadcrumb click handler.
    pub path: String,
}

impl BreadcrumbItem {
    /// Create a new breadcrumb item.
    #[must_use]
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// How a dropdown menu opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Open while the pointer is over the trigger or the popup.
    #[default]
    Hover,
    /// Toggle on click.
    Click,
}

/// Presentation settings for the toolbar.
///
/// None of these change which actions are offered; they only affect how
/// the toolbar looks. Label language follows the translator supplied by
/// the surrounding file manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Width of the search input in CSS pixels.
    pub search_width_px: u32,
    /// How the bulk action dropdown opens.
    pub bulk_trigger: TriggerMode,
    /// How the add-file dropdown opens.
    pub add_trigger: TriggerMode,
}

impl ToolbarConfig {
    /// Default search input width.
    pub const DEFAULT_SEARCH_WIDTH_PX: u32 = 220;
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            search_width_px: Self::DEFAULT_SEARCH_WIDTH_PX,
            bulk_trigger: TriggerMode::Hover,
            add_trigger: TriggerMode::Click,
        }
    }
}
