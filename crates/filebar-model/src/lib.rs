//! filebar-model: Pure toolbar model for the file manager (sans-IO).
//!
//! Everything the toolbar decides without touching the DOM lives here:
//!
//! - knowledge-base detection from the parent folder chain
//! - breadcrumb items and which segments are clickable
//! - the static add/bulk menu tables and how a chosen entry resolves
//!   against the current selection
//! - translation tables keyed by `prefix.key`
//!
//! This crate has **no I/O dependencies**. Browser rendering and the
//! collaborator hooks live in `filebar-io`.

pub mod breadcrumb;
pub mod i18n;
pub mod menu;
pub mod snapshot;
pub mod toolbar;
pub mod types;

pub use breadcrumb::{BreadcrumbSegment, items_from_folders, segments};
pub use i18n::{I18nError, Locale, ScopedTranslator, TranslationKey, Translator};
pub use menu::{ADD_MENU, BULK_MENU, MenuAction, MenuEntry, MenuIcon, MenuItem, MenuRow, menu_rows};
pub use snapshot::{Snapshot, SnapshotError};
pub use toolbar::{
    DeleteStep, KEY_PREFIX, SegmentView, ToolbarCommand, ToolbarText, ToolbarView, bulk_disabled,
    delete_plan, is_knowledge_base, resolve,
};
pub use types::{BreadcrumbItem, ParentFolder, SourceType, ToolbarConfig, TriggerMode};
