//! filebar-io: Browser-facing Dioxus components for the filebar toolbar.
//!
//! Renders the breadcrumb, search input, and the bulk/add dropdowns,
//! and exposes the hooks through which the toolbar reaches its
//! collaborators (parent folder list, navigation, deletion, translation).
//! All decisions are delegated to `filebar-model`.

pub mod components;
pub mod console;
pub mod context;
pub mod hooks;

pub use components::{Breadcrumb, Dropdown, FileToolbar, SearchInput};
pub use context::FileManagerContext;
