//! Dioxus UI components for filebar.
//!
//! Provides the breadcrumb trail, a generic dropdown menu, the search
//! input, and the [`FileToolbar`] that composes them.

mod breadcrumb;
mod dropdown;
mod icons;
mod search;
mod toolbar;

pub use breadcrumb::Breadcrumb;
pub use dropdown::Dropdown;
pub use search::SearchInput;
pub use toolbar::FileToolbar;
