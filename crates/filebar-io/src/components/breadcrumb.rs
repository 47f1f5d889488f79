//! Breadcrumb trail for the current folder.

use dioxus::prelude::*;
use filebar_model::SegmentView;

/// Props for the [`Breadcrumb`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BreadcrumbProps {
    /// Path segments, root first.
    segments: Vec<SegmentView>,
    /// Called with a segment's path when a clickable segment is activated.
    on_navigate: EventHandler<String>,
}

/// Breadcrumb trail.
///
/// The folder being viewed renders as plain text; every clickable
/// segment is a button, so it activates from the keyboard as well as the
/// pointer.
#[component]
pub fn Breadcrumb(props: BreadcrumbProps) -> Element {
    rsx! {
        nav { class: "fb-breadcrumb", aria_label: "Breadcrumb",
            ol { class: "fb-breadcrumb-list",
                for (index, segment) in props.segments.iter().enumerate() {
                    {render_segment(index, segment, props.on_navigate)}
                }
            }
        }
    }
}

fn render_segment(
    index: usize,
    segment: &SegmentView,
    on_navigate: EventHandler<String>,
) -> Element {
    let path = segment.path.clone();

    rsx! {
        li { key: "{index}", class: "fb-breadcrumb-item",
            if index > 0 {
                span { class: "fb-breadcrumb-separator", "aria-hidden": "true", "/" }
            }
            if segment.clickable {
                button {
                    class: "fb-breadcrumb-link",
                    r#type: "button",
                    onclick: move |_| on_navigate.call(path.clone()),
                    "{segment.title}"
                }
            } else {
                span { class: "fb-breadcrumb-current", "aria-current": "page", "{segment.title}" }
            }
        }
    }
}
