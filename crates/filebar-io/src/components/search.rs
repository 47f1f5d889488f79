//! Search input bound to an externally owned string.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdSearch, LdX};

/// Props for the [`SearchInput`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SearchInputProps {
    /// Current search string. The input always displays exactly this.
    value: String,
    /// Placeholder shown while the value is empty.
    placeholder: String,
    /// Input width in CSS pixels.
    width_px: u32,
    /// Called with the new value on every keystroke, and with an empty
    /// string when the clear button is pressed.
    on_change: EventHandler<String>,
}

/// Text input with a clear button and a trailing search icon.
///
/// Holds no state of its own: each edit is forwarded immediately and the
/// displayed value comes back through `value`.
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let on_change = props.on_change;
    let has_value = !props.value.is_empty();

    rsx! {
        div { class: "fb-search", style: "width: {props.width_px}px",
            input {
                r#type: "text",
                class: "fb-search-input",
                placeholder: "{props.placeholder}",
                aria_label: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |evt: FormEvent| on_change.call(evt.value()),
            }
            if has_value {
                button {
                    class: "fb-search-clear",
                    r#type: "button",
                    aria_label: "Clear search",
                    onclick: move |_| on_change.call(String::new()),
                    Icon { width: 12, height: 12, icon: LdX }
                }
            }
            span { class: "fb-search-icon",
                Icon { width: 14, height: 14, icon: LdSearch }
            }
        }
    }
}
