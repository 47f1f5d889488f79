//! Dropdown menu driven by a static menu table.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use filebar_model::{MenuAction, MenuRow, TriggerMode};

use super::icons::menu_icon;

/// Props for the [`Dropdown`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropdownProps {
    /// Menu rows, in display order.
    rows: Vec<MenuRow>,
    /// How the popup opens.
    trigger: TriggerMode,
    /// When `true` the trigger is greyed out and the popup never opens.
    #[props(default)]
    disabled: bool,
    /// Render the trigger as a primary (filled) button.
    #[props(default)]
    primary: bool,
    /// Render item labels in bold.
    #[props(default)]
    bold_labels: bool,
    /// Called with the action of the chosen row.
    on_select: EventHandler<MenuAction>,
    /// Trigger button content.
    children: Element,
}

/// Button that reveals a menu of actions.
///
/// The popup closes as soon as a row is chosen.
#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut open = use_signal(|| false);
    let disabled = props.disabled;
    let trigger = props.trigger;
    let on_select = props.on_select;

    // A trigger that becomes disabled while open must not leave the
    // popup showing.
    let is_open = open() && !disabled;

    let trigger_class = match (disabled, props.primary) {
        (true, _) => "fb-button fb-button-disabled",
        (false, true) => "fb-button fb-button-primary",
        (false, false) => "fb-button",
    };
    let label_class = if props.bold_labels {
        "fb-menu-label fb-menu-label-bold"
    } else {
        "fb-menu-label"
    };

    rsx! {
        div {
            class: "fb-dropdown",
            onmouseenter: move |_| {
                if trigger == TriggerMode::Hover && !disabled {
                    open.set(true);
                }
            },
            onmouseleave: move |_| {
                if trigger == TriggerMode::Hover {
                    open.set(false);
                }
            },

            button {
                class: "{trigger_class}",
                r#type: "button",
                disabled: disabled,
                "aria-haspopup": "menu",
                "aria-expanded": "{is_open}",
                onclick: move |_| {
                    if trigger == TriggerMode::Click && !disabled {
                        let was_open = open();
                        open.set(!was_open);
                    }
                },
                {props.children}
                if !props.primary {
                    Icon { width: 12, height: 12, icon: LdChevronDown }
                }
            }

            if is_open {
                ul { class: "fb-menu", role: "menu",
                    for (index, row) in props.rows.iter().enumerate() {
                        {match row {
                            MenuRow::Item { item, label } => {
                                let action = item.action;
                                rsx! {
                                    li {
                                        key: "{item.key}",
                                        class: "fb-menu-item",
                                        role: "menuitem",
                                        onclick: move |_| {
                                            open.set(false);
                                            on_select.call(action);
                                        },
                                        span { class: "fb-menu-icon", {menu_icon(item.icon)} }
                                        span { class: "{label_class}", "{label}" }
                                    }
                                }
                            }
                            MenuRow::Divider => rsx! {
                                li {
                                    key: "divider-{index}",
                                    class: "fb-menu-divider",
                                    role: "separator",
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
