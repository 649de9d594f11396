//! Multi-select dropdown over the fixed province list.

use dioxus::prelude::*;

use obcine_catalog::{RegionSelection, REGIONS};

/// Checkbox dropdown for filtering by province.
///
/// Every change reports the full selection, never a delta. The clear
/// button resets to "no filter" in one step.
#[component]
pub fn RegionSelect(selected: RegionSelection, on_change: EventHandler<RegionSelection>) -> Element {
    let mut open = use_signal(|| false);

    let summary = if selected.is_empty() {
        "Vse pokrajine".to_string()
    } else {
        selected.summary()
    };

    rsx! {
        div { class: "region-select",
            button {
                class: "region-toggle",
                onclick: move |_| {
                    let was_open = open();
                    open.set(!was_open);
                },
                span { class: "region-summary", "{summary}" }
                span { class: "region-caret",
                    if open() { "\u{25b4}" } else { "\u{25be}" }
                }
            }
            button {
                class: "region-clear",
                title: "Počisti izbiro",
                onclick: move |_| on_change.call(RegionSelection::new()),
                "\u{2715}"
            }

            if open() {
                // Backdrop to close the menu on outside click
                div {
                    class: "region-backdrop",
                    onclick: move |_| open.set(false),
                }

                div { class: "region-menu",
                    for region in REGIONS {
                        RegionOption {
                            key: "{region}",
                            region,
                            checked: selected.contains(region),
                            selected: selected.clone(),
                            on_toggle: move |next| on_change.call(next),
                        }
                    }
                }
            }
        }
    }
}

/// One checkbox row in the dropdown.
///
/// Toggling reports the full updated selection back to the parent.
#[component]
fn RegionOption(
    region: &'static str,
    checked: bool,
    selected: RegionSelection,
    on_toggle: EventHandler<RegionSelection>,
) -> Element {
    rsx! {
        label { class: "region-option",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |_| {
                    let mut next = selected.clone();
                    next.toggle(region);
                    on_toggle.call(next);
                },
            }
            span { "{region}" }
        }
    }
}
