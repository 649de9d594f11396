use dioxus::prelude::*;

use crate::theme::ThemeSwitcher;

pub mod municipality_card;
pub mod region_select;

pub use municipality_card::MunicipalityCard;
pub use region_select::RegionSelect;

/// Header with the page title and theme switcher
#[component]
pub fn Header() -> Element {
    rsx! {
        div { class: "header",
            h1 { class: "page-title", "Slovenske občine" }
            ThemeSwitcher {}
        }
    }
}

/// Search input bound to the raw (pre-debounce) search term.
///
/// Emits every keystroke; the debounce lives with the consumer. The fixed
/// element id is the focus target of the Ctrl+F shortcut.
#[component]
pub fn SearchBar(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div { class: "search-bar",
            input {
                id: "municipality-search",
                class: "search-input",
                r#type: "text",
                placeholder: "Filtriraj občine\u{2026}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            span { class: "search-hint", "Ctrl+F" }
        }
    }
}

/// Placeholder grid shown while the dataset is loading
#[component]
pub fn LoadingGrid() -> Element {
    rsx! {
        div { class: "card-grid",
            for i in 0..12 {
                div { key: "{i}", class: "card skeleton-card",
                    div { class: "skeleton skeleton-title" }
                    div { class: "skeleton skeleton-badge" }
                    for line in 0..5 {
                        div { key: "{line}", class: "skeleton skeleton-line" }
                    }
                }
            }
        }
    }
}

/// Blocking full-page panel shown when the dataset failed to load.
///
/// Dataset failure is fatal to the page's primary content; no partial data
/// is shown and the only recovery is restarting the viewer.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "error-panel",
            div { class: "error-title", "Napaka pri nalaganju" }
            p { class: "error-message", "{message}" }
            p { class: "error-hint",
                "Preveri vir podatkov in ponovno zaženi pregledovalnik."
            }
        }
    }
}

/// Count summary with Slovenian pluralization (dual included).
pub fn count_label(count: usize) -> String {
    let noun = match count % 100 {
        1 => "občina",
        2 => "občini",
        3 | 4 => "občine",
        _ => "občin",
    };
    format!("{count} {noun}")
}
