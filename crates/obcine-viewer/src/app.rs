//! Root application component.

use std::sync::OnceLock;
use std::time::Duration;

use dioxus::prelude::Key;
use dioxus::prelude::*;
use tokio::sync::mpsc;

use obcine_catalog::{
    debounce_channel, fetch_dataset, filter_municipalities, DatasetState, Municipality,
    RegionSelection,
};

use crate::components::{
    count_label, ErrorPanel, Header, LoadingGrid, MunicipalityCard, RegionSelect, SearchBar,
};
use crate::theme::CURRENT_THEME;

/// Quiet interval before a typed search term is applied.
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Base URL for the dataset and emblem resources, set once at startup.
pub static DATA_URL: OnceLock<String> = OnceLock::new();

/// Resolved base URL, without a trailing slash.
pub fn data_url() -> String {
    DATA_URL
        .get()
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}

/// Root App component for the municipality catalogue.
///
/// Wires the dataset loader through the filter pipeline into rendered
/// cards: a one-shot fetch on mount, debounced search input, and a
/// multi-select province filter. The display list is always a subsequence
/// of the loaded dataset; filtering never reorders it.
#[component]
pub fn App() -> Element {
    let mut dataset = use_signal(|| DatasetState::Idle);
    let mut search_entry = use_signal(String::new);
    let mut debounced_search = use_signal(String::new);
    let mut selected_regions = use_signal(RegionSelection::new);
    let mut search_tx = use_signal(|| None::<mpsc::UnboundedSender<String>>);

    // One-shot dataset fetch. The state machine only ever moves
    // Idle -> Loading -> Loaded | Error; recovering from Error means
    // restarting the viewer.
    use_future(move || async move {
        dataset.set(DatasetState::Loading);
        let client = reqwest::Client::new();
        let url = format!("{}/municipalities-data.json", data_url());
        match fetch_dataset(&client, &url).await {
            Ok(records) => dataset.set(DatasetState::Loaded(records)),
            Err(err) => {
                tracing::error!("dataset load failed: {err}");
                dataset.set(DatasetState::Error(err.to_string()));
            }
        }
    });

    // Debounce worker: raw keystrokes go in, quiet values come out. The
    // channel endpoints drop with this component, which cancels any
    // pending update.
    use_future(move || async move {
        let (tx, mut rx) = debounce_channel::<String>(SEARCH_DEBOUNCE);
        search_tx.set(Some(tx));
        while let Some(term) = rx.recv().await {
            debounced_search.set(term);
        }
    });

    // Derived display list, recomputed only when the dataset, the
    // debounced term, or the selection actually changes.
    let filtered = use_memo(move || {
        let dataset = dataset.read();
        let Some(records) = dataset.records() else {
            return Vec::<Municipality>::new();
        };
        filter_municipalities(records, &debounced_search.read(), &selected_regions.read())
            .into_iter()
            .cloned()
            .collect()
    });

    // Take over the platform find shortcut: Ctrl+F / Cmd+F focuses the
    // search field instead of opening the webview's find bar.
    let on_keydown = move |evt: KeyboardEvent| {
        let is_find = matches!(evt.key(), Key::Character(ref c) if c == "f")
            && (evt.modifiers().ctrl() || evt.modifiers().meta());
        if is_find {
            evt.prevent_default();
            document::eval(r#"document.getElementById("municipality-search").focus();"#);
        }
    };

    let loading = dataset.read().is_loading();
    let error_message = dataset.read().error_message().map(str::to_string);
    let shown = filtered();

    // Loading blocks the whole grid; a load error is fatal to the page.
    let body = if loading {
        rsx! {
            LoadingGrid {}
        }
    } else if let Some(message) = error_message {
        rsx! {
            ErrorPanel { message }
        }
    } else {
        rsx! {
            div { class: "catalogue",
                div { class: "filter-bar",
                    SearchBar {
                        value: search_entry(),
                        on_input: move |value: String| {
                            search_entry.set(value.clone());
                            if let Some(tx) = search_tx() {
                                // A failed send means the page is tearing
                                // down; the value no longer matters.
                                let _ = tx.send(value);
                            }
                        },
                    }
                    RegionSelect {
                        selected: selected_regions(),
                        on_change: move |selection: RegionSelection| {
                            selected_regions.set(selection);
                        },
                    }
                }

                div { class: "catalogue-summary", "{count_label(shown.len())}" }

                if shown.is_empty() {
                    div { class: "empty-notice", "Ni zadetkov." }
                } else {
                    div { class: "card-grid",
                        for municipality in shown.iter() {
                            MunicipalityCard {
                                key: "{municipality.name}",
                                municipality: municipality.clone(),
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page",
            "data-theme": "{CURRENT_THEME.read().css_value()}",
            tabindex: "0",
            onkeydown: on_keydown,

            Header {}
            {body}
        }
    }
}
