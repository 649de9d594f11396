//! Card presentation of a single municipality.

use dioxus::prelude::*;

use obcine_catalog::Municipality;

use crate::app::data_url;

/// Load state of a card's emblem image.
///
/// Each card owns its own state, keyed by the record's unique name at the
/// call site; a failed emblem never affects sibling cards or the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EmblemPhase {
    #[default]
    Pending,
    Ready,
    Failed,
}

/// A single municipality card.
///
/// Clicking anywhere on the card toggles the emblem section. Hiding the
/// emblem resets its load state so the placeholder shows again on the next
/// reveal. The external link stops propagation so following it does not
/// toggle the emblem.
#[component]
pub fn MunicipalityCard(municipality: Municipality) -> Element {
    let mut show_emblem = use_signal(|| true);
    let mut phase = use_signal(|| EmblemPhase::Pending);

    let emblem_src = format!("{}/{}", data_url(), municipality.emblem_path());
    let seceded = municipality
        .seceded_from
        .clone()
        .filter(|origin| !origin.is_empty())
        .unwrap_or_else(|| "-".to_string());

    let toggle_emblem = move |_| {
        let showing = show_emblem();
        if showing {
            // Reset so the placeholder shows on the next reveal.
            phase.set(EmblemPhase::Pending);
        }
        show_emblem.set(!showing);
    };

    rsx! {
        div { class: "card", onclick: toggle_emblem,
            div { class: "card-header",
                div { class: "card-heading",
                    h3 { class: "card-title", "{municipality.name}" }
                    span { class: "card-badge", "{municipality.statistical_region}" }
                }
                if let Some(url) = municipality.url.clone() {
                    a {
                        class: "card-link",
                        href: "{url}",
                        target: "_blank",
                        onclick: move |evt| evt.stop_propagation(),
                        "Več o občini \u{2197}"
                    }
                }
            }

            div { class: "card-body",
                div { class: "card-fields",
                    CardField { label: "Površina", value: format!("{} km\u{b2}", municipality.area) }
                    CardField { label: "Prebivalci", value: municipality.population.clone() }
                    CardField { label: "Gostota", value: format!("{} /km\u{b2}", municipality.density) }
                    CardField { label: "Naselja", value: municipality.settlements.clone() }
                    CardField { label: "Leto ustanovitve", value: municipality.founded.clone() }
                    CardField { label: "Pokrajina", value: municipality.province.clone() }
                    CardField { label: "Odcepitev", value: seceded }
                }

                if show_emblem() {
                    div { class: "card-emblem",
                        if phase() == EmblemPhase::Failed {
                            // Isolated failure: the notice is local to this
                            // card, the textual fields stay usable.
                            div { class: "emblem-error",
                                "Grba za {municipality.name} ni bilo mogoče naložiti."
                            }
                        } else {
                            if phase() == EmblemPhase::Pending {
                                div { class: "skeleton emblem-skeleton" }
                            }
                            img {
                                class: if phase() == EmblemPhase::Ready { "emblem-img" } else { "emblem-img emblem-hidden" },
                                src: "{emblem_src}",
                                alt: "Grb občine {municipality.name}",
                                onload: move |_| phase.set(EmblemPhase::Ready),
                                onerror: move |_| phase.set(EmblemPhase::Failed),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Label/value row inside a card
#[component]
fn CardField(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "card-field",
            span { class: "field-label", "{label}: " }
            span { class: "field-value", "{value}" }
        }
    }
}
