use crate::geocoding::Suggestion;
use dioxus::prelude::*;

/// Dropdown under the destination input; emits the index of the clicked entry
#[component]
pub fn SuggestionList(suggestions: Vec<Suggestion>, on_choose: EventHandler<usize>) -> Element {
    if suggestions.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "suggestions",
            // Geohashes repeat when results share coordinates
            for (index, suggestion) in suggestions.into_iter().enumerate() {
                li {
                    key: "{index}-{suggestion.id}",
                    class: "suggestion",
                    onclick: move |_| on_choose.call(index),
                    "{suggestion.label}"
                }
            }
        }
    }
}
