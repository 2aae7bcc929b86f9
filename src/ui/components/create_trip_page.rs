use crate::trip::{date_range_label, DateRange};
use dioxus::prelude::*;
use tracing::debug;

use super::destination_and_date_step::DestinationAndDateStep;

/// Trip creation wizard; owns the state the steps write into
#[component]
pub fn CreateTripPage() -> Element {
    let mut destination = use_signal(|| None::<String>);
    let mut dates = use_signal(|| None::<DateRange>);
    let mut is_guests_input_open = use_signal(|| false);

    rsx! {
        div { class: "page",
            div { class: "page-content",
                h1 { class: "brand", "plann.er" }
                p { class: "tagline", "Convide seus amigos e planeje sua próxima viagem!" }

                div { class: "steps",
                    DestinationAndDateStep {
                        is_guests_input_open: is_guests_input_open(),
                        event_start_and_end_dates: dates(),
                        close_guests_input: move |_| {
                            debug!("Closing guests input");
                            is_guests_input_open.set(false);
                        },
                        open_guests_input: move |_| {
                            debug!("Opening guests input");
                            is_guests_input_open.set(true);
                        },
                        set_destination: move |value: String| {
                            debug!("Destination set to '{}'", value);
                            destination.set(Some(value));
                        },
                        set_event_start_and_end_dates: move |range: Option<DateRange>| {
                            debug!("Dates set to {:?}", range);
                            dates.set(range);
                        },
                    }

                    if is_guests_input_open() {
                        GuestsPanel { destination: destination(), dates: dates() }
                    }
                }
            }
        }
    }
}

/// Placeholder for the guests step, summarising what the first step picked
#[component]
pub fn GuestsPanel(
    #[props(!optional)] destination: Option<String>,
    #[props(!optional)] dates: Option<DateRange>,
) -> Element {
    let destination = destination.unwrap_or_else(|| "Destino não definido".to_string());
    let dates = date_range_label(dates.as_ref()).unwrap_or_else(|| "Datas não definidas".to_string());

    rsx! {
        div { class: "step-bar guests-panel",
            span { class: "field-icon", "👥" }
            span { class: "guests-summary", "{destination} · {dates}" }
        }
    }
}
