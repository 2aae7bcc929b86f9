use crate::geocoding::Suggestion;
use crate::trip::destination_step::DESTINATION_PLACEHOLDER;
use crate::trip::{run_lookup, DateRange, DestinationStep, TripDraft};
use crate::ui::AppContext;
use dioxus::prelude::*;

use super::date_picker_modal::DatePickerModal;
use super::suggestion_list::SuggestionList;

/// The wizard's view of the step, built from props on every render
#[derive(Clone, Copy)]
struct StepHost {
    is_guests_input_open: bool,
    dates: Option<DateRange>,
    close_guests_input: EventHandler<()>,
    open_guests_input: EventHandler<()>,
    set_destination: EventHandler<String>,
    set_dates: EventHandler<Option<DateRange>>,
}

impl TripDraft for StepHost {
    fn date_range(&self) -> Option<DateRange> {
        self.dates
    }

    fn set_date_range(&mut self, range: Option<DateRange>) {
        self.dates = range;
        self.set_dates.call(range);
    }

    fn set_destination(&mut self, destination: String) {
        self.set_destination.call(destination);
    }

    fn is_guests_input_open(&self) -> bool {
        self.is_guests_input_open
    }

    fn open_guests_input(&mut self) {
        self.open_guests_input.call(());
    }

    fn close_guests_input(&mut self) {
        self.close_guests_input.call(());
    }
}

/// First step of trip creation: where and when
#[component]
pub fn DestinationAndDateStep(
    is_guests_input_open: bool,
    #[props(!optional)] event_start_and_end_dates: Option<DateRange>,
    close_guests_input: EventHandler<()>,
    open_guests_input: EventHandler<()>,
    set_destination: EventHandler<String>,
    set_event_start_and_end_dates: EventHandler<Option<DateRange>>,
) -> Element {
    let app_context = use_context::<AppContext>();
    let mut step = use_signal(DestinationStep::new);

    use_effect(use_reactive!(|(is_guests_input_open,)| {
        step.write().sync_guests_panel(is_guests_input_open);
    }));

    let host = StepHost {
        is_guests_input_open,
        dates: event_start_and_end_dates,
        close_guests_input,
        open_guests_input,
        set_destination,
        set_dates: set_event_start_and_end_dates,
    };

    let query = step.read().query().to_string();
    let suggestions: Vec<Suggestion> = step.read().suggestions().to_vec();
    let show_date_picker = step.read().date_picker().is_open() && !is_guests_input_open;
    let date_label = step.read().date_label(&host);
    let action = step.read().trailing_action(&host);
    let action_class = if action.is_primary() {
        "button button-primary"
    } else {
        "button button-secondary"
    };
    let action_icon = if action.is_primary() { "→" } else { "⚙" };

    rsx! {
        div { class: "step-bar",
            div { class: "destination-field",
                span { class: "field-icon", "📍" }
                input {
                    r#type: "text",
                    class: "destination-input",
                    placeholder: DESTINATION_PLACEHOLDER,
                    disabled: is_guests_input_open,
                    value: "{query}",
                    oninput: move |event: FormEvent| {
                        let ticket = step.write().set_query(event.value());
                        if let Some(ticket) = ticket {
                            let geocoder = app_context.geocoder.clone();
                            spawn(async move {
                                let result = run_lookup(geocoder.as_ref(), &ticket).await;
                                step.write().apply_lookup(&ticket, result);
                            });
                        }
                    },
                }
                SuggestionList {
                    suggestions: suggestions,
                    on_choose: move |index: usize| {
                        let mut host = host;
                        step.write().choose_suggestion(index, &mut host);
                    },
                }
            }

            button {
                class: "date-button",
                disabled: is_guests_input_open,
                onclick: move |_| {
                    step.write().open_date_picker(is_guests_input_open);
                },
                span { class: "field-icon", "📅" }
                span { class: "date-label", "{date_label}" }
            }

            if show_date_picker {
                DatePickerModal {
                    selected: event_start_and_end_dates,
                    on_select: move |range: Option<DateRange>| {
                        let mut host = host;
                        step.read().select_dates(range, &mut host);
                    },
                    on_close: move |_| {
                        step.write().close_date_picker();
                    },
                }
            }

            div { class: "divider" }

            button {
                class: "{action_class}",
                onclick: move |_| {
                    let mut host = host;
                    step.write().activate_trailing_action(&mut host);
                },
                "{action.label()}"
                span { class: "button-icon", "{action_icon}" }
            }
        }
    }
}
