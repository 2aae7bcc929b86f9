use crate::trip::DateRange;
use dioxus::prelude::*;

use super::range_calendar::RangeCalendar;

/// Full-screen overlay around the range calendar.
///
/// Only the close button dismisses it; picking dates leaves it open.
#[component]
pub fn DatePickerModal(
    #[props(!optional)] selected: Option<DateRange>,
    on_select: EventHandler<Option<DateRange>>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h2 { class: "modal-title", "Selecione a data" }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                RangeCalendar { selected: selected, on_select: on_select }
            }
        }
    }
}
