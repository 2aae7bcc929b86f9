use crate::trip::calendar::WEEKDAY_INITIALS;
use crate::trip::{CalendarMonth, DateRange, RangePosition};
use chrono::{Datelike, Local};
use dioxus::prelude::*;

fn day_class(position: RangePosition) -> &'static str {
    match position {
        RangePosition::Outside => "day",
        RangePosition::Start => "day day-selected day-start",
        RangePosition::Middle => "day day-selected day-middle",
        RangePosition::End => "day day-selected day-end",
        RangePosition::Single => "day day-selected day-start day-end",
    }
}

/// Month calendar in range mode. Every day click emits the new selection.
#[component]
pub fn RangeCalendar(
    #[props(!optional)] selected: Option<DateRange>,
    on_select: EventHandler<Option<DateRange>>,
) -> Element {
    let mut month = use_signal(|| CalendarMonth::initial(selected.as_ref(), Local::now().date_naive()));
    let shown = month();
    let title = shown.title();
    let weeks = shown.weeks();

    rsx! {
        div { class: "calendar",
            div { class: "calendar-header",
                button {
                    r#type: "button",
                    class: "calendar-nav",
                    onclick: move |_| month.set(shown.previous()),
                    "‹"
                }
                span { class: "calendar-title", "{title}" }
                button {
                    r#type: "button",
                    class: "calendar-nav",
                    onclick: move |_| month.set(shown.next()),
                    "›"
                }
            }
            table { class: "calendar-grid",
                thead {
                    tr {
                        for initial in WEEKDAY_INITIALS {
                            th { "{initial}" }
                        }
                    }
                }
                tbody {
                    for week in weeks {
                        tr {
                            for cell in week {
                                td {
                                    if let Some(day) = cell {
                                        button {
                                            r#type: "button",
                                            class: day_class(RangePosition::of(selected.as_ref(), day)),
                                            onclick: move |_| on_select.call(DateRange::add_day(selected, day)),
                                            "{day.day()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
