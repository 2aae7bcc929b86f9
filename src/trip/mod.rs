pub mod calendar;
pub mod date_range;
pub mod destination_step;

pub use calendar::{CalendarMonth, RangePosition};
pub use date_range::{date_range_label, DateRange};
pub use destination_step::{
    run_lookup, DatePicker, DestinationStep, LookupTicket, StepAction, TripDraft,
};
