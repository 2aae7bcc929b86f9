pub mod app;
pub mod create_trip_page;
pub mod date_picker_modal;
pub mod destination_and_date_step;
pub mod range_calendar;
pub mod suggestion_list;

pub use app::App;
pub use create_trip_page::{CreateTripPage, GuestsPanel};
pub use date_picker_modal::DatePickerModal;
pub use destination_and_date_step::DestinationAndDateStep;
pub use range_calendar::RangeCalendar;
pub use suggestion_list::SuggestionList;
