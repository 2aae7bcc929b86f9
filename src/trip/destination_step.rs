use tracing::{debug, error};

use super::date_range::{date_range_label, DateRange};
use crate::geocoding::{GeocodingError, GeocodingService, Suggestion};

/// Queries at or under this many characters never trigger a lookup
pub const MIN_QUERY_CHARS: usize = 2;

pub const DESTINATION_PLACEHOLDER: &str = "Para onde você vai?";
pub const DATE_PLACEHOLDER: &str = "Quando?";

/// Trip state owned by the wizard, outside this step
pub trait TripDraft {
    fn date_range(&self) -> Option<DateRange>;
    fn set_date_range(&mut self, range: Option<DateRange>);
    fn set_destination(&mut self, destination: String);
    fn is_guests_input_open(&self) -> bool;
    fn open_guests_input(&mut self);
    fn close_guests_input(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePicker {
    #[default]
    Closed,
    Open,
}

impl DatePicker {
    pub fn is_open(&self) -> bool {
        matches!(self, DatePicker::Open)
    }
}

/// The trailing button of the step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Continue,
    ChangeDestinationOrDate,
}

impl StepAction {
    pub fn for_guests_panel(is_guests_input_open: bool) -> Self {
        if is_guests_input_open {
            StepAction::ChangeDestinationOrDate
        } else {
            StepAction::Continue
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepAction::Continue => "Continuar",
            StepAction::ChangeDestinationOrDate => "Alterar local/data",
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, StepAction::Continue)
    }
}

/// A lookup the caller must run for the query it was issued with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub seq: u64,
    pub query: String,
}

/// State of the destination and date step.
///
/// Every query change takes a new sequence number. Lookup results are only
/// applied when they carry the latest one, so a slow response for an old
/// query cannot replace newer suggestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationStep {
    query: String,
    suggestions: Vec<Suggestion>,
    date_picker: DatePicker,
    seq: u64,
}

impl DestinationStep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn date_picker(&self) -> DatePicker {
        self.date_picker
    }

    /// Update the query text. Returns a ticket when a lookup should be issued.
    pub fn set_query(&mut self, value: impl Into<String>) -> Option<LookupTicket> {
        let value = value.into();
        if value == self.query {
            return None;
        }

        self.query = value;
        self.seq += 1;

        if self.query.chars().count() > MIN_QUERY_CHARS {
            debug!("Destination lookup #{} for '{}'", self.seq, self.query);
            Some(LookupTicket {
                seq: self.seq,
                query: self.query.clone(),
            })
        } else {
            self.suggestions.clear();
            None
        }
    }

    /// Apply a finished lookup. Returns true when the suggestions were replaced.
    pub fn apply_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: Result<Vec<Suggestion>, GeocodingError>,
    ) -> bool {
        match result {
            Ok(suggestions) if ticket.seq == self.seq => {
                self.suggestions = suggestions;
                true
            }
            Ok(_) => {
                debug!(
                    "Discarding stale lookup #{} for '{}' (current #{})",
                    ticket.seq, ticket.query, self.seq
                );
                false
            }
            Err(e) => {
                error!("Error fetching suggestions for '{}': {}", ticket.query, e);
                false
            }
        }
    }

    /// Pick a suggestion as the destination
    pub fn choose_suggestion(
        &mut self,
        index: usize,
        draft: &mut dyn TripDraft,
    ) -> Option<Suggestion> {
        let chosen = self.suggestions.get(index)?.clone();

        draft.set_destination(chosen.label.clone());
        self.query = chosen.label.clone();
        self.suggestions.clear();
        self.seq += 1;

        Some(chosen)
    }

    /// Open the date picker unless the guests panel has focus
    pub fn open_date_picker(&mut self, is_guests_input_open: bool) -> bool {
        if is_guests_input_open || self.date_picker.is_open() {
            return false;
        }
        self.date_picker = DatePicker::Open;
        true
    }

    pub fn close_date_picker(&mut self) {
        self.date_picker = DatePicker::Closed;
    }

    /// Keep the picker consistent with the guests panel; opening the panel closes it
    pub fn sync_guests_panel(&mut self, is_guests_input_open: bool) {
        if is_guests_input_open && self.date_picker.is_open() {
            debug!("Guests panel opened, closing date picker");
            self.date_picker = DatePicker::Closed;
        }
    }

    /// Forward a calendar selection to the wizard as-is
    pub fn select_dates(&self, range: Option<DateRange>, draft: &mut dyn TripDraft) {
        draft.set_date_range(range);
    }

    pub fn date_label(&self, draft: &dyn TripDraft) -> String {
        date_range_label(draft.date_range().as_ref()).unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
    }

    pub fn trailing_action(&self, draft: &dyn TripDraft) -> StepAction {
        StepAction::for_guests_panel(draft.is_guests_input_open())
    }

    pub fn activate_trailing_action(&mut self, draft: &mut dyn TripDraft) -> StepAction {
        let action = self.trailing_action(draft);
        match action {
            StepAction::Continue => {
                self.close_date_picker();
                draft.open_guests_input();
            }
            StepAction::ChangeDestinationOrDate => draft.close_guests_input(),
        }
        action
    }
}

/// Run a lookup ticket against a geocoding service
pub async fn run_lookup(
    service: &dyn GeocodingService,
    ticket: &LookupTicket,
) -> Result<Vec<Suggestion>, GeocodingError> {
    service.search(&ticket.query).await
}
