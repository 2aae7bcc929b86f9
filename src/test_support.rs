// Test support utilities for both unit and integration tests

use crate::geocoding::{GeocodingError, GeocodingService, Suggestion};
use crate::trip::{DateRange, TripDraft};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
enum MockResponse {
    Suggestions(Vec<Suggestion>),
    Status(u16),
}

/// Mock geocoding service for testing
///
/// Answers from canned responses instead of calling OpenCage and records
/// every query it receives. Unknown queries answer with no suggestions.
#[derive(Default)]
pub struct MockGeocoder {
    responses: Mutex<HashMap<String, MockResponse>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl MockGeocoder {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, query: &str, suggestions: Vec<Suggestion>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), MockResponse::Suggestions(suggestions));
    }

    pub fn fail_with_status(&self, query: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.to_string(), MockResponse::Status(status));
    }

    /// Hold the response for `query` back by `delay`
    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GeocodingService for MockGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<Suggestion>, GeocodingError> {
        self.calls.lock().unwrap().push(query.to_string());

        let delay = self.delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.lock().unwrap().get(query).cloned();
        match response {
            Some(MockResponse::Suggestions(suggestions)) => Ok(suggestions),
            Some(MockResponse::Status(status)) => Err(GeocodingError::Status(status)),
            None => Ok(Vec::new()),
        }
    }
}

/// Calls the wizard would receive from the step
#[derive(Debug, Clone, PartialEq)]
pub enum DraftCall {
    SetDateRange(Option<DateRange>),
    SetDestination(String),
    OpenGuestsInput,
    CloseGuestsInput,
}

/// In-memory wizard state that records every write made by the step
#[derive(Debug, Default)]
pub struct RecordingTripDraft {
    pub date_range: Option<DateRange>,
    pub destination: Option<String>,
    pub is_guests_input_open: bool,
    pub calls: Vec<DraftCall>,
}

impl RecordingTripDraft {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }
}

impl TripDraft for RecordingTripDraft {
    fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    fn set_date_range(&mut self, range: Option<DateRange>) {
        self.calls.push(DraftCall::SetDateRange(range));
        self.date_range = range;
    }

    fn set_destination(&mut self, destination: String) {
        self.calls.push(DraftCall::SetDestination(destination.clone()));
        self.destination = Some(destination);
    }

    fn is_guests_input_open(&self) -> bool {
        self.is_guests_input_open
    }

    fn open_guests_input(&mut self) {
        self.calls.push(DraftCall::OpenGuestsInput);
        self.is_guests_input_open = true;
    }

    fn close_guests_input(&mut self) {
        self.calls.push(DraftCall::CloseGuestsInput);
        self.is_guests_input_open = false;
    }
}
