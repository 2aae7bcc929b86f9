#![cfg(feature = "test-utils")]

mod support;

use chrono::NaiveDate;
use dioxus::prelude::*;
use std::sync::{Arc, Mutex};

use crate::support::tracing_init;
use trip_planner::config::Config;
use trip_planner::geocoding::Suggestion;
use trip_planner::test_support::MockGeocoder;
use trip_planner::trip::DateRange;
use trip_planner::ui::components::SuggestionList;
use trip_planner::ui::{AppContext, DestinationAndDateStep};

fn app_context() -> AppContext {
    let config = Config {
        opencage_api_key: "test_key".to_string(),
        opencage_base_url: "http://127.0.0.1:9".to_string(),
        suggestion_limit: 5,
    };
    AppContext::new(config, Arc::new(MockGeocoder::new()))
}

#[component]
fn StepHarness(is_guests_input_open: bool, #[props(!optional)] dates: Option<DateRange>) -> Element {
    rsx! {
        DestinationAndDateStep {
            is_guests_input_open: is_guests_input_open,
            event_start_and_end_dates: dates,
            close_guests_input: move |_| {},
            open_guests_input: move |_| {},
            set_destination: move |_: String| {},
            set_event_start_and_end_dates: move |_: Option<DateRange>| {},
        }
    }
}

fn render_step(is_guests_input_open: bool, dates: Option<DateRange>) -> String {
    let mut dom = VirtualDom::new_with_props(
        StepHarness,
        StepHarnessProps {
            is_guests_input_open,
            dates,
        },
    )
    .with_root_context(app_context());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn test_step_with_guests_panel_closed() {
    tracing_init();

    let html = render_step(false, None);

    assert!(!html.contains("disabled"), "unexpected disabled control: {html}");
    assert!(html.contains("Para onde você vai?"));
    assert!(html.contains("Quando?"));
    assert!(html.contains("Continuar"));
    assert!(!html.contains("Alterar local/data"));
}

#[test]
fn test_step_with_guests_panel_open() {
    tracing_init();

    let dates = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    );
    let html = render_step(true, Some(dates));

    // Destination input and date button are both locked
    assert_eq!(html.matches("disabled=true").count(), 2, "{html}");
    assert!(html.contains(r#"<button class="date-button" disabled=true>"#), "{html}");
    assert!(html.contains("5 de mar até 9 de mar"));
    assert!(html.contains("Alterar local/data"));
    assert!(!html.contains("Continuar"));
}

/// Suggestions shared with the harness so a test can swap them between renders
#[derive(Clone)]
struct SharedSuggestions(Arc<Mutex<Vec<Suggestion>>>);

impl PartialEq for SharedSuggestions {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
fn SuggestionHarness(source: SharedSuggestions) -> Element {
    let suggestions = source.0.lock().unwrap().clone();
    rsx! {
        SuggestionList { suggestions: suggestions, on_choose: move |_: usize| {} }
    }
}

#[test]
fn test_suggestions_sharing_a_geohash_rerender() {
    tracing_init();

    let source = SharedSuggestions(Arc::new(Mutex::new(vec![Suggestion::new(
        "eycs0p8ukc7v",
        "Lisboa, Portugal",
    )])));
    let mut dom = VirtualDom::new_with_props(
        SuggestionHarness,
        SuggestionHarnessProps {
            source: source.clone(),
        },
    );
    dom.rebuild_in_place();
    assert_eq!(dioxus_ssr::render(&dom).matches("<li").count(), 1);

    // Two results at the same coordinates
    *source.0.lock().unwrap() = vec![
        Suggestion::new("eycs0p8ukc7v", "Lisboa, Portugal"),
        Suggestion::new("eycs0p8ukc7v", "Câmara Municipal de Lisboa, Portugal"),
    ];
    dom.mark_dirty(ScopeId::APP);
    dom.render_immediate_to_vec();

    let html = dioxus_ssr::render(&dom);
    assert_eq!(html.matches("<li").count(), 2, "{html}");
    assert!(html.contains("Câmara Municipal de Lisboa, Portugal"));
}
