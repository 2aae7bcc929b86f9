use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

use super::create_trip_page::CreateTripPage;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        CreateTripPage {}
    }
}
