//! Analytics Page
//!
//! Embeds the Looker Studio report. The report renders independently;
//! there is no contract beyond the iframe URL.

use leptos::prelude::*;

const LOOKER_STUDIO_URL: &str =
    "https://lookerstudio.google.com/embed/reporting/YOUR_REPORT_ID/page/YOUR_PAGE_ID";

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    view! {
        <div class="analytics-container">
            <div class="page-header">
                <h2>"Cardiovascular Analytics Dashboard"</h2>
                <p>"Visualisasi data cardiovascular dari Looker Studio"</p>
            </div>
            <div class="analytics-embed">
                <iframe
                    src=LOOKER_STUDIO_URL
                    class="analytics-iframe"
                    allowfullscreen=true
                    title="Cardiovascular Analytics"
                ></iframe>
            </div>
        </div>
    }
}
