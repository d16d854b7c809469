//! Application Shell
//!
//! Three-screen dashboard with signal-driven navigation. Page components
//! own their state, so navigating away discards any draft input.

use leptos::prelude::*;

use crate::components::{AnalyticsPage, DiagnosticsPage, Navbar, Page, PredictPage};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Analytics);

    view! {
        <div class="app">
            <Navbar page=page set_page=set_page />
            {move || match page.get() {
                Page::Analytics => view! { <AnalyticsPage /> }.into_any(),
                Page::Predict => view! { <PredictPage /> }.into_any(),
                Page::Diagnostics => view! { <DiagnosticsPage /> }.into_any(),
            }}
        </div>
    }
}
