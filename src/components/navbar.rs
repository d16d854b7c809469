//! Top Navigation Bar
//!
//! Signal-driven navigation between the three dashboard screens.

use leptos::prelude::*;

/// Dashboard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Analytics,
    Predict,
    Diagnostics,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Analytics, Page::Predict, Page::Diagnostics];

    pub fn label(self) -> &'static str {
        match self {
            Page::Analytics => "Analytics",
            Page::Predict => "Predict",
            Page::Diagnostics => "Diagnostics",
        }
    }
}

#[component]
pub fn Navbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <div class="navbar-brand">
                    <h1>"Cardiovascular Dashboard"</h1>
                </div>
                <div class="navbar-links">
                    {Page::ALL.iter().map(|&target| view! {
                        <button
                            class=move || if page.get() == target { "nav-link active" } else { "nav-link" }
                            on:click=move |_| set_page.set(target)
                        >
                            {target.label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
