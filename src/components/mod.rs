//! UI Components
//!
//! Leptos components for the three dashboard screens.

mod analytics;
mod diagnostics;
mod navbar;
mod predict_form;

pub use analytics::AnalyticsPage;
pub use diagnostics::DiagnosticsPage;
pub use navbar::{Navbar, Page};
pub use predict_form::PredictPage;
