//! Diagnostics Page
//!
//! Developer-facing panel: API health polling, test-predict replay, and
//! the bounded event log.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, HealthCheck};
use crate::logbuf::{LogBuffer, LogEntry, Severity};
use crate::models::{DraftRecord, Field};

const AUTO_REFRESH_MS: u32 = 5_000;

/// Displayed health state; `css` doubles as the indicator class.
#[derive(Debug, Clone, PartialEq)]
struct ApiStatus {
    css: &'static str,
    message: String,
    details: Option<String>,
}

impl ApiStatus {
    fn checking() -> Self {
        Self {
            css: "checking",
            message: "Checking API status...".to_string(),
            details: None,
        }
    }
}

fn now_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
}

fn add_log(logs: RwSignal<LogBuffer>, severity: Severity, message: &str, data: Option<String>) {
    logs.update(|buffer| {
        buffer.push(LogEntry {
            timestamp: now_timestamp(),
            severity,
            message: message.to_string(),
            data,
        });
    });
}

fn test_label(field: Field) -> &'static str {
    match field {
        Field::Age => "Age",
        Field::Gender => "Gender (1=F, 2=M)",
        Field::Height => "Height (cm)",
        Field::Weight => "Weight (kg)",
        Field::ApHi => "Systolic BP",
        Field::ApLo => "Diastolic BP",
        Field::Cholesterol => "Cholesterol (1-3)",
        Field::Gluc => "Glucose (1-3)",
        Field::Smoke => "Smoke (0/1)",
        Field::Alco => "Alcohol (0/1)",
        Field::Active => "Active (0/1)",
    }
}

#[component]
pub fn DiagnosticsPage() -> impl IntoView {
    let logs = RwSignal::new(LogBuffer::new());
    let (status, set_status) = signal(ApiStatus::checking());
    let (auto_refresh, set_auto_refresh) = signal(false);
    let test_draft = RwSignal::new(DraftRecord::sample());
    // Dropping the handle stops scheduling; an in-flight check still lands.
    let interval_handle = StoredValue::new_local(None::<Interval>);

    let run_health_check = move || {
        add_log(logs, Severity::Info, "Checking API status...", None);
        set_status.set(ApiStatus::checking());
        spawn_local(async move {
            match api::check_health().await {
                HealthCheck::Online { body } => {
                    set_status.set(ApiStatus {
                        css: "online",
                        message: "API is online".to_string(),
                        details: Some(body.clone()),
                    });
                    add_log(logs, Severity::Success, "API is online", Some(body));
                }
                HealthCheck::Degraded { status, body } => {
                    set_status.set(ApiStatus {
                        css: "error",
                        message: format!("API returned error: {status}"),
                        details: Some(body.clone()),
                    });
                    add_log(logs, Severity::Error, &format!("API error: {status}"), Some(body));
                }
                HealthCheck::Unreachable { message } => {
                    set_status.set(ApiStatus {
                        css: "error",
                        message: format!("Failed to connect: {message}"),
                        details: None,
                    });
                    add_log(logs, Severity::Error, "Failed to connect to API", Some(message));
                }
            }
        });
    };

    // Initial probe on mount.
    Effect::new(move |_| run_health_check());

    let toggle_auto_refresh = move |ev: web_sys::Event| {
        let enabled = event_target_checked(&ev);
        set_auto_refresh.set(enabled);
        if enabled {
            run_health_check();
            interval_handle.set_value(Some(Interval::new(AUTO_REFRESH_MS, run_health_check)));
        } else {
            interval_handle.set_value(None);
        }
    };

    on_cleanup(move || interval_handle.set_value(None));

    let run_test_predict = move |_| {
        add_log(logs, Severity::Info, "Testing predict endpoint...", None);
        let payload = match test_draft.with(|draft| draft.to_payload()) {
            Ok(payload) => payload,
            Err(message) => {
                add_log(
                    logs,
                    Severity::Warning,
                    "Test payload invalid, request skipped",
                    Some(message),
                );
                return;
            }
        };
        spawn_local(async move {
            let started = js_sys::Date::now();
            let outcome = api::predict(&payload).await;
            let duration = (js_sys::Date::now() - started).round() as u64;
            match outcome {
                Ok(result) => add_log(
                    logs,
                    Severity::Success,
                    &format!("Predict successful ({duration}ms)"),
                    serde_json::to_string_pretty(&result).ok(),
                ),
                Err(message) => add_log(
                    logs,
                    Severity::Error,
                    &format!("Predict failed ({duration}ms)"),
                    Some(message),
                ),
            }
        });
    };

    let clear_logs = move |_| {
        logs.update(|buffer| buffer.clear());
        add_log(logs, Severity::Info, "Logs cleared", None);
    };

    view! {
        <div class="diagnostics-container">
            <div class="page-header">
                <h2>"API Logging & Debugging"</h2>
                <p>"Monitor API status, test endpoints, and view logs"</p>
            </div>

            <div class="diagnostics-content">
                <div class="status-card">
                    <h3>"API Status"</h3>
                    <div class=move || format!("status-indicator {}", status.get().css)>
                        <span class="status-dot"></span>
                        <span>{move || status.get().message}</span>
                    </div>
                    {move || status.get().details.map(|details| view! {
                        <div class="status-details"><pre>{details}</pre></div>
                    })}
                    <div class="status-actions">
                        <button class="btn-primary" on:click=move |_| run_health_check()>
                            "Refresh Status"
                        </button>
                        <label class="toggle-switch">
                            <input
                                type="checkbox"
                                prop:checked=move || auto_refresh.get()
                                on:change=toggle_auto_refresh
                            />
                            <span>"Auto Refresh (5s)"</span>
                        </label>
                    </div>
                </div>

                <div class="test-card">
                    <h3>"Test Predict Endpoint"</h3>
                    <div class="test-form">
                        <div class="form-grid">
                            {Field::ALL.iter().map(|&field| view! {
                                <div class="form-group">
                                    <label for=format!("test-{}", field.name())>{test_label(field)}</label>
                                    <input
                                        type="number"
                                        id=format!("test-{}", field.name())
                                        prop:value=move || test_draft.with(|d| d.get(field).to_string())
                                        on:input=move |ev| {
                                            test_draft.update(|d| d.set(field, event_target_value(&ev)))
                                        }
                                    />
                                </div>
                            }).collect_view()}
                        </div>
                        <button class="btn-primary" on:click=run_test_predict>
                            "Test Predict"
                        </button>
                    </div>
                </div>

                <div class="logs-card">
                    <div class="logs-header">
                        <h3>"Logs"</h3>
                        <button class="btn-secondary" on:click=clear_logs>
                            "Clear Logs"
                        </button>
                    </div>
                    <div class="logs-container">
                        {move || {
                            let entries: Vec<LogEntry> = logs.with(|buffer| buffer.iter().cloned().collect());
                            if entries.is_empty() {
                                view! {
                                    <div class="logs-empty">"No logs yet. Perform an action to see logs."</div>
                                }
                                .into_any()
                            } else {
                                entries.into_iter().map(|entry| view! {
                                    <div class=format!("log-entry log-{}", entry.severity.as_str())>
                                        <span class="log-time">{entry.timestamp}</span>
                                        <span class="log-message">{entry.message}</span>
                                        {entry.data.map(|data| view! {
                                            <details class="log-details">
                                                <summary>"Details"</summary>
                                                <pre>{data}</pre>
                                            </details>
                                        })}
                                    </div>
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
