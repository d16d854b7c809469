//! Predict Page
//!
//! Vitals form with per-field validation, submission to the prediction
//! endpoint, and the risk result card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::form::FormController;
use crate::models::Field;

const GENDER_OPTIONS: &[(&str, &str)] = &[("1", "Perempuan"), ("2", "Laki-laki")];
const LEVEL_OPTIONS: &[(&str, &str)] = &[
    ("1", "Normal"),
    ("2", "Di atas normal"),
    ("3", "Sangat tinggi"),
];
const YES_NO_OPTIONS: &[(&str, &str)] = &[("0", "Tidak"), ("1", "Ya")];

/// Input control rendered for a field.
enum Control {
    Number {
        min: &'static str,
        max: &'static str,
        step: Option<&'static str>,
    },
    Select(&'static [(&'static str, &'static str)]),
}

fn control_for(field: Field) -> Control {
    match field {
        Field::Age => Control::Number { min: "1", max: "120", step: None },
        Field::Height => Control::Number { min: "100", max: "250", step: Some("0.1") },
        Field::Weight => Control::Number { min: "30", max: "200", step: Some("0.1") },
        Field::ApHi => Control::Number { min: "80", max: "200", step: None },
        Field::ApLo => Control::Number { min: "40", max: "150", step: None },
        Field::Gender => Control::Select(GENDER_OPTIONS),
        Field::Cholesterol | Field::Gluc => Control::Select(LEVEL_OPTIONS),
        Field::Smoke | Field::Alco | Field::Active => Control::Select(YES_NO_OPTIONS),
    }
}

fn label_for(field: Field) -> &'static str {
    match field {
        Field::Age => "Usia (tahun)",
        Field::Gender => "Jenis Kelamin",
        Field::Height => "Tinggi Badan (cm)",
        Field::Weight => "Berat Badan (kg)",
        Field::ApHi => "Systolic BP (mmHg)",
        Field::ApLo => "Diastolic BP (mmHg)",
        Field::Cholesterol => "Kolesterol",
        Field::Gluc => "Glukosa",
        Field::Smoke => "Merokok",
        Field::Alco => "Alkohol",
        Field::Active => "Aktif Fisik",
    }
}

/// One labelled input or select, wired to the form controller.
#[component]
fn VitalsField(field: Field, form: RwSignal<FormController>) -> impl IntoView {
    let value = move || form.with(|f| f.draft.get(field).to_string());
    let error = move || form.with(|f| f.field_error(field).map(str::to_string));
    let control_class = move || if error().is_some() { "error" } else { "" };

    let control = match control_for(field) {
        Control::Number { min, max, step } => view! {
            <input
                type="number"
                id=field.name()
                min=min
                max=max
                step=step
                class=control_class
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
            />
        }
        .into_any(),
        Control::Select(options) => view! {
            <select
                id=field.name()
                class=control_class
                prop:value=value
                on:change=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
            >
                <option value="">"Pilih..."</option>
                {options.iter().map(|&(option_value, option_label)| view! {
                    <option value=option_value>{option_label}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{label_for(field)}</label>
            {control}
            {move || error().map(|msg| view! { <span class="error-message">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn PredictPage() -> impl IntoView {
    let form = RwSignal::new(FormController::new());
    let (loading_step, set_loading_step) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(payload) = payload else { return };

        set_loading_step.set("Mengirim data...".to_string());
        spawn_local(async move {
            set_loading_step.set("Memproses prediksi...".to_string());
            let outcome = api::predict(&payload).await;
            set_loading_step.set("Menganalisis hasil...".to_string());
            form.update(|f| f.resolve(outcome));
            set_loading_step.set(String::new());
        });
    };

    view! {
        <div class="predict-container">
            <div class="page-header">
                <h2>"Cardiovascular Disease Prediction"</h2>
                <p>"Masukkan data untuk memprediksi risiko cardiovascular disease"</p>
            </div>

            <div class="predict-content">
                <form class="predict-form" on:submit=on_submit>
                    <div class="form-row">
                        <VitalsField field=Field::Age form=form />
                        <VitalsField field=Field::Gender form=form />
                    </div>
                    <div class="form-row">
                        <VitalsField field=Field::Height form=form />
                        <VitalsField field=Field::Weight form=form />
                    </div>
                    <div class="form-row">
                        <VitalsField field=Field::ApHi form=form />
                        <VitalsField field=Field::ApLo form=form />
                    </div>
                    <div class="form-row">
                        <VitalsField field=Field::Cholesterol form=form />
                        <VitalsField field=Field::Gluc form=form />
                    </div>
                    <div class="form-row">
                        <VitalsField field=Field::Smoke form=form />
                        <VitalsField field=Field::Alco form=form />
                    </div>
                    <div class="form-row">
                        <VitalsField field=Field::Active form=form />
                    </div>

                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || form.with(|f| f.submitting)
                    >
                        {move || if form.with(|f| f.submitting) {
                            let step = loading_step.get();
                            if step.is_empty() { "Memproses...".to_string() } else { step }
                        } else {
                            "Prediksi".to_string()
                        }}
                    </button>
                </form>

                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <div class="result-container error">
                        <h3>"Error"</h3>
                        <p>{message}</p>
                    </div>
                })}

                {move || form.with(|f| f.result.clone()).map(|result| view! {
                    <div class="result-container success">
                        <h3>"Hasil Prediksi"</h3>
                        <div class="result-content">
                            <div class="result-value">
                                <span class=if result.prediction == 1 { "risk-high" } else { "risk-low" }>
                                    {result.risk_label()}
                                </span>
                            </div>
                            {result.probability_percent().map(|percent| view! {
                                <p class="result-probability">"Probabilitas: " {percent}</p>
                            })}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
