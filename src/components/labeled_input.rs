//! Labeled Input Component
//!
//! Label plus bound text box; all state lives in the parent.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Labeled text input bound to parent-owned state
#[component]
pub fn LabeledInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="modal-input-wrapper">
            <label>{label}</label>
            <input
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_change.run(input.value());
                }
            />
        </div>
    }
}
