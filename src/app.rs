//! Digital Menu App
//!
//! Top-level component: menu grid plus the "new food" modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Card, FoodFormModal};
use crate::context::AppContext;
use crate::models::FoodData;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (foods, set_foods) = signal(Vec::<FoodData>::new());
    let (food_data_version, set_food_data_version) = signal(0u32);
    let (modal_open, set_modal_open) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (food_data_version, set_food_data_version),
        (modal_open, set_modal_open),
    ));
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Load the menu on mount and after each food-data invalidation
    Effect::new(move |_| {
        let version = food_data_version.get();
        spawn_local(async move {
            match api::fetch_foods().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} foods, version={}", loaded.len(), version).into(),
                    );
                    set_foods.set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] Failed to load foods: {}", err).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="container">
            <h1>"Cardápio"</h1>

            <div class="card-grid">
                {move || {
                    foods
                        .get()
                        .into_iter()
                        .map(|food| view! { <Card food=food/> })
                        .collect_view()
                }}
            </div>

            <button class="new-food-btn" on:click=move |_| ctx.open_modal()>
                "Novo"
            </button>

            <Show when=move || modal_open.get()>
                <FoodFormModal/>
            </Show>
        </div>
    }
}
