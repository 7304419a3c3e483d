//! Create-Food Mutation
//!
//! Lifecycle wrapper around the create call: pending/success flags, retries
//! inside the REST client, food-data invalidation on confirmed success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::AppContext;
use crate::models::FoodData;

/// Handle returned by [`use_create_food`]
#[derive(Clone, Copy)]
pub struct CreateFoodMutation {
    /// True while a request (including retries) is in flight
    pub pending: ReadSignal<bool>,
    /// True once a request has completed successfully
    pub success: ReadSignal<bool>,
    dispatch: Callback<FoodData>,
}

impl CreateFoodMutation {
    /// POST `food` to the backend; the settled callback fires when it completes
    pub fn mutate(&self, food: FoodData) {
        self.dispatch.run(food);
    }
}

/// Create the mutation. `on_settled` fires exactly once per [`mutate`] call,
/// after the lifecycle flags and the cache invalidation have been applied.
///
/// [`mutate`]: CreateFoodMutation::mutate
pub fn use_create_food(on_settled: Callback<Result<(), ApiError>>) -> CreateFoodMutation {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (pending, set_pending) = signal(false);
    let (success, set_success) = signal(false);

    let dispatch = Callback::new(move |food: FoodData| {
        set_pending.set(true);
        set_success.set(false);
        spawn_local(async move {
            let result = api::create_food(&food).await;
            // the modal may have been dismissed mid-flight; disposed signals
            // are skipped rather than written
            set_pending.try_set(false);
            if result.is_ok() {
                set_success.try_set(true);
                ctx.invalidate_food_data();
            }
            on_settled.run(result);
        });
    });

    CreateFoodMutation {
        pending,
        success,
        dispatch,
    }
}
