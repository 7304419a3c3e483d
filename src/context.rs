//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Version of the food-data query group - read; consumers refetch on change
    pub food_data_version: ReadSignal<u32>,
    /// Version of the food-data query group - write
    set_food_data_version: WriteSignal<u32>,
    /// Whether the "new food" modal is shown - read
    pub modal_open: ReadSignal<bool>,
    /// Whether the "new food" modal is shown - write
    set_modal_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        food_data_version: (ReadSignal<u32>, WriteSignal<u32>),
        modal_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            food_data_version: food_data_version.0,
            set_food_data_version: food_data_version.1,
            modal_open: modal_open.0,
            set_modal_open: modal_open.1,
        }
    }

    /// Invalidate the food-data query group; every view keyed on it refetches
    pub fn invalidate_food_data(&self) {
        self.set_food_data_version.update(|v| *v += 1);
    }

    /// Show the "new food" modal
    pub fn open_modal(&self) {
        self.set_modal_open.set(true);
    }

    /// Hide the "new food" modal
    pub fn close_modal(&self) {
        self.set_modal_open.set(false);
    }
}
