//! UI Components
//!
//! Reusable Leptos components.

mod card;
mod food_form_modal;
mod labeled_input;

pub use card::Card;
pub use food_form_modal::FoodFormModal;
pub use labeled_input::LabeledInput;
