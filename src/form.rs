//! Form Submission Workflow
//!
//! Explicit state machine behind the "new food" modal. Field edits, submit
//! attempts and mutation results all funnel through [`update`]; the caller
//! executes the returned [`FormCommand`] at the edge.

use crate::api::ApiError;
use crate::models::FoodData;

/// Shown when client-side validation rejects the fields
pub const MSG_INVALID_FIELDS: &str = "Todos os campos devem ser preenchidos corretamente!";
/// Shown for a 400 reporting missing mandatory fields
pub const MSG_MANDATORY_FIELDS: &str = "Preencha todos os campos corretamente.";
/// Shown for a 400 reporting a duplicate image
pub const MSG_DUPLICATE_IMAGE: &str = "A imagem já está cadastrada no sistema.";
/// Shown for any other 400
pub const MSG_BAD_REQUEST: &str = "Erro ao processar a requisição.";
/// Shown for any non-400 failure
pub const MSG_UNEXPECTED: &str = "Erro inesperado. Tente novamente mais tarde.";

/// Field values rejected as if the field were empty. Exactly these three
/// spellings; the check is case-sensitive.
const FORBIDDEN_LITERALS: [&str; 3] = ["null", "NULL", "Null"];

/// View state of the modal form
#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing,
    Submitting,
    ErrorShown(String),
    Closed,
}

/// Raw field contents plus the current view state
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub title: String,
    pub price: String,
    pub image: String,
    pub state: FormState,
}

/// Everything that can happen to the form
#[derive(Debug, Clone)]
pub enum FormEvent {
    TitleEdited(String),
    PriceEdited(String),
    ImageEdited(String),
    SubmitRequested,
    SubmitSucceeded,
    SubmitFailed(ApiError),
    DismissRequested,
}

/// Side effect the caller must run after an [`update`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormCommand {
    None,
    Post(FoodData),
    CloseModal,
}

impl FormModel {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            price: "0".to_string(),
            image: String::new(),
            state: FormState::Editing,
        }
    }

    /// Error message currently shown inline, if any
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FormState::ErrorShown(message) => Some(message),
            _ => None,
        }
    }

    /// Builds the create payload from the current fields, or `None` when any
    /// field fails validation
    fn validated(&self) -> Option<FoodData> {
        if self.title.is_empty() || self.image.is_empty() {
            return None;
        }
        if FORBIDDEN_LITERALS.contains(&self.title.as_str())
            || FORBIDDEN_LITERALS.contains(&self.image.as_str())
        {
            return None;
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| *price > 0.0)?;

        Some(FoodData {
            id: None,
            title: self.title.clone(),
            image: self.image.clone(),
            price,
        })
    }
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Unidirectional update: applies one event, returns the side effect to run
pub fn update(model: &mut FormModel, event: FormEvent) -> FormCommand {
    match event {
        FormEvent::TitleEdited(value) => {
            model.title = value;
            FormCommand::None
        }
        FormEvent::PriceEdited(value) => {
            model.price = value;
            FormCommand::None
        }
        FormEvent::ImageEdited(value) => {
            model.image = value;
            FormCommand::None
        }
        FormEvent::SubmitRequested => {
            // a submit already in flight wins; no overlapping requests
            if model.state == FormState::Submitting {
                return FormCommand::None;
            }
            // each attempt starts with the previous error cleared
            model.state = FormState::Editing;
            match model.validated() {
                Some(food) => {
                    model.state = FormState::Submitting;
                    FormCommand::Post(food)
                }
                None => {
                    model.state = FormState::ErrorShown(MSG_INVALID_FIELDS.to_string());
                    FormCommand::None
                }
            }
        }
        FormEvent::SubmitSucceeded => {
            model.state = FormState::Closed;
            FormCommand::CloseModal
        }
        FormEvent::SubmitFailed(err) => {
            model.state = FormState::ErrorShown(user_message(&err).to_string());
            FormCommand::None
        }
        FormEvent::DismissRequested => {
            model.state = FormState::Closed;
            FormCommand::CloseModal
        }
    }
}

/// Maps a backend failure to the inline message shown to the user
pub fn user_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::BadRequest { message } => {
            if message.contains("Mandatory fields") {
                MSG_MANDATORY_FIELDS
            } else if message.contains("already associated") {
                MSG_DUPLICATE_IMAGE
            } else {
                MSG_BAD_REQUEST
            }
        }
        ApiError::Status { .. } | ApiError::Network(_) => MSG_UNEXPECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_model() -> FormModel {
        FormModel {
            title: "Pizza".to_string(),
            price: "25".to_string(),
            image: "http://x/img.png".to_string(),
            state: FormState::Editing,
        }
    }

    fn submit(model: &mut FormModel) -> FormCommand {
        update(model, FormEvent::SubmitRequested)
    }

    #[test]
    fn test_valid_submit_posts_current_fields() {
        let mut model = filled_model();

        let command = submit(&mut model);

        assert_eq!(model.state, FormState::Submitting);
        assert_eq!(
            command,
            FormCommand::Post(FoodData {
                id: None,
                title: "Pizza".to_string(),
                image: "http://x/img.png".to_string(),
                price: 25.0,
            })
        );
    }

    #[test]
    fn test_empty_title_rejected_without_post() {
        let mut model = filled_model();
        model.title = String::new();

        let command = submit(&mut model);

        assert_eq!(command, FormCommand::None);
        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
    }

    #[test]
    fn test_empty_image_rejected_without_post() {
        let mut model = filled_model();
        model.image = String::new();

        assert_eq!(submit(&mut model), FormCommand::None);
        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
    }

    #[test]
    fn test_initial_model_rejected() {
        let mut model = FormModel::new();

        assert_eq!(submit(&mut model), FormCommand::None);
        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
    }

    #[test]
    fn test_zero_and_negative_price_rejected() {
        for price in ["0", "-3", "0.0"] {
            let mut model = filled_model();
            model.price = price.to_string();

            assert_eq!(submit(&mut model), FormCommand::None, "price {:?}", price);
            assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
        }
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut model = filled_model();
        model.price = "abc".to_string();

        assert_eq!(submit(&mut model), FormCommand::None);
        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
    }

    #[test]
    fn test_forbidden_literals_rejected_in_title_and_image() {
        for literal in ["null", "NULL", "Null"] {
            let mut model = filled_model();
            model.title = literal.to_string();
            assert_eq!(submit(&mut model), FormCommand::None, "title {:?}", literal);

            let mut model = filled_model();
            model.image = literal.to_string();
            assert_eq!(submit(&mut model), FormCommand::None, "image {:?}", literal);
        }
    }

    #[test]
    fn test_forbidden_check_is_case_sensitive() {
        // only the three exact spellings are forbidden
        let mut model = filled_model();
        model.title = "nUll".to_string();

        let command = submit(&mut model);

        assert!(matches!(command, FormCommand::Post(_)));
        assert_eq!(model.state, FormState::Submitting);
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut model = FormModel::new();
        submit(&mut model);
        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));

        // user re-edits the fields and tries again
        update(&mut model, FormEvent::TitleEdited("Pizza".to_string()));
        update(&mut model, FormEvent::PriceEdited("25".to_string()));
        update(&mut model, FormEvent::ImageEdited("http://x/img.png".to_string()));
        let command = submit(&mut model);

        assert!(matches!(command, FormCommand::Post(_)));
        assert_eq!(model.error_message(), None);
    }

    #[test]
    fn test_edits_while_error_shown_keep_the_message() {
        let mut model = FormModel::new();
        submit(&mut model);

        update(&mut model, FormEvent::TitleEdited("Pizza".to_string()));

        assert_eq!(model.error_message(), Some(MSG_INVALID_FIELDS));
        assert_eq!(model.title, "Pizza");
    }

    #[test]
    fn test_confirmed_success_closes_the_modal() {
        let mut model = filled_model();
        submit(&mut model);

        let command = update(&mut model, FormEvent::SubmitSucceeded);

        assert_eq!(model.state, FormState::Closed);
        assert_eq!(command, FormCommand::CloseModal);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let mut model = filled_model();
        assert!(matches!(submit(&mut model), FormCommand::Post(_)));

        assert_eq!(submit(&mut model), FormCommand::None);
        assert_eq!(model.state, FormState::Submitting);
    }

    #[test]
    fn test_dismiss_closes_from_editing_and_error() {
        let mut model = filled_model();
        assert_eq!(
            update(&mut model, FormEvent::DismissRequested),
            FormCommand::CloseModal
        );
        assert_eq!(model.state, FormState::Closed);

        let mut model = FormModel::new();
        submit(&mut model);
        assert_eq!(
            update(&mut model, FormEvent::DismissRequested),
            FormCommand::CloseModal
        );
    }

    #[test]
    fn test_backend_failure_shows_mapped_message() {
        let mut model = filled_model();
        submit(&mut model);

        let err = ApiError::BadRequest {
            message: "The image uri address 'http://x/img.png' is already associated with an existing food.".to_string(),
        };
        let command = update(&mut model, FormEvent::SubmitFailed(err));

        assert_eq!(command, FormCommand::None);
        assert_eq!(model.error_message(), Some(MSG_DUPLICATE_IMAGE));
    }

    #[test]
    fn test_user_message_mapping() {
        let mandatory = ApiError::BadRequest {
            message: "Mandatory fields must not be null or empty.".to_string(),
        };
        let duplicate = ApiError::BadRequest {
            message: "The image uri address 'x' is already associated with an existing food.".to_string(),
        };
        let other_400 = ApiError::BadRequest {
            message: "JSON parse error".to_string(),
        };
        let server_error = ApiError::Status { status: 500 };
        let offline = ApiError::Network("error sending request".to_string());

        assert_eq!(user_message(&mandatory), MSG_MANDATORY_FIELDS);
        assert_eq!(user_message(&duplicate), MSG_DUPLICATE_IMAGE);
        assert_eq!(user_message(&other_400), MSG_BAD_REQUEST);
        assert_eq!(user_message(&server_error), MSG_UNEXPECTED);
        assert_eq!(user_message(&offline), MSG_UNEXPECTED);
    }
}
