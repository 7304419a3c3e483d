//! Backend REST Client
//!
//! Frontend bindings to the digital-menu REST API.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::FoodData;

/// Backend base URL
pub const API_URL: &str = "http://localhost:8080";

/// Extra attempts after a failed create request
const CREATE_RETRIES: u32 = 2;

/// Failure of a backend call, split the way the UI reports it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Backend rejected the payload (HTTP 400); message comes from the response body
    #[error("bad request: {message}")]
    BadRequest { message: String },
    /// Any other non-success HTTP status
    #[error("unexpected status {status}")]
    Status { status: u16 },
    /// Transport-level failure before any status was received
    #[error("network error: {0}")]
    Network(String),
}

/// Error payload the backend attaches to 400 responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

// ========================
// Food Endpoints
// ========================

/// POST a new food item, retrying up to [`CREATE_RETRIES`] times before
/// surfacing the last error
pub async fn create_food(food: &FoodData) -> Result<(), ApiError> {
    let mut attempt = 0;
    loop {
        match post_food(food).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt < CREATE_RETRIES => {
                attempt += 1;
                web_sys::console::warn_1(
                    &format!("[API] create_food attempt {} failed: {}", attempt, err).into(),
                );
            }
            Err(err) => return Err(err),
        }
    }
}

async fn post_food(food: &FoodData) -> Result<(), ApiError> {
    let response = reqwest::Client::new()
        .post(format!("{}/foods", API_URL))
        .json(food)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::BAD_REQUEST {
        // message is what the UI pattern-matches on; anything else in the
        // body is ignored
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        Err(ApiError::BadRequest { message })
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

/// GET the full menu; an empty table answers 204 with no body
pub async fn fetch_foods() -> Result<Vec<FoodData>, ApiError> {
    let response = reqwest::Client::new()
        .get(format!("{}/foods", API_URL))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        Ok(Vec::new())
    } else if status.is_success() {
        response
            .json::<Vec<FoodData>>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}
