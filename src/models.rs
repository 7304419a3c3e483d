//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Food item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodData {
    /// Assigned by the backend; absent on create requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub image: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_omits_id() {
        let food = FoodData {
            id: None,
            title: "Pizza".to_string(),
            image: "http://x/img.png".to_string(),
            price: 25.0,
        };

        let body = serde_json::to_value(&food).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "title": "Pizza",
                "image": "http://x/img.png",
                "price": 25.0,
            })
        );
    }

    #[test]
    fn test_response_with_id_deserializes() {
        let json = r#"{"id":7,"title":"Pizza","image":"http://x/img.png","price":25.0}"#;

        let food: FoodData = serde_json::from_str(json).unwrap();

        assert_eq!(food.id, Some(7));
        assert_eq!(food.title, "Pizza");
        assert_eq!(food.price, 25.0);
    }
}
