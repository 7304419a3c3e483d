//! Card Component
//!
//! Pure display of one menu item.

use leptos::prelude::*;

use crate::models::FoodData;

/// Price label shown on the card; no decimal normalization
fn price_label(price: f64) -> String {
    format!("R$ {}", price)
}

/// Single menu item card
#[component]
pub fn Card(food: FoodData) -> impl IntoView {
    let FoodData { title, image, price, .. } = food;
    view! {
        <div class="card">
            <img src=image/>
            <h3>{title}</h3>
            <p><b>"Preço: "</b>{price_label(price)}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label_keeps_raw_number() {
        assert_eq!(price_label(25.0), "R$ 25");
        assert_eq!(price_label(25.5), "R$ 25.5");
    }
}
