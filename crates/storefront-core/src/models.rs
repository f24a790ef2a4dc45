//! Catalog Models
//!
//! Data structures matching the product API.

use serde::{Deserialize, Serialize};

/// Average review score and number of reviews
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u32,
}

/// Product data structure (matches the API payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// Price in the API's base currency (USD)
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Description, empty when the API omitted it
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Average rating, 0 when unrated
    pub fn rating_rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_product() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating { rate: 3.9, count: 120 }));
        assert_eq!(product.rating_rate(), 3.9);
    }

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id": 2, "title": "Plain", "price": 5, "category": "misc", "image": ""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description(), "");
        assert_eq!(product.rating, None);
        assert_eq!(product.rating_rate(), 0.0);
        assert_eq!(product.price, 5.0);
    }

    #[test]
    fn test_null_description() {
        let json = r#"{"id": 3, "title": "T", "price": 1.5, "description": null, "category": "c", "image": ""}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description(), "");
    }
}
