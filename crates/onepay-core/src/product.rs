//! # Product Definition
//!
//! The single product this demo sells, loaded from `config/product.toml`.

use serde::{Deserialize, Serialize};

/// The product offered at checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display name
    pub name: String,

    /// Short description shown on the landing page
    #[serde(default)]
    pub description: String,

    /// Unit price in the smallest currency unit (cents for USD)
    pub unit_amount: i64,

    /// Lowercase ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "usd".to_string()
}

impl Product {
    /// Create a product with an explicit price in cents
    pub fn new(name: impl Into<String>, unit_amount: i64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            unit_amount,
            currency: default_currency(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// The built-in $10.00 test product used when no config file is present
    pub fn default_product() -> Self {
        Product::new("Hello World Payment", 1000).with_description("Test product for $10.00")
    }

    /// Format the price for display (e.g., "$10.00")
    pub fn display_price(&self) -> String {
        let symbol = match self.currency.as_str() {
            "usd" => "$",
            "eur" => "€",
            "gbp" => "£",
            other => return format!("{:.2} {}", self.unit_amount as f64 / 100.0, other),
        };
        format!("{}{:.2}", symbol, self.unit_amount as f64 / 100.0)
    }

    /// Load the product from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_product() {
        let product = Product::default_product();
        assert_eq!(product.name, "Hello World Payment");
        assert_eq!(product.unit_amount, 1000);
        assert_eq!(product.currency, "usd");
        assert_eq!(product.display_price(), "$10.00");
    }

    #[test]
    fn test_from_toml() {
        let product = Product::from_toml(
            r#"
            name = "Sticker Pack"
            description = "A pack of stickers"
            unit_amount = 499
            "#,
        )
        .unwrap();

        assert_eq!(product.name, "Sticker Pack");
        assert_eq!(product.unit_amount, 499);
        assert_eq!(product.currency, "usd");
        assert_eq!(product.display_price(), "$4.99");
    }

    #[test]
    fn test_display_price_other_currency() {
        let mut product = Product::new("Widget", 1250);
        product.currency = "chf".into();
        assert_eq!(product.display_price(), "12.50 chf");
    }
}
