//! Products

use std::{borrow::Borrow, fmt};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::discounts::Discount;

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Discount applied to the unit price
    pub discount: Discount,

    /// Image reference, opaque to the cart
    pub image: Option<String>,
}

impl Product {
    /// Create an undiscounted product without an image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money<'static, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount: Discount::None,
            image: None,
        }
    }

    /// Set the product discount.
    #[must_use]
    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = discount;
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Unit price after the discount, unrounded.
    pub fn discounted_amount(&self) -> Decimal {
        self.discount.apply(*self.price.amount())
    }

    /// Unit price as a float, the representation totals are accumulated in.
    pub fn unit_price(&self) -> f64 {
        self.price.amount().to_f64().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let product = Product::new("1", "Candle", Money::from_minor(1_000, USD))
            .with_discount(Discount::PercentOff(15))
            .with_image("images/candle.jpeg");

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.discount, Discount::PercentOff(15));
        assert_eq!(product.image.as_deref(), Some("images/candle.jpeg"));
    }

    #[test]
    fn discounted_amount_applies_discount() {
        let product = Product::new("2", "Red Apple", Money::from_minor(700, USD))
            .with_discount(Discount::PercentOff(20));

        assert_eq!(product.discounted_amount(), Decimal::new(56, 1));
    }

    #[test]
    fn unit_price_converts_major_units() {
        let product = Product::new("3", "Nuggets", Money::from_minor(1_250, USD));

        assert!((product.unit_price() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn product_id_borrows_as_str() {
        let id = ProductId::from("4");
        let borrowed: &str = id.borrow();

        assert_eq!(borrowed, "4");
        assert_eq!(id.to_string(), "4");
    }
}
