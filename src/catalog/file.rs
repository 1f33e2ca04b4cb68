//! Catalog Files
//!
//! YAML representation of a catalog:
//!
//! ```yaml
//! products:
//!   - id: "1"
//!     name: Candle
//!     price: "10 USD"
//!     discount: 15
//!     image: images/candle.jpeg
//! ```

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::{Catalog, CatalogError},
    discounts::Discount,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Products in listing order
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

/// Product entry
#[derive(Debug, Deserialize)]
pub struct ProductEntry {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price (e.g., "2.99 USD")
    pub price: String,

    /// Discount in percent points
    #[serde(default)]
    pub discount: Option<u32>,

    /// Image reference
    #[serde(default)]
    pub image: Option<String>,
}

impl TryFrom<ProductEntry> for Product {
    type Error = CatalogError;

    fn try_from(entry: ProductEntry) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&entry.price)?;

        let discount =
            Discount::try_from(entry.discount).map_err(|source| CatalogError::Discount {
                id: entry.id.clone(),
                source,
            })?;

        Ok(Product {
            id: entry.id,
            name: entry.name,
            price: Money::from_minor(minor_units, currency),
            discount,
            image: entry.image,
        })
    }
}

/// The catalog currency is taken from the first product. The file format has no
/// currency field, so a file with no products yields an empty USD catalog.
impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let products = file
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let Some(currency) = products.first().map(|product| product.price.currency()) else {
            return Ok(Catalog::new(USD));
        };

        Catalog::with_products(products, currency)
    }
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the currency code is not recognized, or if the amount is not a
/// non-negative decimal that fits the currency's minor units exactly.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), CatalogError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(CatalogError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(CatalogError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .ok()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?
        .normalize();

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(CatalogError::InvalidPrice(format!(
            "Amount must not be negative, got: {s}"
        )));
    }

    if amount.scale() > currency.exponent {
        return Err(CatalogError::InvalidPrice(format!(
            "{currency_code} allows at most {} decimal places, got: {s}",
            currency.exponent
        )));
    }

    let mut scaled = amount;
    scaled.rescale(currency.exponent);

    let minor_units = i64::try_from(scaled.mantissa())
        .ok()
        .ok_or_else(|| CatalogError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
