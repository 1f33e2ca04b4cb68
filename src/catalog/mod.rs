//! Catalog
//!
//! The fixed, ordered listing of purchasable products. A catalog is built once,
//! either from the built-in listing or from a YAML file, and is read-only afterwards.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    discounts::{Discount, DiscountError},
    products::{Product, ProductId},
};

pub mod file;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading a catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A product has a price below zero
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    /// A product has an invalid discount
    #[error("Product {id} has an invalid discount: {source}")]
    Discount {
        /// Offending product
        id: ProductId,

        /// Underlying discount error
        source: DiscountError,
    },

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency (product, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            products: Vec::new(),
            index: FxHashMap::default(),
            currency,
        }
    }

    /// Create a catalog with the given products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if two products share an id, a price is negative,
    /// or a product is priced in another currency.
    pub fn with_products(
        products: impl Into<Vec<Product>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    product.id.clone(),
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if product.price.amount().is_sign_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }

            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        debug!(products = products.len(), currency = currency.iso_alpha_code, "catalog built");

        Ok(Catalog {
            products,
            index,
            currency,
        })
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or if its
    /// products are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&contents)?;

        info!(path = %path.display(), products = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the YAML is malformed or its products are invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let fixture: file::CatalogFile = serde_norway::from_str(yaml)?;

        fixture.try_into()
    }

    /// All products, in listing order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// Check if the catalog lists a product.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of listed products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Default for Catalog {
    /// The built-in listing.
    fn default() -> Self {
        let products = vec![
            Product::new("1", "Candle", Money::from_minor(1_000, iso::USD))
                .with_discount(Discount::PercentOff(15))
                .with_image("images/candle.jpeg"),
            Product::new("2", "Red Apple", Money::from_minor(700, iso::USD))
                .with_discount(Discount::PercentOff(20))
                .with_image("images/redapple.jpeg"),
            Product::new("3", "Nuggets", Money::from_minor(1_200, iso::USD))
                .with_image("images/nugg.jpeg"),
            Product::new("4", "Banana", Money::from_minor(600, iso::USD))
                .with_discount(Discount::PercentOff(10))
                .with_image("images/banana.png"),
        ];

        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        Catalog {
            products,
            index,
            currency: iso::USD,
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
