//! View
//!
//! A render-ready snapshot of the cart screen. The presentation layer rebuilds a
//! [`CartView`] after every action and draws from it; [`CartView::write_to`] draws it
//! to a terminal.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::CartState,
    catalog::Catalog,
    pricing::{PricingError, total_money},
    products::ProductId,
};

/// Errors that can occur when building or writing a view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Error calculating the money total.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One catalog product as shown on the cart screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Product id
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Money<'static, Currency>,

    /// Discount caption, e.g. `15% Discount`
    pub discount_label: Option<String>,

    /// Units in the cart, zero when the product has no line
    pub quantity: u32,

    /// Whether the checkbox is ticked
    pub selected: bool,
}

/// Cart screen snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    items_in_cart: u64,
    rows: Vec<ProductRow>,
    total: Money<'static, Currency>,
    total_price: f64,
    checkout_count: usize,
}

impl CartView {
    /// Build the view of `state` over the products listed in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] if the cart holds lines priced in a currency other than
    /// the catalog's.
    pub fn build(catalog: &Catalog, state: &CartState) -> Result<Self, ViewError> {
        let rows = catalog
            .list_products()
            .iter()
            .map(|product| ProductRow {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                discount_label: product.discount.label(),
                quantity: state.quantity_of(product.id.as_str()),
                selected: state.is_selected(product.id.as_str()),
            })
            .collect();

        Ok(CartView {
            items_in_cart: state.total_items_in_cart(),
            rows,
            total: total_money(state.items(), catalog.currency())?,
            total_price: state.total_price(),
            checkout_count: state.checkout_count(),
        })
    }

    /// Screen title, e.g. `Shopping Cart (3)`.
    pub fn title(&self) -> String {
        format!("Shopping Cart ({})", self.items_in_cart)
    }

    /// Checkout button caption, e.g. `Checkout (1)`.
    pub fn checkout_label(&self) -> String {
        format!("Checkout ({})", self.checkout_count)
    }

    /// Total units in the cart.
    pub fn items_in_cart(&self) -> u64 {
        self.items_in_cart
    }

    /// Rows in catalog order.
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    /// Row for `id`, if the catalog lists it.
    pub fn row(&self, id: &str) -> Option<&ProductRow> {
        self.rows.iter().find(|row| row.id.as_str() == id)
    }

    /// Total rounded to the currency's minor units.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Unrounded total, as reported by the cart.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Number of selected products.
    pub fn checkout_count(&self) -> usize {
        self.checkout_count
    }

    /// Writes the view as a table followed by the total and checkout lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ViewError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Price", "Discount", "Qty"]);

        for row in &self.rows {
            builder.push_record([
                (if row.selected { "✓" } else { " " }).to_string(),
                row.name.clone(),
                row.price.to_string(),
                row.discount_label.clone().unwrap_or_default(),
                row.quantity.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());
        table.modify(Columns::new(4..5), Alignment::right());

        writeln!(out, "\n {}\n\n{table}", self.title()).map_err(|_err| ViewError::IO)?;

        writeln!(
            out,
            " \x1b[1mTotal:\x1b[0m {}    {}\n",
            self.total,
            self.checkout_label()
        )
        .map_err(|_err| ViewError::IO)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    fn scenario_state(catalog: &Catalog) -> CartState {
        let mut state = CartState::new();
        state.increment("1", catalog);
        state.increment("2", catalog);
        state.increment("1", catalog);
        state.toggle_selection("2");
        state
    }

    #[test]
    fn build_reports_title_and_checkout() -> TestResult {
        let catalog = Catalog::default();
        let view = CartView::build(&catalog, &scenario_state(&catalog))?;

        assert_eq!(view.title(), "Shopping Cart (3)");
        assert_eq!(view.checkout_label(), "Checkout (1)");
        assert_eq!(view.total(), Money::from_minor(2_260, USD));
        assert!((view.total_price() - 22.6).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn build_lists_every_catalog_product() -> TestResult {
        let catalog = Catalog::default();
        let view = CartView::build(&catalog, &scenario_state(&catalog))?;

        let quantities: Vec<(&str, u32, bool)> = view
            .rows()
            .iter()
            .map(|row| (row.id.as_str(), row.quantity, row.selected))
            .collect();

        assert_eq!(
            quantities,
            [("1", 2, false), ("2", 1, true), ("3", 0, false), ("4", 0, false)]
        );

        let nuggets = view.row("3").ok_or("missing nuggets row")?;
        assert_eq!(nuggets.discount_label, None);

        let candle = view.row("1").ok_or("missing candle row")?;
        assert_eq!(candle.discount_label.as_deref(), Some("15% Discount"));

        Ok(())
    }

    #[test]
    fn empty_cart_view() -> TestResult {
        let catalog = Catalog::default();
        let view = CartView::build(&catalog, &CartState::new())?;

        assert_eq!(view.title(), "Shopping Cart (0)");
        assert_eq!(view.total(), Money::from_minor(0, USD));
        assert!(view.rows().iter().all(|row| row.quantity == 0));

        Ok(())
    }

    #[test]
    fn write_to_renders_rows_and_summary() -> TestResult {
        let catalog = Catalog::default();
        let view = CartView::build(&catalog, &scenario_state(&catalog))?;

        let mut out = Vec::new();
        view.write_to(&mut out)?;
        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Shopping Cart (3)"));
        assert!(rendered.contains("Candle"));
        assert!(rendered.contains("20% Discount"));
        assert!(rendered.contains("$22.60"));
        assert!(rendered.contains("Checkout (1)"));

        Ok(())
    }
}
