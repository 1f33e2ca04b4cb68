//! Cart
//!
//! Cart lines and the selection set. Every operation is total: ids that are not in the
//! cart or catalog are ignored rather than reported.

use std::ops::Deref;

use crate::{catalog::Catalog, pricing, products::Product};

pub mod selection;

pub use selection::SelectionSet;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    /// Creates a line holding a single unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units on this line, never zero.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total: discounted unit price times quantity.
    pub fn total(&self) -> f64 {
        pricing::line_total(self)
    }
}

impl Deref for CartItem {
    type Target = Product;

    fn deref(&self) -> &Self::Target {
        &self.product
    }
}

/// Cart contents and selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
    selected: SelectionSet,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// An existing line for the same id keeps its fields and gains one unit; otherwise a
    /// new line with a single unit is appended.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.id == product.id)
        {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem::new(product.clone()));
        }
    }

    /// Remove the line for `id` and deselect it.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.items.retain(|item| item.id.as_str() != id);
        self.selected.remove(id);
    }

    /// Select `id`, or deselect it if already selected.
    pub fn toggle_selection(&mut self, id: &str) {
        self.selected.toggle(id);
    }

    /// Remove every selected line and clear the selection.
    pub fn delete_selected_items(&mut self) {
        let selected = &self.selected;
        self.items.retain(|item| !selected.contains(item.id.as_str()));
        self.selected.clear();
    }

    /// The "+" control: add one unit of the catalog product `id`.
    ///
    /// Ids the catalog does not list are ignored.
    pub fn increment(&mut self, id: &str, catalog: &Catalog) {
        if let Some(product) = catalog.get(id) {
            self.add_to_cart(product);
        }
    }

    /// The "-" control.
    ///
    /// Drops the whole line rather than a single unit, and deselects `id`.
    pub fn decrement(&mut self, id: &str) {
        self.remove_from_cart(id);
    }

    /// Sum of discounted line totals.
    pub fn total_price(&self) -> f64 {
        pricing::total_price(&self.items)
    }

    /// Sum of quantities across all lines.
    pub fn total_items_in_cart(&self) -> u64 {
        pricing::total_items(&self.items)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Line for `id`, if any.
    pub fn line(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Units of `id` in the cart, zero when it has no line.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.line(id).map_or(0, CartItem::quantity)
    }

    /// The selection set.
    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// Check if `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids, shown on the checkout button.
    pub fn checkout_count(&self) -> usize {
        self.selected.len()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
