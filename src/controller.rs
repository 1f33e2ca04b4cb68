//! Controller
//!
//! [`CartController`] owns the catalog and the cart state. The view layer calls it in
//! response to user input and re-renders from [`CartController::view`]. Mutations take
//! `&mut self`, so each one completes before the next can start.

use tracing::debug;

use crate::{
    actions::CartAction,
    cart::{CartState, SelectionSet},
    catalog::Catalog,
    products::Product,
    view::{CartView, ViewError},
};

/// Cart controller
#[derive(Debug, Clone, Default)]
pub struct CartController {
    catalog: Catalog,
    state: CartState,
}

impl CartController {
    /// Create a controller with an empty cart over `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: CartState::new(),
        }
    }

    /// Apply a user action.
    #[tracing::instrument(level = "debug", skip_all, fields(action = %action))]
    pub fn dispatch(&mut self, action: &CartAction) {
        self.state = std::mem::take(&mut self.state).apply(action, &self.catalog);

        debug!(
            lines = self.state.len(),
            items = self.state.total_items_in_cart(),
            selected = self.state.checkout_count(),
            "action applied"
        );
    }

    /// Apply actions in order.
    pub fn dispatch_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a CartAction>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Add one unit of `product`; see [`CartState::add_to_cart`].
    pub fn add_to_cart(&mut self, product: &Product) {
        self.dispatch(&CartAction::Add(product.clone()));
    }

    /// Remove the line for `id` and deselect it.
    pub fn remove_from_cart(&mut self, id: &str) {
        self.dispatch(&CartAction::Remove(id.into()));
    }

    /// Flip the selection of `id`.
    pub fn toggle_selection(&mut self, id: &str) {
        self.dispatch(&CartAction::ToggleSelection(id.into()));
    }

    /// Remove every selected line and clear the selection.
    pub fn delete_selected_items(&mut self) {
        self.dispatch(&CartAction::DeleteSelected);
    }

    /// The "+" control for `id`.
    pub fn increment(&mut self, id: &str) {
        self.dispatch(&CartAction::Increment(id.into()));
    }

    /// The "-" control for `id`; drops the whole line.
    pub fn decrement(&mut self, id: &str) {
        self.dispatch(&CartAction::Decrement(id.into()));
    }

    /// Sum of discounted line totals, unrounded.
    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    /// Sum of quantities across lines.
    pub fn total_items_in_cart(&self) -> u64 {
        self.state.total_items_in_cart()
    }

    /// The selection set.
    pub fn selected(&self) -> &SelectionSet {
        self.state.selected()
    }

    /// Current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// The catalog products are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Snapshot for rendering.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] if a line added through [`Self::add_to_cart`] is priced in
    /// a currency other than the catalog's.
    pub fn view(&self) -> Result<CartView, ViewError> {
        CartView::build(&self.catalog, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn starts_empty() {
        let controller = CartController::default();

        assert!(controller.state().is_empty());
        assert!(controller.selected().is_empty());
        assert_eq!(controller.catalog().len(), 4);
    }

    #[test]
    fn dispatch_all_applies_in_order() {
        let mut controller = CartController::default();

        controller.dispatch_all(&[
            CartAction::Increment("4".into()),
            CartAction::ToggleSelection("4".into()),
            CartAction::Increment("3".into()),
            CartAction::DeleteSelected,
        ]);

        assert_eq!(controller.state().quantity_of("4"), 0);
        assert_eq!(controller.state().quantity_of("3"), 1);
        assert_eq!(controller.total_items_in_cart(), 1);
    }

    #[test]
    fn operations_delegate_to_state() {
        let mut controller = CartController::default();

        controller.increment("1");
        controller.increment("1");
        controller.toggle_selection("1");
        controller.remove_from_cart("1");

        assert!(controller.state().is_empty());
        assert!(controller.selected().is_empty());
    }

    #[test]
    fn add_to_cart_accepts_products_outside_the_catalog() {
        let mut controller = CartController::default();
        let gift = Product::new("gift", "Gift Card", Money::from_minor(2_500, GBP));

        controller.add_to_cart(&gift);

        assert_eq!(controller.state().quantity_of("gift"), 1);
        assert!(matches!(controller.view(), Err(ViewError::Pricing(_))));
    }

    #[test]
    fn add_to_cart_matches_dispatching_add() -> TestResult {
        let candle = Catalog::default().get("1").ok_or("missing candle")?.clone();

        let mut direct = CartController::default();
        direct.add_to_cart(&candle);
        direct.add_to_cart(&candle);

        let mut dispatched = CartController::default();
        dispatched.dispatch_all(&[CartAction::Add(candle.clone()), CartAction::Add(candle)]);

        assert_eq!(direct.state(), dispatched.state());
        assert_eq!(direct.state().quantity_of("1"), 2);

        Ok(())
    }

    #[test]
    fn view_reflects_state() -> TestResult {
        let mut controller = CartController::default();
        controller.increment("2");
        controller.toggle_selection("2");

        let view = controller.view()?;

        assert_eq!(view.title(), "Shopping Cart (1)");
        assert_eq!(view.checkout_label(), "Checkout (1)");

        Ok(())
    }
}
