//! Actions
//!
//! User intents and the reducer that turns a cart state and an action into the next
//! cart state.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    cart::CartState,
    catalog::Catalog,
    products::{Product, ProductId},
};

/// Errors parsing a textual action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionParseError {
    /// The verb is not one of the known actions.
    #[error("unknown action `{0}`")]
    UnknownVerb(String),

    /// The action needs a product id but none was given.
    #[error("action `{0}` needs a product id, e.g. `{0}:1`")]
    MissingId(String),

    /// The action takes no product id but one was given.
    #[error("action `{0}` does not take a product id")]
    UnexpectedId(String),
}

/// A user action on the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product, which need not be listed in the catalog.
    Add(Product),

    /// The "+" control: add one unit of a catalog product.
    Increment(ProductId),

    /// The "-" control: drop the product's line.
    Decrement(ProductId),

    /// Remove the product's line and deselect it.
    Remove(ProductId),

    /// Flip the product's selection.
    ToggleSelection(ProductId),

    /// Remove every selected line and clear the selection.
    DeleteSelected,
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartAction::Add(product) => write!(f, "add:{}", product.id),
            CartAction::Increment(id) => write!(f, "add:{id}"),
            CartAction::Decrement(id) => write!(f, "dec:{id}"),
            CartAction::Remove(id) => write!(f, "remove:{id}"),
            CartAction::ToggleSelection(id) => write!(f, "toggle:{id}"),
            CartAction::DeleteSelected => f.write_str("delete-selected"),
        }
    }
}

impl FromStr for CartAction {
    type Err = ActionParseError;

    /// Parses `verb:id` or `delete-selected`.
    ///
    /// Verbs are `add` (alias `inc`), `dec`, `remove` (alias `rm`) and `toggle` (alias
    /// `select`). The controls' `+`/`-` labels are not verbs; a leading `-` reads as a
    /// flag on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, id) = match s.split_once(':') {
            Some((verb, id)) => (verb.trim(), Some(id.trim()).filter(|id| !id.is_empty())),
            None => (s, None),
        };

        let with_id = |build: fn(ProductId) -> CartAction| {
            id.map(|id| build(ProductId::from(id)))
                .ok_or_else(|| ActionParseError::MissingId(verb.to_string()))
        };

        match verb {
            "add" | "inc" => with_id(CartAction::Increment),
            "dec" => with_id(CartAction::Decrement),
            "remove" | "rm" => with_id(CartAction::Remove),
            "toggle" | "select" => with_id(CartAction::ToggleSelection),
            "delete-selected" => match id {
                Some(_) => Err(ActionParseError::UnexpectedId(verb.to_string())),
                None => Ok(CartAction::DeleteSelected),
            },
            other => Err(ActionParseError::UnknownVerb(other.to_string())),
        }
    }
}

impl CartState {
    /// Apply `action` and return the resulting state.
    ///
    /// Actions naming ids that are not in the cart or catalog leave the state unchanged.
    #[must_use]
    pub fn apply(mut self, action: &CartAction, catalog: &Catalog) -> Self {
        match action {
            CartAction::Add(product) => self.add_to_cart(product),
            CartAction::Increment(id) => self.increment(id.as_str(), catalog),
            CartAction::Decrement(id) => self.decrement(id.as_str()),
            CartAction::Remove(id) => self.remove_from_cart(id.as_str()),
            CartAction::ToggleSelection(id) => self.toggle_selection(id.as_str()),
            CartAction::DeleteSelected => self.delete_selected_items(),
        }

        self
    }
}
