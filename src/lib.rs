//! Trolley
//!
//! Trolley is the state core of a single-screen shopping cart: a read-only product
//! catalog, a cart with quantities and a selection for bulk deletion, the totals the
//! screen shows, and a render-ready view of it all.

pub mod actions;
pub mod cart;
pub mod catalog;
pub mod controller;
pub mod discounts;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod view;
