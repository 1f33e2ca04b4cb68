//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    actions::{ActionParseError, CartAction},
    cart::{CartItem, CartState, SelectionSet},
    catalog::{Catalog, CatalogError},
    controller::CartController,
    discounts::{Discount, DiscountError},
    pricing::{PricingError, total_items, total_money, total_price},
    products::{Product, ProductId},
    view::{CartView, ProductRow, ViewError},
};
