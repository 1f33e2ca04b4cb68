//! Pricing
//!
//! Cart totals. [`total_price`] is the figure the cart reports: floating point, each
//! line's discounted unit price multiplied by its quantity and accumulated in cart
//! order, with no rounding. [`total_money`] computes the same sum exactly and rounds it
//! to the currency's minor units for display.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::cart::CartItem;

/// Errors that can occur while calculating a money total.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line's currency differs from the requested currency (index, item currency, total currency).
    #[error("Line {0} has currency {1}, but the total is in {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Decimal arithmetic overflowed.
    #[error("total overflowed")]
    Overflow,
}

/// Discounted unit price times quantity.
pub fn line_total(item: &CartItem) -> f64 {
    let discounted_price = item.unit_price() * item.discount.multiplier();

    discounted_price * f64::from(item.quantity())
}

/// Calculates the total price of the cart lines; zero for no lines.
pub fn total_price(items: &[CartItem]) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + line_total(item))
}

/// Sum of quantities across lines.
pub fn total_items(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity())).sum()
}

/// Calculates the total price of the cart lines as money, rounded half away from zero
/// to the currency's minor units.
///
/// # Errors
///
/// - [`PricingError::CurrencyMismatch`]: a line is priced in another currency.
/// - [`PricingError::Overflow`]: the exact total cannot be represented.
pub fn total_money(
    items: &[CartItem],
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let total = items
        .iter()
        .enumerate()
        .try_fold(Decimal::ZERO, |acc, (i, item)| {
            let item_currency = item.price.currency();

            if item_currency != currency {
                return Err(PricingError::CurrencyMismatch(
                    i,
                    item_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            item.discounted_amount()
                .checked_mul(Decimal::from(item.quantity()))
                .and_then(|line| acc.checked_add(line))
                .ok_or(PricingError::Overflow)
        })?;

    let rounded =
        total.round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);

    Ok(Money::from_decimal(rounded, currency))
}
