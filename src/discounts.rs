//! Discounts

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when constructing a discount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The percentage is not in the range `0..100`.
    #[error("discount of {0}% is outside the range 0..100")]
    OutOfRange(u32),
}

/// Per-product discount.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Discount {
    /// Sold at the unit price.
    #[default]
    None,

    /// Sold at the unit price less this many percent, always below 100.
    PercentOff(u8),
}

impl Discount {
    /// Create a percentage discount.
    ///
    /// Zero percent is the same as no discount and yields [`Discount::None`].
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] if `percent` is 100 or more.
    pub fn percent_off(percent: u32) -> Result<Self, DiscountError> {
        match u8::try_from(percent) {
            Ok(0) => Ok(Discount::None),
            Ok(percent) if percent < 100 => Ok(Discount::PercentOff(percent)),
            _ => Err(DiscountError::OutOfRange(percent)),
        }
    }

    /// The discount in percent points, if any.
    pub fn percent(self) -> Option<u8> {
        match self {
            Discount::None => None,
            Discount::PercentOff(percent) => Some(percent),
        }
    }

    /// Whether the discount changes the price at all.
    pub fn is_none(self) -> bool {
        self.percent().is_none()
    }

    /// Floating point factor applied to the unit price: `(100 - percent) / 100`.
    pub fn multiplier(self) -> f64 {
        match self {
            Discount::None => 1.0,
            Discount::PercentOff(percent) => f64::from(100 - percent) / 100.0,
        }
    }

    /// The discount as a fraction of the price (15% is `0.15`).
    pub fn fraction(self) -> Percentage {
        let points = self.percent().map_or(0, i64::from);

        Percentage::from(Decimal::new(points, 2))
    }

    /// Apply the discount to an exact amount.
    pub fn apply(self, amount: Decimal) -> Decimal {
        if self.is_none() {
            return amount;
        }

        amount - self.fraction() * amount
    }

    /// Caption shown next to a discounted product, e.g. `15% Discount`.
    pub fn label(self) -> Option<String> {
        self.percent().map(|percent| format!("{percent}% Discount"))
    }
}

impl TryFrom<Option<u32>> for Discount {
    type Error = DiscountError;

    fn try_from(percent: Option<u32>) -> Result<Self, Self::Error> {
        percent.map_or(Ok(Discount::None), Discount::percent_off)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn percent_off_accepts_values_below_one_hundred() -> TestResult {
        assert_eq!(Discount::percent_off(15)?, Discount::PercentOff(15));
        assert_eq!(Discount::percent_off(99)?, Discount::PercentOff(99));

        Ok(())
    }

    #[test]
    fn percent_off_zero_is_no_discount() -> TestResult {
        assert_eq!(Discount::percent_off(0)?, Discount::None);

        Ok(())
    }

    #[test]
    fn percent_off_rejects_one_hundred_and_above() {
        assert_eq!(
            Discount::percent_off(100),
            Err(DiscountError::OutOfRange(100))
        );
        assert_eq!(
            Discount::percent_off(1_000),
            Err(DiscountError::OutOfRange(1_000))
        );
    }

    #[test]
    fn multiplier_matches_remaining_share() {
        assert_eq!(Discount::None.multiplier().to_bits(), 1.0_f64.to_bits());
        assert_eq!(
            Discount::PercentOff(15).multiplier().to_bits(),
            (85.0_f64 / 100.0).to_bits()
        );
    }

    #[test]
    fn apply_is_exact_in_decimal() {
        let price = Decimal::new(7, 0);

        assert_eq!(Discount::PercentOff(20).apply(price), Decimal::new(56, 1));
        assert_eq!(Discount::None.apply(price), price);
    }

    #[test]
    fn fraction_is_percent_over_one_hundred() {
        assert_eq!(
            Discount::PercentOff(15).fraction() * Decimal::ONE,
            Decimal::new(15, 2)
        );
        assert_eq!(Discount::None.fraction() * Decimal::ONE, Decimal::ZERO);
    }

    #[test]
    fn label_only_for_discounted_products() {
        assert_eq!(
            Discount::PercentOff(10).label().as_deref(),
            Some("10% Discount")
        );
        assert_eq!(Discount::None.label(), None);
    }

    #[test]
    fn try_from_optional_percentage() -> TestResult {
        assert_eq!(Discount::try_from(None)?, Discount::None);
        assert_eq!(Discount::try_from(Some(20))?, Discount::PercentOff(20));
        assert!(Discount::try_from(Some(150)).is_err());

        Ok(())
    }
}
