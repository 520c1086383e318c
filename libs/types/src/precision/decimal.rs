//! Decimal bridge for exponential parameters
//!
//! Vote dialogs take trade bounds as human amounts ("0.0001 BTC") and show
//! them back the same way. Conversion goes through `rust_decimal` so no
//! floating point touches a consensus value.

use super::{ExpParameter, UnitExponent};
use crate::common::errors::ExpParameterError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

impl ExpParameter {
    /// Floor a decimal amount, expressed in whole units, onto the series
    ///
    /// The amount is scaled by `10^unit_exponent` and truncated to an integer
    /// quantity of smallest units before the lookup.
    ///
    /// # Examples
    /// ```
    /// use bcx_types::precision::{ExpParameter, UnitExponent};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amount = Decimal::from_str("0.00015").unwrap();
    /// let param = ExpParameter::from_decimal(amount, UnitExponent::SATOSHI).unwrap();
    /// assert_eq!(param.quantity(), 10_000);
    /// ```
    pub fn from_decimal(
        amount: Decimal,
        unit_exponent: UnitExponent,
    ) -> Result<Self, ExpParameterError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ExpParameterError::NegativeQuantity {
                input: amount.to_string(),
            });
        }

        let overflow = || ExpParameterError::AmountOverflow {
            input: amount.to_string(),
            unit_exponent: unit_exponent.get(),
        };

        let quantity = amount
            .checked_mul(Decimal::from(unit_exponent.scale()))
            .ok_or_else(&overflow)?
            .trunc()
            .to_i64()
            .ok_or_else(&overflow)?;

        Ok(Self::from_quantity(quantity))
    }

    /// Tabulated quantity rendered in whole units
    pub fn to_decimal(self, unit_exponent: UnitExponent) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.quantity()), u32::from(unit_exponent.get()))
            .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_decimal_floors() {
        let param = ExpParameter::from_decimal(dec!(1.99), UnitExponent::SATOSHI).unwrap();
        assert_eq!(param.quantity(), 100_000_000);

        let param = ExpParameter::from_decimal(dec!(0), UnitExponent::SATOSHI).unwrap();
        assert_eq!(param, ExpParameter::ZERO);

        // Below one smallest unit
        let nbt = UnitExponent::new(4).unwrap();
        let param = ExpParameter::from_decimal(dec!(0.00009), nbt).unwrap();
        assert_eq!(param, ExpParameter::ZERO);
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        assert!(matches!(
            ExpParameter::from_decimal(dec!(-0.5), UnitExponent::SATOSHI),
            Err(ExpParameterError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_from_decimal_overflow() {
        assert!(matches!(
            ExpParameter::from_decimal(dec!(100), UnitExponent::MAX),
            Err(ExpParameterError::AmountOverflow { unit_exponent: 18, .. })
        ));
    }

    #[test]
    fn test_to_decimal() {
        let param = ExpParameter::from_quantity(30_000);
        assert_eq!(param.to_decimal(UnitExponent::SATOSHI), dec!(0.0003));
        assert_eq!(param.to_decimal(UnitExponent::default()), dec!(30000));
        assert_eq!(ExpParameter::MAX.to_decimal(UnitExponent::MAX), dec!(9));
    }
}
