//! Exponential Quantity Encoding for Vote Records
//!
//! Trade-amount bounds in votes are stored as a single byte: an index into a
//! fixed logarithmic ladder of magnitudes `d × 10^k`. This module owns that
//! ladder, the floor lookup from a quantity to its index, and the re-scaling
//! of an index between unit exponents.
//!
//! ## Critical Rules
//!
//! 1. **Floor, never round**: a quantity maps to the largest tabulated value ≤ it
//! 2. **Index arithmetic only**: re-scaling shifts the index by 9 per decade and
//!    never materializes `value × 10^n`, so it cannot overflow
//! 3. **Saturate**: shifted indices clamp to `[0, 171]`
//! 4. **Quantities are non-negative**: negative input is a caller bug
//!
//! ## Example Usage
//!
//! ```rust
//! use bcx_types::precision::{convert_exp_parameter, exponential_parameter, ExpParameter};
//!
//! assert_eq!(exponential_parameter(99), 18); // floors to 90
//! assert_eq!(convert_exp_parameter(40, 0, 1), 49); // 40_000 → 400_000
//!
//! let bound = ExpParameter::from_quantity(2_500_000);
//! assert_eq!(bound.quantity(), 2_000_000);
//! ```

#[cfg(feature = "common")]
mod decimal;
mod series;

pub use series::*;

use crate::common::errors::ExpParameterError;
use crate::protocol::constants::MAX_TRADABLE_UNIT_EXPONENT;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Power-of-ten scale of an asset's smallest unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct UnitExponent(u8);

impl UnitExponent {
    /// Largest tradable exponent (18)
    pub const MAX: UnitExponent = UnitExponent(MAX_TRADABLE_UNIT_EXPONENT);

    /// Satoshi-style 8 decimal places
    pub const SATOSHI: UnitExponent = UnitExponent(8);

    pub fn new(value: u8) -> Result<Self, ExpParameterError> {
        if value > MAX_TRADABLE_UNIT_EXPONENT {
            return Err(ExpParameterError::UnitExponentTooLarge {
                value,
                max: MAX_TRADABLE_UNIT_EXPONENT,
            });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// `10^exponent` as an integer
    pub const fn scale(self) -> i64 {
        10i64.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for UnitExponent {
    type Error = ExpParameterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitExponent> for u8 {
    fn from(exp: UnitExponent) -> Self {
        exp.0
    }
}

impl fmt::Display for UnitExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_exponent_bounds() {
        assert_eq!(UnitExponent::new(0).unwrap().get(), 0);
        assert_eq!(UnitExponent::new(18).unwrap(), UnitExponent::MAX);
        assert_eq!(
            UnitExponent::new(19),
            Err(ExpParameterError::UnitExponentTooLarge { value: 19, max: 18 })
        );
    }

    #[test]
    fn test_unit_exponent_scale() {
        assert_eq!(UnitExponent::SATOSHI.scale(), 100_000_000);
        assert_eq!(UnitExponent::MAX.scale(), 1_000_000_000_000_000_000);
    }
}
