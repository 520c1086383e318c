//! The exponential series and the two algorithms over it

use crate::common::errors::ExpParameterError;
use crate::protocol::constants::{EXP_SERIES_LEN, EXP_STEPS_PER_DECADE, MAX_EXP_PARAMETER};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude ladder indexed by exponential parameter
///
/// `EXPONENTIAL_SERIES[9k + d] == d × 10^k` for `d` in 1..=9 and `k` in 0..=18,
/// with index 0 holding zero. Strictly increasing; the last entry is `9 × 10^18`.
pub const EXPONENTIAL_SERIES: [i64; EXP_SERIES_LEN] = build_series();

const fn build_series() -> [i64; EXP_SERIES_LEN] {
    let mut series = [0i64; EXP_SERIES_LEN];
    let mut power = 1i64;
    let mut decade = 0;
    while decade < 19 {
        let mut digit = 1;
        while digit <= 9 {
            series[9 * decade + digit] = digit as i64 * power;
            digit += 1;
        }
        // 10^19 does not fit in an i64
        if decade < 18 {
            power *= 10;
        }
        decade += 1;
    }
    series
}

/// Largest index whose series value is `<= value`
///
/// `value` must be non-negative. Debug builds assert it; release builds map
/// negative input to 0.
pub fn exponential_parameter(value: i64) -> u8 {
    debug_assert!(value >= 0, "negative quantity {value}");
    let above = EXPONENTIAL_SERIES.partition_point(|&entry| entry <= value);
    above.saturating_sub(1) as u8
}

/// Re-express `param`, encoded at scale `from_exp`, at scale `to_exp`
///
/// Each decade spans nine indices, so the index moves by
/// `9 × (to_exp - from_exp)` and is clamped to `[0, 171]`. Zero stays zero.
pub fn convert_exp_parameter(param: u8, from_exp: u8, to_exp: u8) -> u8 {
    if param == 0 {
        return 0;
    }
    let shift = EXP_STEPS_PER_DECADE * (i32::from(to_exp) - i32::from(from_exp));
    (i32::from(param) + shift).clamp(0, i32::from(MAX_EXP_PARAMETER)) as u8
}

/// Validated exponential parameter, one byte on the wire
///
/// Deserialization rejects bytes above 171.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct ExpParameter(u8);

impl ExpParameter {
    pub const ZERO: ExpParameter = ExpParameter(0);
    pub const MAX: ExpParameter = ExpParameter(MAX_EXP_PARAMETER);

    /// Floor `quantity` onto the series; see [`exponential_parameter`]
    pub fn from_quantity(quantity: i64) -> Self {
        Self(exponential_parameter(quantity))
    }

    /// Like [`ExpParameter::from_quantity`] but rejects negative input
    pub fn try_from_quantity(quantity: i64) -> Result<Self, ExpParameterError> {
        if quantity < 0 {
            return Err(ExpParameterError::NegativeQuantity {
                input: quantity.to_string(),
            });
        }
        Ok(Self::from_quantity(quantity))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Tabulated magnitude for this index
    pub fn quantity(self) -> i64 {
        EXPONENTIAL_SERIES[usize::from(self.0)]
    }

    /// See [`convert_exp_parameter`]
    pub fn convert(self, from_exp: u8, to_exp: u8) -> Self {
        Self(convert_exp_parameter(self.0, from_exp, to_exp))
    }
}

impl TryFrom<u8> for ExpParameter {
    type Error = ExpParameterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_EXP_PARAMETER {
            return Err(ExpParameterError::OutOfRange {
                value,
                max: MAX_EXP_PARAMETER,
            });
        }
        Ok(Self(value))
    }
}

impl From<ExpParameter> for u8 {
    fn from(param: ExpParameter) -> Self {
        param.0
    }
}

impl fmt::Display for ExpParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
