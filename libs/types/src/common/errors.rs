//! Error types for asset identifier and exponential parameter validation
//!
//! The free codec functions never fail: they signal bad input through the
//! `ASSET_ID_INVALID` sentinel. These errors are only produced by the typed
//! constructors (`TryFrom`, `FromStr`, wire decoding) layered on top.

use thiserror::Error;

/// Errors produced when building an [`AssetId`](crate::AssetId) from untrusted input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetIdError {
    /// Symbol text does not match any of the raw, alpha or alphanumeric forms
    #[error("'{symbol}' is not a valid asset symbol")]
    InvalidSymbol { symbol: String },

    /// Header bits are `11`, which no encoding produces
    #[error("asset id 0x{value:08x} uses the reserved header")]
    ReservedHeader { value: u32 },

    /// Bit pattern decodes, but the encoder would never produce it
    #[error("asset id 0x{value:08x} is not a canonical encoding")]
    NotCanonical { value: u32 },

    /// Wire buffer has the wrong size
    #[error("asset id requires {expected} bytes, got {actual}")]
    WireLength { expected: usize, actual: usize },
}

/// Errors produced by the typed exponential parameter API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpParameterError {
    /// Byte is outside the series index range
    #[error("exponential parameter {value} exceeds maximum {max}")]
    OutOfRange { value: u8, max: u8 },

    /// Quantities are never negative
    #[error("quantity {input} is negative")]
    NegativeQuantity { input: String },

    /// Unit exponent above the tradable limit
    #[error("unit exponent {value} exceeds maximum tradable exponent {max}")]
    UnitExponentTooLarge { value: u8, max: u8 },

    /// Decimal amount does not fit in an i64 once scaled
    #[error("amount '{input}' overflows at unit exponent {unit_exponent}")]
    AmountOverflow { input: String, unit_exponent: u8 },
}
