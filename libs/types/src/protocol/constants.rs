//! Wire-level constants shared by the asset id and exponential parameter codecs
//!
//! Every value here is consensus relevant: other nodes produce the same bits,
//! so none of these may change without a network upgrade.

use num_enum::{FromPrimitive, IntoPrimitive};

/// Universal "invalid id" sentinel, never a valid encoding
pub const ASSET_ID_INVALID: u32 = 0xFFFF_FFFF;

/// Text produced for ids that do not decode
pub const INVALID_ID_STR: &str = "INVALID_ID";

/// Number of bits below the 2-bit header
pub const ASSET_ID_PAYLOAD_BITS: u32 = 30;

/// Mask selecting the 30-bit payload
pub const ASSET_ID_PAYLOAD_MASK: u32 = (1 << ASSET_ID_PAYLOAD_BITS) - 1;

/// Largest raw numeric id (`0x3FFFFFFF`)
pub const MAX_RAW_ASSET_ID: u32 = ASSET_ID_PAYLOAD_MASK;

/// Prefix of the raw-id text form, e.g. `ID0000000123`
pub const RAW_ID_PREFIX: &str = "ID";

/// Number of decimal digits following [`RAW_ID_PREFIX`]
pub const RAW_ID_DIGITS: usize = 10;

/// Size of an asset id on the wire
pub const ASSET_ID_WIRE_SIZE: usize = 4;

/// Highest unit exponent a tradable asset may use
pub const MAX_TRADABLE_UNIT_EXPONENT: u8 = 18;

/// Entries in the exponential series (indices 0..=171)
pub const EXP_SERIES_LEN: usize = 172;

/// Largest valid exponential parameter
pub const MAX_EXP_PARAMETER: u8 = (EXP_SERIES_LEN - 1) as u8;

/// Series entries per decade; advancing this many indices multiplies by ten
pub const EXP_STEPS_PER_DECADE: i32 = 9;

/// Encoding variant selected by the top two bits of an asset id
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
pub enum AssetIdHeader {
    /// Plain 30-bit number, rendered as `ID` + 10 digits
    Raw = 0,
    /// Up to 6 letters, 5 bits each
    Alpha = 1,
    /// Up to 5 letters or digits, 6 bits each
    AlphaNum = 2,
    /// Never produced by the encoder
    #[num_enum(default)]
    Reserved = 3,
}

impl AssetIdHeader {
    /// Extract the header from a packed id
    pub const fn of(value: u32) -> Self {
        match value >> ASSET_ID_PAYLOAD_BITS {
            0 => AssetIdHeader::Raw,
            1 => AssetIdHeader::Alpha,
            2 => AssetIdHeader::AlphaNum,
            _ => AssetIdHeader::Reserved,
        }
    }

    /// Header bits shifted into position
    pub const fn bits(self) -> u32 {
        (self as u32) << ASSET_ID_PAYLOAD_BITS
    }
}
