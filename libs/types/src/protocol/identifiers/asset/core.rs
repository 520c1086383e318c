//! # AssetId Core Implementation - Packed 32-bit Asset Identifiers
//!
//! ## Purpose
//!
//! Compact, bijective encoding of human-readable asset symbols into 32-bit
//! identifiers stored in consensus-relevant vote records. Every node must
//! produce the exact same bits for the same symbol, so the layout below is a
//! wire contract, not an implementation detail.
//!
//! ## Bit Layout
//!
//! ```text
//!  31 30 29                                                    0
//! ┌─────┬──────────────────────────────────────────────────────┐
//! │ hdr │                    payload (30 bits)                 │
//! └─────┴──────────────────────────────────────────────────────┘
//!   00   Raw:      plain integer in [1, 0x3FFFFFFF]
//!   01   Alpha:    6 slots × 5 bits, A-Z → 0x01..0x1A
//!   10   AlphaNum: 5 slots × 6 bits, A-Z → 0x01..0x1A, 0-9 → 0x20..0x29
//!   11   Reserved: never valid
//! ```
//!
//! Characters are accumulated most significant first, so the final character
//! sits in the lowest slot and short symbols leave the high slots zero:
//!
//! ```text
//! "BTC"   → 0b01 | 00000 00000 00000 00010 10100 00011 = 0x40000a83
//! "ABC09" → 0b10 | 000001 000010 000011 100000 101001  = 0x81083829
//! ```
//!
//! ## Selection Precedence
//!
//! 1. `ID` + 10 decimal digits → Raw
//! 2. 1-6 uppercase letters → Alpha
//! 3. 1-5 uppercase letters or digits → AlphaNum
//! 4. anything else → [`ASSET_ID_INVALID`]
//!
//! Validity is a property of the (header, payload) pair: an AlphaNum-header
//! pattern spelling `BTC` is rejected because the encoder would choose Alpha
//! for that symbol.
//!
//! ## Examples
//!
//! ```rust
//! use bcx_types::{asset_id_to_str, encode_asset_id, is_valid_asset_id, AssetId};
//!
//! let btc = encode_asset_id("BTC");
//! assert_eq!(btc.to_u32(), 0x40000a83);
//! assert_eq!(asset_id_to_str(btc), "BTC");
//!
//! let raw = encode_asset_id("ID0000000123");
//! assert_eq!(raw.to_u32(), 123);
//!
//! assert!(!is_valid_asset_id(AssetId::from_u32(0x80002503)));
//! ```

use crate::common::errors::AssetIdError;
use crate::protocol::constants::{
    AssetIdHeader, ASSET_ID_INVALID, ASSET_ID_PAYLOAD_MASK, ASSET_ID_WIRE_SIZE, INVALID_ID_STR,
    MAX_RAW_ASSET_ID, RAW_ID_DIGITS, RAW_ID_PREFIX,
};
use byteorder::{ByteOrder, LittleEndian};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packed 32-bit asset identifier
///
/// Any bit pattern can be held; use [`AssetId::is_valid`] or the strict
/// `TryFrom<u32>` conversion when the value comes from untrusted data.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct AssetId(u32);

impl AssetId {
    /// The universal invalid sentinel (`0xFFFFFFFF`)
    pub const INVALID: AssetId = AssetId(ASSET_ID_INVALID);

    /// Wrap a bit pattern without validation
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Raw 32-bit value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    const fn with_header(header: AssetIdHeader, payload: u32) -> Self {
        Self(header.bits() | (payload & ASSET_ID_PAYLOAD_MASK))
    }

    /// Encoding variant in the top two bits
    pub const fn header(self) -> AssetIdHeader {
        AssetIdHeader::of(self.0)
    }

    /// Low 30 bits
    pub const fn payload(self) -> u32 {
        self.0 & ASSET_ID_PAYLOAD_MASK
    }

    /// True for the `0xFFFFFFFF` sentinel only
    pub const fn is_sentinel(self) -> bool {
        self.0 == ASSET_ID_INVALID
    }

    /// See [`is_valid_asset_id`]
    pub fn is_valid(self) -> bool {
        is_valid_asset_id(self)
    }

    /// Serialize as 4 little-endian bytes
    pub fn to_bytes(self) -> [u8; ASSET_ID_WIRE_SIZE] {
        let mut buf = [0u8; ASSET_ID_WIRE_SIZE];
        LittleEndian::write_u32(&mut buf, self.0);
        buf
    }

    /// Deserialize from exactly 4 little-endian bytes
    ///
    /// Only the length is checked; validity is left to the caller so that
    /// stored sentinels survive a round trip.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetIdError> {
        if bytes.len() != ASSET_ID_WIRE_SIZE {
            return Err(AssetIdError::WireLength {
                expected: ASSET_ID_WIRE_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(LittleEndian::read_u32(bytes)))
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<AssetId> for u32 {
    fn from(id: AssetId) -> Self {
        id.0
    }
}

impl TryFrom<u32> for AssetId {
    type Error = AssetIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let id = AssetId(value);
        match id.header() {
            AssetIdHeader::Reserved => Err(AssetIdError::ReservedHeader { value }),
            _ if id.is_valid() => Ok(id),
            _ => Err(AssetIdError::NotCanonical { value }),
        }
    }
}

impl FromStr for AssetId {
    type Err = AssetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = encode_asset_id(s);
        if id.is_sentinel() {
            Err(AssetIdError::InvalidSymbol {
                symbol: s.to_string(),
            })
        } else {
            Ok(id)
        }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&asset_id_to_str(*self))
    }
}

/// Per-variant character packing rules
struct SymbolLayout {
    header: AssetIdHeader,
    bits_per_char: u32,
    max_len: usize,
    encode_char: fn(u8) -> Option<u32>,
    decode_char: fn(u32) -> Option<u8>,
}

const ALPHA_LAYOUT: SymbolLayout = SymbolLayout {
    header: AssetIdHeader::Alpha,
    bits_per_char: 5,
    max_len: 6,
    encode_char: alpha_code,
    decode_char: alpha_char,
};

const ALPHANUM_LAYOUT: SymbolLayout = SymbolLayout {
    header: AssetIdHeader::AlphaNum,
    bits_per_char: 6,
    max_len: 5,
    encode_char: alphanum_code,
    decode_char: alphanum_char,
};

impl SymbolLayout {
    fn pack(&self, symbol: &str) -> Option<AssetId> {
        let bytes = symbol.as_bytes();
        if bytes.is_empty() || bytes.len() > self.max_len {
            return None;
        }

        let mut payload = 0u32;
        for &b in bytes {
            payload = (payload << self.bits_per_char) | (self.encode_char)(b)?;
        }
        Some(AssetId::with_header(self.header, payload))
    }

    fn unpack(&self, payload: u32) -> Option<String> {
        let mask = (1u32 << self.bits_per_char) - 1;
        let mut symbol = Vec::with_capacity(self.max_len);

        for slot in (0..self.max_len as u32).rev() {
            let code = (payload >> (slot * self.bits_per_char)) & mask;
            if code == 0 && symbol.is_empty() {
                continue;
            }
            symbol.push((self.decode_char)(code)?);
        }

        if symbol.is_empty() {
            return None;
        }
        String::from_utf8(symbol).ok()
    }
}

fn alpha_code(b: u8) -> Option<u32> {
    b.is_ascii_uppercase().then(|| u32::from(b - 0x40))
}

fn alpha_char(code: u32) -> Option<u8> {
    (0x01..=0x1A).contains(&code).then(|| code as u8 + 0x40)
}

fn alphanum_code(b: u8) -> Option<u32> {
    match b {
        b'A'..=b'Z' => Some(u32::from(b - 0x40)),
        b'0'..=b'9' => Some(u32::from(b - 0x10)),
        _ => None,
    }
}

fn alphanum_char(code: u32) -> Option<u8> {
    match code {
        0x01..=0x1A => Some(code as u8 + 0x40),
        0x20..=0x29 => Some(code as u8 + 0x10),
        _ => None,
    }
}

/// Parse `ID` + 10 digits. `None` if the text does not have that shape,
/// `Some(value)` otherwise, even when the value is out of range.
fn raw_id_text(symbol: &str) -> Option<u64> {
    let digits = symbol.strip_prefix(RAW_ID_PREFIX)?;
    if digits.len() != RAW_ID_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Encode a symbol string into an asset id
///
/// Returns [`AssetId::INVALID`] for empty input, disallowed characters,
/// over-long symbols, and raw ids outside `[1, 0x3FFFFFFF]`.
pub fn encode_asset_id(symbol: &str) -> AssetId {
    if let Some(value) = raw_id_text(symbol) {
        return match u32::try_from(value) {
            Ok(raw) if (1..=MAX_RAW_ASSET_ID).contains(&raw) => AssetId(raw),
            _ => AssetId::INVALID,
        };
    }

    ALPHA_LAYOUT
        .pack(symbol)
        .or_else(|| ALPHANUM_LAYOUT.pack(symbol))
        .unwrap_or(AssetId::INVALID)
}

/// Normalize an already numeric id
///
/// Only non-zero values carrying the Raw header pass through, so an Alpha or
/// AlphaNum pattern cannot be smuggled in as a plain number.
pub fn encode_raw_asset_id(raw: u32) -> AssetId {
    let id = AssetId(raw);
    if id.header() == AssetIdHeader::Raw && raw != 0 {
        id
    } else {
        AssetId::INVALID
    }
}

fn decode_symbol(id: AssetId) -> Option<String> {
    match id.header() {
        AssetIdHeader::Raw => Some(format!(
            "{}{:0width$}",
            RAW_ID_PREFIX,
            id.payload(),
            width = RAW_ID_DIGITS
        )),
        AssetIdHeader::Alpha => ALPHA_LAYOUT.unpack(id.payload()),
        AssetIdHeader::AlphaNum => ALPHANUM_LAYOUT.unpack(id.payload()),
        AssetIdHeader::Reserved => None,
    }
}

/// Render an asset id as text
///
/// Raw ids become `ID` + 10 zero-padded digits. Ids that do not unpack
/// (reserved header, empty or out-of-alphabet slots) become `"INVALID_ID"`.
pub fn asset_id_to_str(id: AssetId) -> String {
    decode_symbol(id).unwrap_or_else(|| INVALID_ID_STR.to_string())
}

/// True iff `id` is exactly what [`encode_asset_id`] produces for some symbol
///
/// Alpha and AlphaNum ids are decoded and re-encoded; the valid character
/// codes are not contiguous, so a range check alone is not enough.
pub fn is_valid_asset_id(id: AssetId) -> bool {
    match id.header() {
        AssetIdHeader::Raw => id.payload() != 0,
        AssetIdHeader::Alpha | AssetIdHeader::AlphaNum => {
            decode_symbol(id).is_some_and(|symbol| encode_asset_id(&symbol) == id)
        }
        AssetIdHeader::Reserved => false,
    }
}
