//! Common Test Utilities
//!
//! Shared fixtures and proptest strategies for the codec test suites.

#![allow(dead_code)]

use proptest::prelude::*;

/// Literal (symbol, id) pairs other implementations agree on
pub const ASSET_ID_VECTORS: &[(&str, u32)] = &[
    ("BTC", 0x4000_0a83),
    ("ABC09", 0x8108_3829),
    ("A", 0x4000_0001),
    ("ID0000000001", 0x0000_0001),
    ("ID1073741823", 0x3FFF_FFFF),
];

/// 1-6 uppercase letters
pub fn alpha_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,6}"
}

/// 1-5 uppercase letters or digits containing at least one digit
pub fn alphanum_symbol() -> impl Strategy<Value = String> {
    ("[A-Z0-9]{0,4}", 0..=9u8, any::<prop::sample::Index>()).prop_map(|(rest, digit, at)| {
        let mut symbol = rest;
        let pos = at.index(symbol.len() + 1);
        symbol.insert(pos, char::from(b'0' + digit));
        symbol
    })
}

/// Any raw numeric id
pub fn raw_id() -> impl Strategy<Value = u32> {
    1u32..=0x3FFF_FFFF
}

/// `ID` + zero padded 10 digit text form
pub fn raw_id_text(n: u32) -> String {
    format!("ID{:010}", n)
}
