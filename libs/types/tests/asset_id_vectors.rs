//! Asset Id Literal Vector Tests
//!
//! Bit-exact vectors, sentinel stability and header spoofing. These values are
//! shared with every other node, so a failure here means votes would not
//! interoperate.

mod common;

use bcx_types::{
    asset_id_to_str, encode_asset_id, encode_raw_asset_id, is_valid_asset_id, AssetId,
    AssetIdHeader, ASSET_ID_INVALID, INVALID_ID_STR,
};
use common::*;
use std::collections::HashSet;

#[test]
fn test_literal_vectors() {
    for &(symbol, expected) in ASSET_ID_VECTORS {
        let id = encode_asset_id(symbol);
        assert_eq!(id.to_u32(), expected, "encoding {}", symbol);
        assert_eq!(asset_id_to_str(id), symbol, "decoding 0x{:08x}", expected);
        assert!(is_valid_asset_id(id));
    }
}

#[test]
fn test_sentinel_stability() {
    assert_eq!(encode_asset_id(""), AssetId::INVALID);
    assert_eq!(encode_asset_id("ID0000000000"), AssetId::INVALID);
    assert_eq!(asset_id_to_str(AssetId::from_u32(ASSET_ID_INVALID)), INVALID_ID_STR);
    assert!(!is_valid_asset_id(AssetId::from_u32(0)));
    assert!(!is_valid_asset_id(AssetId::from_u32(ASSET_ID_INVALID)));
}

#[test]
fn test_raw_overflow_is_rejected_not_wrapped() {
    assert_eq!(encode_asset_id("ID1073741824"), AssetId::INVALID);
    // 2^32 + 5 would wrap to 5 in a 32-bit accumulator
    assert_eq!(encode_asset_id("ID4294967301"), AssetId::INVALID);
}

#[test]
fn test_alphanum_spelling_of_alpha_symbol_is_invalid() {
    assert!(!is_valid_asset_id(AssetId::from_u32(0x8000_2503)));
}

#[test]
fn test_precedence_prefers_alpha() {
    let cases = [
        ("ETH", AssetIdHeader::Alpha),
        ("BITCON", AssetIdHeader::Alpha),
        ("BTC2", AssetIdHeader::AlphaNum),
        ("12345", AssetIdHeader::AlphaNum),
        ("ID0000000007", AssetIdHeader::Raw),
    ];
    for (symbol, header) in cases {
        assert_eq!(encode_asset_id(symbol).header(), header, "{}", symbol);
    }
}

#[test]
fn test_reserved_header_never_valid() {
    for value in [0xC000_0000u32, 0xC000_0001, 0xD555_5555, ASSET_ID_INVALID] {
        let id = AssetId::from_u32(value);
        assert!(!is_valid_asset_id(id));
        assert_eq!(asset_id_to_str(id), INVALID_ID_STR);
    }
}

#[test]
fn test_raw_numeric_normalization() {
    assert_eq!(encode_raw_asset_id(123), encode_asset_id("ID0000000123"));
    assert_eq!(encode_raw_asset_id(0x4000_0a83), AssetId::INVALID);
}

#[test]
fn test_no_collisions_across_variants() {
    let symbols = [
        "A", "B", "AA", "BTC", "ETH", "NBT", "NSR", "BKS", "ZZZZZZ", "A1", "1A", "0", "00",
        "ABC09", "ID0000000001", "ID0000002691",
    ];
    let mut seen = HashSet::new();
    for symbol in symbols {
        let id = encode_asset_id(symbol);
        assert!(id.is_valid(), "{} should encode", symbol);
        assert!(seen.insert(id), "collision for {}", symbol);
    }
}

#[test]
fn test_exhaustive_single_and_double_letters() {
    let letters: Vec<char> = ('A'..='Z').collect();
    for &a in &letters {
        let one = a.to_string();
        assert_eq!(asset_id_to_str(encode_asset_id(&one)), one);
        for &b in &letters {
            let two: String = [a, b].iter().collect();
            let id = encode_asset_id(&two);
            assert_eq!(asset_id_to_str(id), two);
            assert!(is_valid_asset_id(id));
        }
    }
}
