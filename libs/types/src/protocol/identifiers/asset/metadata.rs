//! Coin metadata table
//!
//! Read-only (symbol, display name, unit exponent) entries for the assets the
//! wallet knows by name. Built once on first access and never mutated. A miss
//! is not an error: callers render unknown ids as custom assets.

use super::core::{encode_asset_id, AssetId};
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Display metadata for a known asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CoinMetadata {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Decimal places of the smallest unit (8 = satoshi precision)
    pub unit_exponent: u8,
}

// (symbol, name, unit exponent)
const KNOWN_COINS: &[(&str, &str, u8)] = &[
    ("BKS", "BlockShares", 8),
    ("BTC", "Bitcoin", 8),
    ("DASH", "Dash", 8),
    ("DOGE", "Dogecoin", 8),
    ("ETH", "Ether", 18),
    ("LTC", "Litecoin", 8),
    ("NBT", "NuBits", 4),
    ("NSR", "NuShares", 4),
    ("PPC", "Peercoin", 6),
    ("XMR", "Monero", 12),
    ("XRP", "Ripple", 6),
    ("ZEC", "Zcash", 8),
];

static COIN_METADATA: Lazy<HashMap<AssetId, CoinMetadata>> = Lazy::new(|| {
    let table: HashMap<_, _> = KNOWN_COINS
        .iter()
        .map(|&(symbol, name, unit_exponent)| {
            (
                encode_asset_id(symbol),
                CoinMetadata {
                    symbol,
                    name,
                    unit_exponent,
                },
            )
        })
        .collect();
    debug!(entries = table.len(), "coin metadata table initialized");
    table
});

/// Metadata for `id`, if the asset is known
pub fn coin_metadata(id: AssetId) -> Option<&'static CoinMetadata> {
    COIN_METADATA.get(&id)
}

/// Ticker symbol, or `""` for unknown assets
pub fn asset_symbol(id: AssetId) -> &'static str {
    coin_metadata(id).map_or("", |meta| meta.symbol)
}

/// Display name, or `""` for unknown assets
pub fn asset_name(id: AssetId) -> &'static str {
    coin_metadata(id).map_or("", |meta| meta.name)
}

/// Default unit exponent, or `0` for unknown assets
pub fn asset_unit_exponent(id: AssetId) -> u8 {
    coin_metadata(id).map_or(0, |meta| meta.unit_exponent)
}

/// All known assets ordered by symbol
pub fn known_assets() -> Vec<(AssetId, &'static CoinMetadata)> {
    let mut assets: Vec<_> = COIN_METADATA.iter().map(|(id, meta)| (*id, meta)).collect();
    assets.sort_by_key(|(_, meta)| meta.symbol);
    assets
}
