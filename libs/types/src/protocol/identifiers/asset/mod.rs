//! # Asset Identifier System
//!
//! ## Module Organization
//!
//! ### Core Codec (`core.rs`)
//! - **AssetId**: packed 32-bit identifier with a 2-bit variant header
//! - **Encoding**: symbol text and raw numbers to ids, sentinel on failure
//! - **Decoding**: ids back to text, `"INVALID_ID"` when they do not unpack
//! - **Validation**: decode/re-encode double pass
//!
//! ### Coin Metadata (`metadata.rs`)
//! - **CoinMetadata**: symbol, display name and default unit exponent
//! - **Lookups**: empty string / zero exponent for unknown assets

pub mod core;
pub mod metadata;

pub use self::core::*;
pub use self::metadata::*;
