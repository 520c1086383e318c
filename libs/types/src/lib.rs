//! # B&C Exchange Asset Types
//!
//! Compact numeric encodings for consensus data in asset and trade-bound votes.
//!
//! ## Design Philosophy
//!
//! - **Bit-Exact Wire Contracts**: every node must produce identical ids and parameters
//! - **Sentinels, Not Panics**: codec functions signal bad input with `ASSET_ID_INVALID`
//! - **No Precision Loss**: quantities are integers; decimals only at the display boundary
//! - **Pure Functions**: no blocking and no mutable shared state
//!
//! ## Quick Start
//!
//! ### Asset Identifiers
//! ```rust
//! use bcx_types::{asset_id_to_str, encode_asset_id, is_valid_asset_id, asset_name};
//!
//! let btc = encode_asset_id("BTC");
//! assert_eq!(btc.to_u32(), 0x40000a83);
//! assert_eq!(asset_id_to_str(btc), "BTC");
//! assert!(is_valid_asset_id(btc));
//! assert_eq!(asset_name(btc), "Bitcoin");
//! ```
//!
//! ### Exponential Parameters
//! ```rust
//! use bcx_types::{convert_exp_parameter, exponential_parameter};
//!
//! let param = exponential_parameter(123_456);
//! assert_eq!(param, 46); // 100_000
//! assert_eq!(convert_exp_parameter(param, 8, 4), 10); // 10
//! ```
//!
//! ## Integration Points
//!
//! - **Vote Serialization**: stores `AssetId` (4 bytes) and `ExpParameter` (1 byte)
//! - **Vote Dialogs**: render ids, names and bounds for display and input
//! - **Consensus**: compares ids and parameters produced by other nodes

pub mod common;
pub mod precision;
pub mod protocol;

pub use common::errors::{AssetIdError, ExpParameterError};

pub use precision::{
    convert_exp_parameter, exponential_parameter, ExpParameter, UnitExponent, EXPONENTIAL_SERIES,
};

pub use protocol::constants::{
    AssetIdHeader, ASSET_ID_INVALID, INVALID_ID_STR, MAX_EXP_PARAMETER, MAX_RAW_ASSET_ID,
    MAX_TRADABLE_UNIT_EXPONENT,
};
pub use protocol::identifiers::{
    asset_id_to_str, asset_name, asset_symbol, asset_unit_exponent, coin_metadata,
    encode_asset_id, encode_raw_asset_id, is_valid_asset_id, known_assets, AssetId, CoinMetadata,
};
