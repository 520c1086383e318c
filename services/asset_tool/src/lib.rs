//! # B&C Exchange Asset Tool
//!
//! Command implementations behind the `bcx-asset` binary. Each command
//! returns a serializable report that renders either as plain text or JSON.

pub mod commands;

pub use commands::{
    amount, convert, decode, encode, list, param, parse_asset_id_arg, series, AmountReport, AssetRow,
    ConvertReport, DecodeReport, EncodeReport, ParamReport,
};
