//! Identifier types carried in vote records

pub mod asset;

pub use asset::*;
