//! Shared types used across the codec modules

pub mod errors;

pub use errors::{AssetIdError, ExpParameterError};
