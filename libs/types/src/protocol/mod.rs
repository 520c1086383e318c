//! Protocol layer modules
//!
//! Wire constants and the identifier types whose bit layout is shared with
//! every other node on the network.

pub mod constants;
pub mod identifiers;

pub use constants::*;
pub use identifiers::*;
