//! Defines some common functions used in this library.

/// Defines some numeric helpers such as the single precision round trip.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
